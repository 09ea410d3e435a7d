//! Page sources: enumerate pages of an input document and return their text.
//!
//! Extraction is all-or-nothing per document but forgiving per page: a page
//! that fails to extract is logged and contributes an empty string, so one
//! unreadable page never aborts a run.

mod options;
mod pdf;
mod text;

pub use options::{ExtractOptions, PageSelection, DEFAULT_PROGRESS_INTERVAL};
pub use pdf::PdfPageSource;
pub use text::{TextPageSource, PAGE_BREAK};

use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::detect::{detect_source_kind, SourceKind};
use crate::error::{Error, Result};
use crate::model::{ExtractedText, RawPage, SourceMetadata};

/// Abstract access to the pages of a source document.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract the text of one page (1-indexed).
    fn page_text(&self, page: u32) -> Result<String>;

    /// Describe the document.
    fn metadata(&self) -> SourceMetadata {
        SourceMetadata::new("unknown", self.page_count())
    }
}

impl<S: PageSource + ?Sized> PageSource for Box<S> {
    fn page_count(&self) -> u32 {
        (**self).page_count()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        (**self).page_text(page)
    }

    fn metadata(&self) -> SourceMetadata {
        (**self).metadata()
    }
}

/// Extraction progress, reported once per visited page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Page just processed (1-indexed)
    pub page: u32,

    /// Total pages in the document
    pub total: u32,
}

/// Open a source document, choosing the page source from its format.
pub fn open_source<P: AsRef<Path>>(path: P) -> Result<Box<dyn PageSource>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }

    match detect_source_kind(path)? {
        SourceKind::Pdf { version } => {
            log::debug!("Opening {} as PDF {}", path.display(), version);
            Ok(Box::new(PdfPageSource::open(path)?))
        }
        SourceKind::Text => {
            log::debug!("Opening {} as paged text", path.display());
            Ok(Box::new(TextPageSource::open(path)?))
        }
    }
}

/// Extract the selected pages of a source, in page order.
///
/// Pages that fail to extract are logged and recorded as empty. The
/// callback sees every visited page; a log line is written every
/// `progress_interval` pages.
pub fn extract_pages<S, F>(source: &S, options: &ExtractOptions, mut on_progress: F) -> ExtractedText
where
    S: PageSource + ?Sized,
    F: FnMut(Progress),
{
    let total = source.page_count();
    let mut extracted = ExtractedText::new(total);

    for number in (1..=total).filter(|n| options.pages.includes(*n)) {
        let page = match source.page_text(number) {
            Ok(text) if options.normalize_unicode => RawPage::new(number, text.nfc().collect::<String>()),
            Ok(text) => RawPage::new(number, text),
            Err(e) => {
                log::warn!("No text extracted from page {}: {}", number, e);
                RawPage::empty(number)
            }
        };
        extracted.push(page);

        if options.progress_interval > 0 && (number - 1) % options.progress_interval == 0 {
            log::info!("Processed page {}/{}", number, total);
        }
        on_progress(Progress {
            page: number,
            total,
        });
    }

    log::debug!(
        "Extracted {} pages ({} empty)",
        extracted.pages.len(),
        extracted.empty_pages()
    );
    extracted
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source whose every third page fails.
    struct FlakySource {
        pages: u32,
    }

    impl PageSource for FlakySource {
        fn page_count(&self) -> u32 {
            self.pages
        }

        fn page_text(&self, page: u32) -> Result<String> {
            if page % 3 == 0 {
                Err(Error::TextExtract(format!("Page {}: no text", page)))
            } else {
                Ok(format!("Art. {}.", page))
            }
        }
    }

    #[test]
    fn test_failed_pages_become_empty() {
        let source = FlakySource { pages: 6 };
        let extracted = extract_pages(&source, &ExtractOptions::default(), |_| {});

        assert_eq!(extracted.pages.len(), 6);
        assert_eq!(extracted.empty_pages(), 2);
        assert_eq!(extracted.to_text(), "Art. 1.\nArt. 2.\nArt. 4.\nArt. 5.\n");
    }

    #[test]
    fn test_page_selection_and_progress() {
        let source = FlakySource { pages: 10 };
        let options = ExtractOptions::new().with_pages(PageSelection::Range(2..=4));
        let mut seen = Vec::new();
        let extracted = extract_pages(&source, &options, |p| seen.push(p.page));

        assert_eq!(seen, vec![2, 3, 4]);
        assert_eq!(extracted.total_pages, 10);
        assert_eq!(extracted.pages[0].number, 2);
    }

    #[test]
    fn test_text_is_nfc_normalized() {
        // "E" followed by a combining ogonek composes to "Ę".
        let source = TextPageSource::from_pages(["KSIE\u{0328}GA PIERWSZA"]);
        let extracted = extract_pages(&source, &ExtractOptions::default(), |_| {});
        assert_eq!(extracted.pages[0].text, "KSIĘGA PIERWSZA");

        let raw = extract_pages(
            &source,
            &ExtractOptions::new().with_unicode_normalization(false),
            |_| {},
        );
        assert_eq!(raw.pages[0].text, "KSIE\u{0328}GA PIERWSZA");
    }

    #[test]
    fn test_open_source_missing_input() {
        let result = open_source("/nonexistent/kodeks.pdf");
        assert!(matches!(result, Err(Error::MissingInput(_))));
    }

    #[test]
    fn test_open_source_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kodeks.txt");
        std::fs::write(&path, "Art. 1.\u{000C}Art. 2.").unwrap();

        let source = open_source(&path).unwrap();
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.metadata().format, "paged text");
    }
}
