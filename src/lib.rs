//! # lawmd
//!
//! Converts text extracted from official statute PDFs into structured Markdown.
//!
//! The pipeline has three stages:
//!
//! 1. **Noise filter**: drops repeated page furniture (publisher stamp,
//!    `s. N/M` page counters, bare dates).
//! 2. **Structural promoter**: rewrites books, titles, divisions and chapters
//!    as headings, articles as emphasis and paragraphs as bullets.
//! 3. **Emitter**: prefixes a front matter block and writes the document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lawmd::{convert_file, emit::write_document};
//!
//! fn main() -> lawmd::Result<()> {
//!     let result = convert_file("kodeks_cywilny.pdf")?;
//!     write_document("public/laws/kodeks_cywilny.md", &result.content)?;
//!     println!("{} markers", result.stats.marker_total());
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod detect;
pub mod emit;
pub mod error;
pub mod model;
pub mod source;
pub mod transform;

// Re-export commonly used types
pub use convert::{ConversionStats, ConvertOptions, ConvertResult};
pub use detect::{detect_source_kind, SourceKind};
pub use emit::{write_document, FrontMatter};
pub use error::{Error, Result};
pub use model::{ExtractedText, MarkerStyle, RawPage, SourceMetadata, StructuralLevel};
pub use source::{
    extract_pages, open_source, ExtractOptions, PageSelection, PageSource, PdfPageSource,
    Progress, TextPageSource,
};
pub use transform::{
    NoiseFilter, NoiseRule, RuleTable, StructuralPromoter, StructuralRule, DEFAULT_STAMP,
};

use std::path::Path;

/// Convert a source document with default options.
///
/// # Example
///
/// ```no_run
/// use lawmd::convert_file;
///
/// let result = convert_file("kodeks_cywilny.pdf").unwrap();
/// std::fs::write("kodeks_cywilny.md", result.content).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<ConvertResult> {
    convert::convert_file(path, &ConvertOptions::default(), |_| {})
}

/// Convert a source document with custom options.
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<ConvertResult> {
    convert::convert_file(path, options, |_| {})
}

/// Convert already extracted text into a complete Markdown document.
///
/// # Example
///
/// ```
/// let result = lawmd::convert_text("Art. 1. Kodeks niniejszy reguluje");
/// assert!(result.content.starts_with("---\n"));
/// assert!(result.body.contains("**Art. 1.**"));
/// ```
pub fn convert_text(text: &str) -> ConvertResult {
    convert::convert_text(text, &ConvertOptions::default())
}

/// Filter and promote text without adding front matter.
///
/// # Example
///
/// ```
/// let body = lawmd::structure_text("poprzedni\n§ 2. Tekst\n©Kancelaria Sejmu");
/// assert_eq!(body, "poprzedni\n\n* § 2. Tekst");
/// ```
pub fn structure_text(text: &str) -> String {
    convert::convert_text(text, &ConvertOptions::default()).body
}

/// Builder for converting statute documents.
///
/// # Example
///
/// ```no_run
/// use lawmd::{LawMd, PageSelection};
///
/// LawMd::new()
///     .with_title("Kodeks rodzinny i opiekuńczy")
///     .with_pages(PageSelection::Range(1..=40))
///     .convert("kodeks_rodzinny.pdf")?
///     .save("public/laws/kodeks_rodzinny.md")?;
/// # Ok::<(), lawmd::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LawMd {
    options: ConvertOptions,
}

impl LawMd {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the front matter title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.front_matter = self.options.front_matter.with_title(title);
        self
    }

    /// Set the front matter source attribution.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.options.front_matter = self.options.front_matter.with_source(source);
        self
    }

    /// Set the front matter document type.
    pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.options.front_matter = self.options.front_matter.with_doc_type(doc_type);
        self
    }

    /// Set the publisher stamp removed by the noise filter.
    pub fn with_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.options = self.options.with_stamp(stamp);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.options = self.options.with_pages(pages);
        self
    }

    /// Set the structural rule table.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.options = self.options.with_rules(rules);
        self
    }

    /// Log progress every `interval` pages.
    pub fn with_progress_interval(mut self, interval: u32) -> Self {
        self.options.extract = self.options.extract.with_progress_interval(interval);
        self
    }

    /// The options assembled so far.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a source document file.
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> Result<LawMdResult> {
        self.convert_with_progress(path, |_| {})
    }

    /// Convert a source document file, reporting each page.
    pub fn convert_with_progress<P, F>(&self, path: P, on_progress: F) -> Result<LawMdResult>
    where
        P: AsRef<Path>,
        F: FnMut(Progress),
    {
        let result = convert::convert_file(path, &self.options, on_progress)?;
        Ok(LawMdResult { result })
    }

    /// Convert already extracted text.
    pub fn convert_text(&self, text: &str) -> LawMdResult {
        LawMdResult {
            result: convert::convert_text(text, &self.options),
        }
    }
}

/// Result wrapper returned by [`LawMd`].
#[derive(Debug, Clone)]
pub struct LawMdResult {
    result: ConvertResult,
}

impl LawMdResult {
    /// Complete document: front matter followed by the body.
    pub fn content(&self) -> &str {
        &self.result.content
    }

    /// Markdown body without front matter.
    pub fn body(&self) -> &str {
        &self.result.body
    }

    /// Conversion statistics.
    pub fn stats(&self) -> &ConversionStats {
        &self.result.stats
    }

    /// Write the complete document to `path`, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_document(path, &self.result.content)
    }

    /// Take the underlying conversion result.
    pub fn into_inner(self) -> ConvertResult {
        self.result
    }
}
