//! PDF page source using lopdf.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};

use crate::detect::pdf_version;
use crate::error::{Error, Result};
use crate::model::SourceMetadata;

use super::PageSource;

/// Page source backed by a parsed PDF document.
pub struct PdfPageSource {
    doc: LopdfDocument,
    pages: BTreeMap<u32, ObjectId>,
}

impl PdfPageSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        pdf_version(data)?;

        let doc = LopdfDocument::load_mem(data)?;
        if doc.is_encrypted() {
            log::warn!("Document is encrypted; extracted text may be empty or garbled");
        }

        let pages = doc.get_pages();
        log::debug!("Loaded PDF {} with {} pages", doc.version, pages.len());
        Ok(Self { doc, pages })
    }

    fn info_dictionary(&self) -> Option<&Dictionary> {
        let info_ref = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        self.doc.get_dictionary(info_ref).ok()
    }
}

impl PageSource for PdfPageSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        if !self.pages.contains_key(&page) {
            return Err(Error::PageOutOfRange(page, self.page_count()));
        }

        self.doc
            .extract_text(&[page])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page, e)))
    }

    fn metadata(&self) -> SourceMetadata {
        let mut metadata = SourceMetadata::new(format!("PDF {}", self.doc.version), self.page_count());
        metadata.encrypted = self.doc.is_encrypted();

        if let Some(info) = self.info_dictionary() {
            metadata.title = string_entry(info, b"Title");
            metadata.author = string_entry(info, b"Author");
            metadata.producer = string_entry(info, b"Producer");
            metadata.created = string_entry(info, b"CreationDate").and_then(|d| parse_pdf_date(&d));
            metadata.modified = string_entry(info, b"ModDate").and_then(|d| parse_pdf_date(&d));
        }

        metadata
    }
}

/// Read a text string entry from a PDF dictionary.
fn string_entry(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
fn parse_pdf_date(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let field = |range: std::ops::Range<usize>, default: u32| {
        s.get(range).and_then(|v| v.parse().ok()).unwrap_or(default)
    };

    chrono::NaiveDate::from_ymd_opt(year, field(4..6, 1), field(6..8, 1))
        .and_then(|date| date.and_hms_opt(field(8..10, 0), field(10..12, 0), field(12..14, 0)))
        .map(|dt| chrono::DateTime::from_naive_utc_and_offset(dt, chrono::Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};

    /// Build a PDF whose pages show the given lines; `None` is a page without content.
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = LopdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in pages {
            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            };
            if let Some(text) = text {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![72.into(), 700.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*text)]),
                        Operation::new("ET", vec![]),
                    ],
                };
                let content_id =
                    doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
                page.set("Contents", content_id);
            }
            kids.push(doc.add_object(page).into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_pdf_page_text() {
        let bytes = build_pdf(&[Some("Art. 1. Kodeks"), Some("Art. 2. Przepisy")]);
        let source = PdfPageSource::from_bytes(&bytes).unwrap();

        assert_eq!(source.page_count(), 2);
        assert!(source.page_text(1).unwrap().contains("Art. 1."));
        assert!(source.page_text(2).unwrap().contains("Przepisy"));
        assert!(matches!(
            source.page_text(3),
            Err(Error::PageOutOfRange(3, 2))
        ));
    }

    #[test]
    fn test_pdf_metadata() {
        let bytes = build_pdf(&[Some("Art. 1.")]);
        let source = PdfPageSource::from_bytes(&bytes).unwrap();
        let metadata = source.metadata();

        assert_eq!(metadata.format, "PDF 1.5");
        assert_eq!(metadata.page_count, 1);
        assert!(metadata.title.is_none());
    }

    #[test]
    fn test_from_bytes_rejects_non_pdf() {
        assert!(PdfPageSource::from_bytes(b"not a pdf at all").is_err());
        assert!(PdfPageSource::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_decode_pdf_string() {
        assert_eq!(decode_pdf_string(b"Kodeks"), "Kodeks");
        assert_eq!(decode_pdf_string(&[0xFE, 0xFF, 0x00, 0x41, 0x01, 0x42]), "Ał");
        assert_eq!(decode_pdf_string(&[0x4B, 0xF3]), "Kó");
    }

    #[test]
    fn test_parse_pdf_date() {
        let date = parse_pdf_date("D:19640423103045+01'00'").unwrap();
        assert_eq!(date.year(), 1964);
        assert_eq!(date.month(), 4);
        assert_eq!(date.day(), 23);
        assert_eq!(date.hour(), 10);

        let minimal = parse_pdf_date("D:2024").unwrap();
        assert_eq!((minimal.month(), minimal.day()), (1, 1));

        assert!(parse_pdf_date("D:20").is_none());
    }
}
