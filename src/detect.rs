//! Input format detection.
//!
//! Statute sources normally arrive as PDF downloads, but a paged plain-text
//! dump (pages separated by form feeds) is accepted as well so that already
//! extracted text can be re-run through the pipeline.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Kind of source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// PDF document with the version from its header.
    Pdf { version: String },
    /// Plain UTF-8 text, pages separated by form feed (`\x0c`).
    Text,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Pdf { version } => write!(f, "PDF {}", version),
            SourceKind::Text => write!(f, "paged text"),
        }
    }
}

/// Detect the source kind of a file.
///
/// The header decides for PDFs; anything else must carry a `.txt` or
/// `.text` extension to be read as paged text.
pub fn detect_source_kind<P: AsRef<Path>>(path: P) -> Result<SourceKind> {
    let path = path.as_ref();
    let mut header = Vec::with_capacity(16);
    File::open(path)?.take(16).read_to_end(&mut header)?;

    if header.starts_with(PDF_MAGIC) {
        return pdf_version(&header).map(|version| SourceKind::Pdf { version });
    }

    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("txt") || e.eq_ignore_ascii_case("text"))
        .unwrap_or(false);

    if is_text {
        Ok(SourceKind::Text)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Read the PDF version from a header such as `%PDF-1.7`.
pub fn pdf_version(header: &[u8]) -> Result<String> {
    if !header.starts_with(PDF_MAGIC) || header.len() < PDF_MAGIC.len() + VERSION_LEN {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &header[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(version)
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pdf_version() {
        assert_eq!(pdf_version(b"%PDF-1.7\n%\xe2\xe3").unwrap(), "1.7");
        assert_eq!(pdf_version(b"%PDF-2.0\n").unwrap(), "2.0");
    }

    #[test]
    fn test_pdf_version_rejects_garbage() {
        assert!(matches!(pdf_version(b"%PDF"), Err(Error::UnknownFormat)));
        assert!(matches!(
            pdf_version(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            pdf_version(b"%PDF-x.y\n"),
            Err(Error::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_detect_text_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kodeks.txt");
        std::fs::write(&path, "Art. 1.\n").unwrap();
        assert_eq!(detect_source_kind(&path).unwrap(), SourceKind::Text);
    }

    #[test]
    fn test_detect_pdf_by_header() {
        let mut file = tempfile::Builder::new().suffix(".bin").tempfile().unwrap();
        file.write_all(b"%PDF-1.4\n%test").unwrap();
        let kind = detect_source_kind(file.path()).unwrap();
        assert_eq!(
            kind,
            SourceKind::Pdf {
                version: "1.4".to_string()
            }
        );
    }

    #[test]
    fn test_detect_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kodeks.docx");
        std::fs::write(&path, "PK\x03\x04").unwrap();
        assert!(matches!(
            detect_source_kind(&path),
            Err(Error::UnknownFormat)
        ));
    }
}
