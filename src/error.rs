//! Error types for lawmd.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lawmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a statute document.
///
/// Only path, file-system and whole-document failures surface here.
/// A page that yields no text is not an error: it is logged and the
/// page contributes an empty string.
#[derive(Error, Debug)]
pub enum Error {
    /// The source document does not exist.
    #[error("Input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither a PDF nor a paged text file.
    #[error("Unknown file format: expected a PDF or a .txt file")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page range.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// A recognition pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
