//! Source document metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of the source document, as reported by the page source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Human-readable format description (e.g., "PDF 1.7")
    pub format: String,

    /// Total number of pages
    pub page_count: u32,

    /// Whether the document is encrypted
    pub encrypted: bool,

    /// Document title from the info dictionary
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl SourceMetadata {
    /// Create metadata for a source of the given format and size.
    pub fn new(format: impl Into<String>, page_count: u32) -> Self {
        Self {
            format: format.into(),
            page_count,
            ..Default::default()
        }
    }
}
