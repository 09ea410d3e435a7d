//! Paged plain-text source.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::SourceMetadata;

use super::PageSource;

/// Page separator in paged text dumps.
pub const PAGE_BREAK: char = '\u{000C}';

/// Page source over already extracted text.
///
/// Files are read as UTF-8 and split into pages on form feeds, which is
/// what most text extractors emit between pages.
#[derive(Debug, Clone, Default)]
pub struct TextPageSource {
    pages: Vec<String>,
}

impl TextPageSource {
    /// Create a source from page texts in order.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a source by splitting text on form feeds.
    pub fn from_text(text: &str) -> Self {
        Self::from_pages(text.split(PAGE_BREAK))
    }

    /// Read a paged text file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }
}

impl PageSource for TextPageSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .cloned()
            .ok_or(Error::PageOutOfRange(page, self.page_count()))
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata::new("paged text", self.page_count())
    }
}
