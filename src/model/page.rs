//! Page-level types.

use serde::{Deserialize, Serialize};

/// Extracted text of one page.
///
/// The text is empty when the page had nothing extractable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Extracted text, possibly empty
    pub text: String,
}

impl RawPage {
    /// Create a page with text.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Create a page that yielded no text.
    pub fn empty(number: u32) -> Self {
        Self::new(number, String::new())
    }

    /// Check whether the page contributes any text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// All pages extracted from one source document, in page order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Extracted pages in reading order
    pub pages: Vec<RawPage>,

    /// Number of pages in the source document (before page selection)
    pub total_pages: u32,
}

impl ExtractedText {
    /// Create an empty extraction result for a document with `total_pages` pages.
    pub fn new(total_pages: u32) -> Self {
        Self {
            pages: Vec::new(),
            total_pages,
        }
    }

    /// Append a page.
    pub fn push(&mut self, page: RawPage) {
        self.pages.push(page);
    }

    /// Number of pages that yielded no text.
    pub fn empty_pages(&self) -> u32 {
        self.pages.iter().filter(|p| p.is_empty()).count() as u32
    }

    /// Concatenate the pages into a single text.
    ///
    /// Every page with text contributes its text followed by one newline;
    /// empty pages contribute nothing.
    pub fn to_text(&self) -> String {
        let capacity = self.pages.iter().map(|p| p.text.len() + 1).sum();
        let mut text = String::with_capacity(capacity);
        for page in self.pages.iter().filter(|p| !p.is_empty()) {
            text.push_str(&page.text);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_skips_empty_pages() {
        let mut extracted = ExtractedText::new(3);
        extracted.push(RawPage::new(1, "Art. 1."));
        extracted.push(RawPage::empty(2));
        extracted.push(RawPage::new(3, "Art. 2."));

        assert_eq!(extracted.to_text(), "Art. 1.\nArt. 2.\n");
        assert_eq!(extracted.empty_pages(), 1);
    }

    #[test]
    fn test_whitespace_page_is_empty() {
        assert!(RawPage::new(1, " \n\t").is_empty());
        assert!(!RawPage::new(1, "§ 1.").is_empty());
    }
}
