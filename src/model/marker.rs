//! Structural levels of a civil code and their Markdown forms.

use serde::{Deserialize, Serialize};

/// Structural classification of a line, from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructuralLevel {
    /// Book (KSIĘGA)
    Book,
    /// Title (TYTUŁ)
    Title,
    /// Division (DZIAŁ)
    Division,
    /// Chapter (Rozdział)
    Chapter,
    /// Article (Art.)
    Article,
    /// Paragraph within an article (§)
    Paragraph,
    /// Ordinary text
    Plain,
}

impl StructuralLevel {
    /// All structural levels that carry a marker, coarsest first.
    pub const MARKERS: [StructuralLevel; 6] = [
        StructuralLevel::Book,
        StructuralLevel::Title,
        StructuralLevel::Division,
        StructuralLevel::Chapter,
        StructuralLevel::Article,
        StructuralLevel::Paragraph,
    ];

    /// Lowercase name used in logs and statistics.
    pub fn name(&self) -> &'static str {
        match self {
            StructuralLevel::Book => "book",
            StructuralLevel::Title => "title",
            StructuralLevel::Division => "division",
            StructuralLevel::Chapter => "chapter",
            StructuralLevel::Article => "article",
            StructuralLevel::Paragraph => "paragraph",
            StructuralLevel::Plain => "plain",
        }
    }
}

impl std::fmt::Display for StructuralLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Markdown representation of a recognized marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// ATX heading of the given depth (1-6); the marker gets its own line
    Heading(u8),
    /// Bold marker opening its own paragraph (`**Art. 1.** ...`)
    Emphasis,
    /// Bulleted item (`* § 1. ...`)
    Bullet,
}

impl MarkerStyle {
    /// Create a heading style, clamping the depth to 1-6.
    pub fn heading(depth: u8) -> Self {
        MarkerStyle::Heading(depth.clamp(1, 6))
    }

    /// Render the marker text in this style.
    ///
    /// Heading depths outside 1-6 render at the nearest valid depth.
    pub fn render(&self, marker: &str) -> String {
        match self {
            MarkerStyle::Heading(depth) => {
                format!("{} {}", "#".repeat(usize::from((*depth).clamp(1, 6))), marker)
            }
            MarkerStyle::Emphasis => format!("**{}**", marker),
            MarkerStyle::Bullet => format!("* {}", marker),
        }
    }

    /// Whether the rest of the source line stays on the marker's line.
    pub fn is_inline(&self) -> bool {
        !matches!(self, MarkerStyle::Heading(_))
    }
}
