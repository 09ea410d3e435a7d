//! End-to-end conversion: source pages → noise filter → promoter → front matter.
//!
//! # Example
//!
//! ```no_run
//! use lawmd::convert::{convert_file, ConvertOptions};
//!
//! fn main() -> lawmd::Result<()> {
//!     let result = convert_file("kodeks.pdf", &ConvertOptions::default(), |_| {})?;
//!     lawmd::emit::write_document("public/laws/kodeks_cywilny.md", &result.content)?;
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::emit::FrontMatter;
use crate::error::{Error, Result};
use crate::model::{ExtractedText, StructuralLevel};
use crate::source::{extract_pages, open_source, ExtractOptions, PageSelection, Progress};
use crate::transform::{NoiseFilter, RuleTable, StructuralPromoter};

/// Options for a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Page extraction options
    pub extract: ExtractOptions,

    /// Noise filter applied to the concatenated page text
    pub noise: NoiseFilter,

    /// Structural rule table
    pub rules: RuleTable,

    /// Front matter written before the body
    pub front_matter: FrontMatter,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, extract: ExtractOptions) -> Self {
        self.extract = extract;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.extract = self.extract.with_pages(pages);
        self
    }

    /// Set the noise filter.
    pub fn with_noise_filter(mut self, noise: NoiseFilter) -> Self {
        self.noise = noise;
        self
    }

    /// Use the default noise rules with a different source stamp.
    pub fn with_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.noise = NoiseFilter::with_stamp(stamp);
        self
    }

    /// Set the structural rule table.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Set the front matter.
    pub fn with_front_matter(mut self, front_matter: FrontMatter) -> Self {
        self.front_matter = front_matter;
        self
    }
}

/// Statistics collected during a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Pages in the source document
    pub pages_total: u32,

    /// Pages visited after page selection
    pub pages_extracted: u32,

    /// Visited pages that yielded no text
    pub pages_empty: u32,

    /// Removed noise lines per rule
    pub noise_removed: BTreeMap<String, usize>,

    /// Promoted markers per structural level
    pub markers: BTreeMap<StructuralLevel, usize>,
}

impl ConversionStats {
    /// Total number of promoted markers.
    pub fn marker_total(&self) -> usize {
        self.markers.values().sum()
    }

    /// Marker counts for every structural level, coarsest first.
    ///
    /// Levels without any promoted marker are listed with a zero count.
    pub fn marker_counts(&self) -> Vec<(StructuralLevel, usize)> {
        StructuralLevel::MARKERS
            .iter()
            .map(|level| (*level, self.markers.get(level).copied().unwrap_or(0)))
            .collect()
    }
}

/// Result of a conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Complete document: front matter followed by the body
    pub content: String,

    /// Markdown body without front matter
    pub body: String,

    /// Conversion statistics
    pub stats: ConversionStats,
}

/// Convert already extracted text.
pub fn convert_text(text: &str, options: &ConvertOptions) -> ConvertResult {
    let filtered = options.noise.apply_with_report(text);
    let promotion = StructuralPromoter::new(options.rules.clone()).promote_with_counts(&filtered.text);

    if promotion.markers.is_empty() {
        log::info!("No structural markers recognized; emitting cleaned text only");
    }

    let stats = ConversionStats {
        noise_removed: filtered.removed,
        markers: promotion.markers,
        ..Default::default()
    };

    ConvertResult {
        content: options.front_matter.render(&promotion.text),
        body: promotion.text,
        stats,
    }
}

/// Convert an extraction result.
pub fn convert_pages(extracted: &ExtractedText, options: &ConvertOptions) -> ConvertResult {
    let mut result = convert_text(&extracted.to_text(), options);
    result.stats.pages_total = extracted.total_pages;
    result.stats.pages_extracted = extracted.pages.len() as u32;
    result.stats.pages_empty = extracted.empty_pages();
    result
}

/// Convert a source document file.
///
/// Fails with [`Error::MissingInput`] when `path` does not exist. The whole
/// document is extracted before any transformation starts.
pub fn convert_file<P, F>(path: P, options: &ConvertOptions, on_progress: F) -> Result<ConvertResult>
where
    P: AsRef<Path>,
    F: FnMut(Progress),
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }

    log::info!("Converting {}", path.display());
    let source = open_source(path)?;
    let extracted = extract_pages(&source, &options.extract, on_progress);
    Ok(convert_pages(&extracted, options))
}
