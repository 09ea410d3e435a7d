//! Removal of extraction artifacts: page footers, bare dates and source stamps.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::Result;

/// Source stamp printed in the footer of every ISAP page.
pub const DEFAULT_STAMP: &str = "©Kancelaria Sejmu";

/// How a noise rule decides that a line is an artifact.
#[derive(Debug, Clone)]
pub enum NoiseMatcher {
    /// The line contains this literal fragment anywhere.
    Contains(String),
    /// The pattern matches somewhere in the line.
    Search(Regex),
    /// The pattern matches the whole line and nothing else (stored anchored).
    FullLine(Regex),
}

impl NoiseMatcher {
    fn is_match(&self, line: &str) -> bool {
        match self {
            NoiseMatcher::Contains(fragment) => line.contains(fragment.as_str()),
            NoiseMatcher::Search(re) | NoiseMatcher::FullLine(re) => re.is_match(line),
        }
    }
}

/// A named rule recognizing one kind of noise line.
#[derive(Debug, Clone)]
pub struct NoiseRule {
    /// Rule name, used in reports and logs
    pub name: String,

    /// Line matcher
    pub matcher: NoiseMatcher,
}

impl NoiseRule {
    /// Drop lines containing a literal fragment.
    pub fn contains(name: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matcher: NoiseMatcher::Contains(fragment.into()),
        }
    }

    /// Drop lines in which `pattern` matches anywhere.
    pub fn search(name: impl Into<String>, pattern: &str) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            matcher: NoiseMatcher::Search(Regex::new(pattern)?),
        })
    }

    /// Drop lines that `pattern` matches in full.
    pub fn full_line(name: impl Into<String>, pattern: &str) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            matcher: NoiseMatcher::FullLine(Regex::new(&format!("^(?:{})$", pattern))?),
        })
    }

    /// Check whether a line is noise under this rule.
    pub fn is_match(&self, line: &str) -> bool {
        self.matcher.is_match(line)
    }
}

/// Result of filtering a text.
#[derive(Debug, Clone, Default)]
pub struct FilterReport {
    /// Text with noise lines removed
    pub text: String,

    /// Number of removed lines per rule name
    pub removed: BTreeMap<String, usize>,
}

impl FilterReport {
    /// Total number of removed lines.
    pub fn removed_total(&self) -> usize {
        self.removed.values().sum()
    }
}

/// Line filter dropping extraction artifacts.
///
/// Surviving lines keep their order and content; only a trailing `\r` is
/// removed from each line.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    rules: Vec<NoiseRule>,
}

impl NoiseFilter {
    /// Create a filter with the default ISAP footer rules.
    pub fn new() -> Self {
        Self::with_stamp(DEFAULT_STAMP)
    }

    /// Create a filter with the default rules and a custom source stamp.
    pub fn with_stamp(stamp: impl Into<String>) -> Self {
        let page_of_total = NoiseRule::search("page-of-total", r"s\. \d+/\d+")
            .expect("page-of-total pattern is a valid regex");
        let bare_date = NoiseRule::full_line("bare-date", r"\d{4}-\d{2}-\d{2}")
            .expect("bare-date pattern is a valid regex");

        Self {
            rules: vec![NoiseRule::contains("stamp", stamp), page_of_total, bare_date],
        }
    }

    /// Create a filter without any rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule.
    pub fn with_rule(mut self, rule: NoiseRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[NoiseRule] {
        &self.rules
    }

    /// Name of the first rule matching `line`, if any.
    pub fn classify(&self, line: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.is_match(line))
            .map(|rule| rule.name.as_str())
    }

    /// Remove noise lines from `text`.
    pub fn apply(&self, text: &str) -> String {
        self.apply_with_report(text).text
    }

    /// Remove noise lines from `text` and report what was removed.
    pub fn apply_with_report(&self, text: &str) -> FilterReport {
        let mut report = FilterReport::default();
        let mut kept = Vec::new();

        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            match self.classify(line) {
                Some(rule) => *report.removed.entry(rule.to_string()).or_insert(0) += 1,
                None => kept.push(line),
            }
        }

        report.text = kept.join("\n");
        log::debug!("Noise filter removed {} lines", report.removed_total());
        report
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new()
    }
}
