//! Structural recognition rules.
//!
//! A [`RuleTable`] is an ordered, immutable list of `{level, pattern, style}`
//! records. Every pattern is anchored at the start of a line, and the first
//! rule that matches classifies the line. Supporting another subdivision is
//! a matter of adding a record.

use regex::Regex;

use crate::error::Result;
use crate::model::{MarkerStyle, StructuralLevel};

/// One structural recognition rule.
#[derive(Debug, Clone)]
pub struct StructuralRule {
    level: StructuralLevel,
    pattern: Regex,
    style: MarkerStyle,
}

impl StructuralRule {
    /// Create a rule. `pattern` is matched at the start of a line only.
    pub fn new(level: StructuralLevel, pattern: &str, style: MarkerStyle) -> Result<Self> {
        Ok(Self {
            level,
            pattern: Regex::new(&format!("^(?:{})", pattern))?,
            style,
        })
    }

    /// Structural level assigned by this rule.
    pub fn level(&self) -> StructuralLevel {
        self.level
    }

    /// Markdown style of the marker.
    pub fn style(&self) -> MarkerStyle {
        self.style
    }

    /// Split `line` into the matched marker and the rest of the line.
    pub fn split<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        self.pattern
            .find(line)
            .filter(|m| m.end() > 0)
            .map(|m| line.split_at(m.end()))
    }
}

/// A line together with its structural classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// Structural level
    pub level: StructuralLevel,

    /// Matched marker text (empty for plain lines)
    pub marker: &'a str,

    /// Rest of the line after the marker (the whole line for plain lines)
    pub remainder: &'a str,

    /// Markdown style of the marker (`None` for plain lines)
    pub style: Option<MarkerStyle>,
}

impl<'a> ClassifiedLine<'a> {
    /// A line that carries no marker.
    pub fn plain(line: &'a str) -> Self {
        Self {
            level: StructuralLevel::Plain,
            marker: "",
            remainder: line,
            style: None,
        }
    }
}

/// Ordered, immutable structural rule table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<StructuralRule>,
}

impl RuleTable {
    /// Create a table from rules in evaluation order.
    pub fn new(rules: Vec<StructuralRule>) -> Self {
        Self { rules }
    }

    /// Rules for the Polish civil code, coarsest level first.
    pub fn polish_civil_code() -> Self {
        const TABLE: [(StructuralLevel, &str, MarkerStyle); 6] = [
            (StructuralLevel::Book, r"KSIĘGA [A-ZĄĆĘŁŃÓŚŹŻ]+", MarkerStyle::Heading(1)),
            (StructuralLevel::Title, r"TYTUŁ [A-Z]+", MarkerStyle::Heading(2)),
            (StructuralLevel::Division, r"DZIAŁ [A-Z]+", MarkerStyle::Heading(3)),
            (StructuralLevel::Chapter, r"Rozdział [A-Z]+", MarkerStyle::Heading(4)),
            (StructuralLevel::Article, r"Art\.\s\d+[a-z]*\.", MarkerStyle::Emphasis),
            (StructuralLevel::Paragraph, r"§\s\d+\.", MarkerStyle::Bullet),
        ];

        let rules = TABLE
            .iter()
            .map(|(level, pattern, style)| {
                StructuralRule::new(*level, pattern, *style)
                    .expect("built-in structural patterns are valid regexes")
            })
            .collect();
        Self::new(rules)
    }

    /// Append a rule; it is tried after all existing rules.
    pub fn with_rule(mut self, rule: StructuralRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[StructuralRule] {
        &self.rules
    }

    /// The first rule for a level, if any.
    pub fn rule(&self, level: StructuralLevel) -> Option<&StructuralRule> {
        self.rules.iter().find(|r| r.level() == level)
    }

    /// Classify a single line (without its line terminator).
    pub fn classify<'a>(&self, line: &'a str) -> ClassifiedLine<'a> {
        self.rules
            .iter()
            .find_map(|rule| {
                rule.split(line).map(|(marker, remainder)| ClassifiedLine {
                    level: rule.level(),
                    marker,
                    remainder,
                    style: Some(rule.style()),
                })
            })
            .unwrap_or_else(|| ClassifiedLine::plain(line))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::polish_civil_code()
    }
}
