//! Promotion of structural markers to Markdown.

use std::collections::BTreeMap;

use regex::Regex;

use crate::model::StructuralLevel;

use super::rules::RuleTable;

/// Output of a promotion run.
#[derive(Debug, Clone, Default)]
pub struct Promotion {
    /// Markdown text
    pub text: String,

    /// Number of promoted markers per level
    pub markers: BTreeMap<StructuralLevel, usize>,
}

/// Rewrites recognized structural markers into Markdown.
///
/// Each line is classified once against the rule table and rendered:
///
/// - every marker opens a new block, preceded by one blank line;
/// - a heading marker sits on its own line and the rest of the source line
///   continues below it, classified again;
/// - emphasis and bullet markers keep the rest of the line beside them.
///
/// Runs of three or more newlines are collapsed to one blank line at the
/// end. Output fed back in comes out unchanged, since the rendered forms
/// start with `#`, `**` or `* `, none of which begins a marker.
#[derive(Debug, Clone)]
pub struct StructuralPromoter {
    rules: RuleTable,
    blank_runs: Regex,
}

impl StructuralPromoter {
    /// Create a promoter over a rule table.
    pub fn new(rules: RuleTable) -> Self {
        Self {
            rules,
            blank_runs: Regex::new(r"\n{3,}").expect("blank-run pattern is a valid regex"),
        }
    }

    /// The rule table in use.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Promote markers in `text`.
    pub fn promote(&self, text: &str) -> String {
        self.promote_with_counts(text).text
    }

    /// Promote markers in `text`, counting them per level.
    pub fn promote_with_counts(&self, text: &str) -> Promotion {
        let mut markers = BTreeMap::new();
        let mut out = String::with_capacity(text.len() + text.len() / 8);

        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                out.push('\n');
            }
            self.render_line(line, index == 0, &mut out, &mut markers);
        }

        log::debug!(
            "Promoted {} structural markers",
            markers.values().sum::<usize>()
        );

        Promotion {
            text: self.collapse_blank_lines(&out),
            markers,
        }
    }

    /// Replace every run of 3+ newlines with exactly one blank line.
    pub fn collapse_blank_lines(&self, text: &str) -> String {
        self.blank_runs.replace_all(text, "\n\n").into_owned()
    }

    fn render_line(
        &self,
        line: &str,
        at_text_start: bool,
        out: &mut String,
        markers: &mut BTreeMap<StructuralLevel, usize>,
    ) {
        let mut line = line;
        let mut at_text_start = at_text_start;

        loop {
            let classified = self.rules.classify(line);
            let Some(style) = classified.style else {
                out.push_str(line);
                return;
            };

            *markers.entry(classified.level).or_insert(0) += 1;

            // The separator already written by the caller becomes a blank line.
            out.push_str(if at_text_start { "\n\n" } else { "\n" });
            out.push_str(&style.render(classified.marker));

            if style.is_inline() {
                out.push_str(classified.remainder);
                return;
            }

            out.push('\n');
            line = classified.remainder;
            at_text_start = false;
        }
    }
}

impl Default for StructuralPromoter {
    fn default() -> Self {
        Self::new(RuleTable::default())
    }
}
