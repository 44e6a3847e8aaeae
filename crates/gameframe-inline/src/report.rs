use gameframe_core::model::AssetKind;
use serde::{Deserialize, Serialize};

/// How often one pattern matched the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternHit {
    pub asset: AssetKind,
    pub match_form: String,
    pub matches: usize,
}

/// Deterministic, machine-readable summary of one inlining run.
///
/// Notes:
/// - Contains *no* wall-clock timestamps (to preserve determinism).
/// - `patterns` keeps the order of the pattern table, including forms that
///   matched nothing, so a template's reference convention is visible at a
///   glance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineReport {
    pub patterns: Vec<PatternHit>,
    pub markup_bytes: usize,
    pub stylesheet_bytes: usize,
    pub script_bytes: usize,
    pub output_bytes: usize,
    /// xxh64 hex of the inlined document.
    pub fingerprint: String,
}

impl InlineReport {
    pub fn total_matches(&self) -> usize {
        self.patterns.iter().map(|p| p.matches).sum()
    }

    pub fn matches_for(&self, asset: AssetKind) -> usize {
        self.patterns
            .iter()
            .filter(|p| p.asset == asset)
            .map(|p| p.matches)
            .sum()
    }

    /// Match-forms that matched at least once, in table order.
    pub fn matched_forms(&self) -> Vec<&str> {
        self.patterns
            .iter()
            .filter(|p| p.matches > 0)
            .map(|p| p.match_form.as_str())
            .collect()
    }
}
