//! Resolver configuration and the resolved schema value.
//!
//! Everything here is plain data: the header vocabulary and the stage
//! predicate table can be loaded from configuration without touching the
//! engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use loadplan_model::{ColumnMap, Stage};

/// A content predicate binding one production stage to a column.
///
/// A candidate cell matches when its normalized text contains every
/// substring in `all` and none of the substrings in `none`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagePattern {
    pub stage: Stage,
    pub all: Vec<String>,
    pub none: Vec<String>,
}

impl StagePattern {
    pub fn new(stage: Stage, all: &[&str], none: &[&str]) -> Self {
        Self {
            stage,
            all: all.iter().map(|s| (*s).to_string()).collect(),
            none: none.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Tests already-normalized text against this pattern.
    pub fn matches(&self, normalized: &str) -> bool {
        self.all.iter().all(|needle| normalized.contains(needle.as_str()))
            && self.none.iter().all(|needle| !normalized.contains(needle.as_str()))
    }
}

/// Configuration for header search and stage discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Known header vocabulary; a row with enough matching cells is the
    /// header.
    pub vocabulary: Vec<String>,
    /// How many leading rows to scan for the header.
    pub scan_rows: usize,
    /// Minimum vocabulary hits for a row to qualify as the header.
    pub min_matches: usize,
    /// Jaro-Winkler similarity threshold for near-miss vocabulary tokens.
    pub similarity_threshold: f64,
    /// Priority-ordered stage predicates; earlier entries win collisions.
    pub patterns: Vec<StagePattern>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            vocabulary: [
                "po", "order", "style", "model", "article", "qty", "quantity", "crd", "sdd",
                "factory", "unit", "destination", "dest", "color", "vendor", "season",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
            scan_rows: 20,
            min_matches: 3,
            similarity_threshold: 0.92,
            patterns: default_stage_patterns(),
        }
    }
}

/// The declared collision order for ambiguous sub-header wording.
///
/// `SEW_INPUT` must precede `SEW_BAL` (both contain "sew"+"bal"), and
/// `WH_OUT` precedes `WH_IN`. The order is data, not code, so a per-source
/// override stays possible without touching the engine.
pub fn default_stage_patterns() -> Vec<StagePattern> {
    vec![
        StagePattern::new(Stage::SewInput, &["sew", "input", "bal"], &[]),
        StagePattern::new(Stage::PreSew, &["pre", "sew"], &[]),
        StagePattern::new(Stage::SewBal, &["sew", "bal"], &["input", "pre"]),
        StagePattern::new(Stage::SCut, &["cut", "bal"], &[]),
        StagePattern::new(Stage::SFit, &["fit", "bal"], &[]),
        StagePattern::new(Stage::AssBal, &["ass", "bal"], &["stk"]),
        StagePattern::new(Stage::WhOut, &["wh", "out", "bal"], &[]),
        StagePattern::new(Stage::WhIn, &["wh", "in", "bal"], &["out", "ret"]),
    ]
}

/// The resolved schema for one source file, built once and reused
/// immutably for every row of that file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaResolution {
    /// 0-based index of the true header row within the source rows.
    pub header_row: usize,
    /// Column key -> effective header label (header text, or the sub-header
    /// text when the header cell is blank).
    pub labels: BTreeMap<String, String>,
    /// Stage -> column bindings discovered from the sub-header.
    pub columns: ColumnMap,
    /// Stages with no matching column, in pipeline order.
    pub unresolved: Vec<Stage>,
}

impl SchemaResolution {
    /// First data row index: everything after the header is handed to the
    /// transformer (the sub-header echo is dropped later by the filter).
    #[must_use]
    pub fn first_data_row(&self) -> usize {
        self.header_row + 1
    }
}
