//! The eight-stage production sequence and its per-order balances.

use std::collections::BTreeMap;

/// One of the eight sequential production stages.
///
/// Declaration order is pipeline order: material is cut, pre-sewn, fed into
/// sewing, sewn, stock-fitted, assembled, and finally moved through the
/// warehouse. [`Stage::PIPELINE`] exposes the same order as a slice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    SCut,
    PreSew,
    SewInput,
    SewBal,
    SFit,
    AssBal,
    WhIn,
    WhOut,
}

impl Stage {
    /// All stages in fixed pipeline order.
    pub const PIPELINE: [Stage; 8] = [
        Stage::SCut,
        Stage::PreSew,
        Stage::SewInput,
        Stage::SewBal,
        Stage::SFit,
        Stage::AssBal,
        Stage::WhIn,
        Stage::WhOut,
    ];

    /// Canonical stage key, as it appears in findings and exports.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Stage::SCut => "S_CUT",
            Stage::PreSew => "PRE_SEW",
            Stage::SewInput => "SEW_INPUT",
            Stage::SewBal => "SEW_BAL",
            Stage::SFit => "S_FIT",
            Stage::AssBal => "ASS_BAL",
            Stage::WhIn => "WH_IN",
            Stage::WhOut => "WH_OUT",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Stage -> source column binding, discovered once per file and reused
/// immutably for every row in that file.
///
/// Stages with no matching column are simply absent; their balance defaults
/// to zero during transformation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColumnMap {
    bindings: BTreeMap<Stage, String>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a stage to a column. Returns false when the stage is already
    /// bound; the existing binding is kept.
    pub fn bind(&mut self, stage: Stage, column: impl Into<String>) -> bool {
        if self.bindings.contains_key(&stage) {
            return false;
        }
        self.bindings.insert(stage, column.into());
        true
    }

    pub fn column(&self, stage: Stage) -> Option<&str> {
        self.bindings.get(&stage).map(String::as_str)
    }

    pub fn is_bound(&self, stage: Stage) -> bool {
        self.bindings.contains_key(&stage)
    }

    /// True when the column label is already bound to some stage.
    pub fn is_column_bound(&self, column: &str) -> bool {
        self.bindings.values().any(|bound| bound == column)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Stages with no bound column, in pipeline order.
    pub fn unresolved(&self) -> Vec<Stage> {
        Stage::PIPELINE
            .into_iter()
            .filter(|stage| !self.is_bound(*stage))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stage, &str)> {
        self.bindings
            .iter()
            .map(|(stage, column)| (*stage, column.as_str()))
    }
}

/// Per-order stage counts: the quantity that has cleared each stage,
/// clamped to `[0, quantity]` by the transformer.
///
/// Under this representation the pipeline sequence is monotonically
/// non-increasing for clean data: a later stage can never have cleared more
/// than an earlier one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub struct StageBalances {
    pub s_cut: i64,
    pub pre_sew: i64,
    pub sew_input: i64,
    pub sew_bal: i64,
    pub s_fit: i64,
    pub ass_bal: i64,
    pub wh_in: i64,
    pub wh_out: i64,
}

impl StageBalances {
    pub fn get(&self, stage: Stage) -> i64 {
        match stage {
            Stage::SCut => self.s_cut,
            Stage::PreSew => self.pre_sew,
            Stage::SewInput => self.sew_input,
            Stage::SewBal => self.sew_bal,
            Stage::SFit => self.s_fit,
            Stage::AssBal => self.ass_bal,
            Stage::WhIn => self.wh_in,
            Stage::WhOut => self.wh_out,
        }
    }

    pub fn set(&mut self, stage: Stage, value: i64) {
        match stage {
            Stage::SCut => self.s_cut = value,
            Stage::PreSew => self.pre_sew = value,
            Stage::SewInput => self.sew_input = value,
            Stage::SewBal => self.sew_bal = value,
            Stage::SFit => self.s_fit = value,
            Stage::AssBal => self.ass_bal = value,
            Stage::WhIn => self.wh_in = value,
            Stage::WhOut => self.wh_out = value,
        }
    }

    /// Builds balances by evaluating `f` for each stage in pipeline order.
    pub fn from_fn(mut f: impl FnMut(Stage) -> i64) -> Self {
        let mut balances = Self::default();
        for stage in Stage::PIPELINE {
            balances.set(stage, f(stage));
        }
        balances
    }

    /// (stage, value) pairs in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, i64)> + '_ {
        Stage::PIPELINE.into_iter().map(|stage| (stage, self.get(stage)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_order_matches_enum_order() {
        let mut sorted = Stage::PIPELINE;
        sorted.sort();
        assert_eq!(sorted, Stage::PIPELINE);
    }

    #[test]
    fn stage_serializes_to_canonical_key() {
        let json = serde_json::to_string(&Stage::SCut).unwrap();
        assert_eq!(json, "\"S_CUT\"");
        let json = serde_json::to_string(&Stage::WhOut).unwrap();
        assert_eq!(json, "\"WH_OUT\"");
    }

    #[test]
    fn column_map_keeps_first_binding() {
        let mut map = ColumnMap::new();
        assert!(map.bind(Stage::SCut, "AN"));
        assert!(!map.bind(Stage::SCut, "AO"));
        assert_eq!(map.column(Stage::SCut), Some("AN"));
        assert!(map.is_column_bound("AN"));
        assert_eq!(map.unresolved().len(), 7);
    }

    #[test]
    fn balances_round_trip_by_stage() {
        let balances = StageBalances::from_fn(|stage| match stage {
            Stage::SCut => 100,
            Stage::WhOut => 40,
            _ => 70,
        });
        assert_eq!(balances.get(Stage::SCut), 100);
        assert_eq!(balances.get(Stage::WhOut), 40);
        assert_eq!(balances.iter().count(), 8);
    }
}
