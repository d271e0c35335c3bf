//! Validation thresholds, accepted as plain data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use loadplan_model::fields;

/// Thresholds and lists driving the rule families. Everything here is
/// data so a deployment can tighten or relax rules without code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Canonical fields that must be present on every row.
    pub required_fields: Vec<String>,
    /// How far a stage count may exceed the order quantity before a
    /// warning fires.
    pub balance_tolerance: i64,
    /// CRD window: how many days in the past are still plausible.
    pub crd_window_past_days: i64,
    /// CRD window: how many days ahead are still plausible.
    pub crd_window_future_days: i64,
    /// Factory codes considered in-network.
    pub known_factories: Vec<String>,
    /// Injected "now" so validation is deterministic; today when unset.
    pub reference_date: Option<NaiveDate>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            required_fields: vec![
                fields::PO_NUMBER.to_string(),
                fields::QUANTITY.to_string(),
            ],
            balance_tolerance: 0,
            crd_window_past_days: 365,
            crd_window_future_days: 730,
            known_factories: ["A", "B", "C", "D"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            reference_date: None,
        }
    }
}

impl ValidationConfig {
    /// The effective reference date for window checks.
    #[must_use]
    pub fn reference(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}
