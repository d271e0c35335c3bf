//! Rollup derivation.
//!
//! Everything here is re-derivable from the current `Order` slice alone,
//! with no accumulator state, so re-aggregation after a filter change never
//! requires re-parsing.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use loadplan_model::Order;

/// Thresholds for the delay/warning predicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// How many days before the CRD an incomplete order starts to warn.
    pub warning_window_days: i64,
    /// Completion ratio below which an order inside the window warns.
    pub completion_warning_threshold: f64,
    /// Injected "now"; today when unset.
    pub reference_date: Option<NaiveDate>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            warning_window_days: 7,
            completion_warning_threshold: 0.8,
            reference_date: None,
        }
    }
}

impl StatsConfig {
    #[must_use]
    pub fn reference(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

/// Dataset-wide totals and rates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub orders: usize,
    pub quantity: i64,
    pub completed_quantity: i64,
    pub completion_rate: f64,
    pub completed_orders: usize,
    pub delayed_orders: usize,
    pub delay_rate: f64,
    pub warning_orders: usize,
    pub warning_rate: f64,
}

/// Per-group slice of the same numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub orders: usize,
    pub quantity: i64,
    pub completed_quantity: i64,
    pub completion_rate: f64,
    pub delayed_orders: usize,
}

/// The aggregator's output: totals plus groupings by month bucket,
/// destination, factory and model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rollups {
    pub totals: Totals,
    pub by_month: BTreeMap<String, GroupStats>,
    pub by_destination: BTreeMap<String, GroupStats>,
    pub by_factory: BTreeMap<String, GroupStats>,
    pub by_model: BTreeMap<String, GroupStats>,
}

/// Delayed: the CRD has passed and the order is not complete.
pub fn is_delayed(order: &Order, reference: NaiveDate) -> bool {
    !order.is_complete() && order.crd.is_some_and(|crd| crd < reference)
}

/// Warning: the CRD is within the window ahead and completion sits below
/// the threshold.
pub fn is_warning(order: &Order, reference: NaiveDate, config: &StatsConfig) -> bool {
    if order.is_complete() {
        return false;
    }
    let Some(crd) = order.crd else {
        return false;
    };
    let days_left = crd.signed_duration_since(reference).num_days();
    (0..=config.warning_window_days).contains(&days_left)
        && order.completion_ratio() < config.completion_warning_threshold
}

/// Derives all rollups from the order slice.
pub fn aggregate(orders: &[Order], config: &StatsConfig) -> Rollups {
    let reference = config.reference();

    let mut totals = Totals {
        orders: orders.len(),
        ..Totals::default()
    };
    let mut by_month: BTreeMap<String, GroupStats> = BTreeMap::new();
    let mut by_destination: BTreeMap<String, GroupStats> = BTreeMap::new();
    let mut by_factory: BTreeMap<String, GroupStats> = BTreeMap::new();
    let mut by_model: BTreeMap<String, GroupStats> = BTreeMap::new();

    for order in orders {
        let delayed = is_delayed(order, reference);

        totals.quantity += order.quantity_or_zero();
        totals.completed_quantity += order.completed_quantity();
        if order.is_complete() {
            totals.completed_orders += 1;
        }
        if delayed {
            totals.delayed_orders += 1;
        }
        if is_warning(order, reference, config) {
            totals.warning_orders += 1;
        }

        for (map, key) in [
            (&mut by_month, group_key(order.year_month.as_deref())),
            (&mut by_destination, group_key(Some(order.destination.as_str()))),
            (&mut by_factory, group_key(Some(order.factory.as_str()))),
            (&mut by_model, group_key(Some(order.model.as_str()))),
        ] {
            let group = map.entry(key).or_default();
            group.orders += 1;
            group.quantity += order.quantity_or_zero();
            group.completed_quantity += order.completed_quantity();
            if delayed {
                group.delayed_orders += 1;
            }
        }
    }

    totals.completion_rate = ratio(totals.completed_quantity, totals.quantity);
    totals.delay_rate = count_ratio(totals.delayed_orders, totals.orders);
    totals.warning_rate = count_ratio(totals.warning_orders, totals.orders);

    for map in [&mut by_month, &mut by_destination, &mut by_factory, &mut by_model] {
        for group in map.values_mut() {
            group.completion_rate = ratio(group.completed_quantity, group.quantity);
        }
    }

    Rollups {
        totals,
        by_month,
        by_destination,
        by_factory,
        by_model,
    }
}

/// Empty grouping values land in an explicit "Unknown" bucket rather than
/// being dropped.
fn group_key(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => "Unknown".to_string(),
    }
}

fn ratio(part: i64, whole: i64) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64
    } else {
        0.0
    }
}

fn count_ratio(part: usize, whole: usize) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64
    } else {
        0.0
    }
}
