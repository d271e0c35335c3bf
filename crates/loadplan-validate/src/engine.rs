//! The validation engine: a pure pass over the filtered order set.
//!
//! Same input, same output: no hidden state, no clock reads when a
//! reference date is configured. Findings annotate rows; they never remove
//! them.

use loadplan_model::{Order, Severity, SummaryStats, ValidationSummary};

use crate::checks;
use crate::config::ValidationConfig;

/// Runs all six rule families over every order and folds the results into
/// a [`ValidationSummary`].
///
/// Rule families execute in a fixed order per row, and rows in slice
/// order, so repeated runs produce identical summaries.
pub fn validate(orders: &[Order], config: &ValidationConfig) -> ValidationSummary {
    let reference = config.reference();

    let mut findings = Vec::new();
    let mut stats = SummaryStats {
        rows: orders.len(),
        ..SummaryStats::default()
    };

    for order in orders {
        let start = findings.len();
        findings.extend(checks::required::check(order, config));
        findings.extend(checks::numeric::check(order));
        findings.extend(checks::dates::check(order));
        findings.extend(checks::sequence::check(order));
        findings.extend(checks::crossfield::check(order, config, reference));
        findings.extend(checks::factory::check(order, config));

        // The row counts once, under its worst severity.
        let worst = findings[start..].iter().map(|f| f.severity).max();
        match worst {
            Some(Severity::Critical) => stats.critical += 1,
            Some(Severity::Warning) => stats.warning += 1,
            Some(Severity::Info) => stats.info += 1,
            None => {}
        }
    }

    let is_valid = stats.critical == 0;
    let error_rate = if stats.rows > 0 {
        stats.critical as f64 / stats.rows as f64
    } else {
        0.0
    };

    ValidationSummary {
        stats,
        findings,
        is_valid,
        error_rate,
    }
}
