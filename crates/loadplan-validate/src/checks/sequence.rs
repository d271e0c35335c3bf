//! Process-sequence monotonicity.
//!
//! In cleared-through-stage terms a later stage can never have processed
//! more than an earlier one: material flows strictly forward. An increase
//! between adjacent stages means the export's balances disagree with the
//! physical pipeline.

use loadplan_model::{Finding, Order, RuleCode, Severity, Stage};

use super::finding;

/// Checks each adjacent pair in the fixed 8-stage order.
///
/// A pair only signals when both values are nonzero and the earlier count
/// is less than the later one; zero-zero pairs carry no signal and are
/// skipped.
pub fn check(order: &Order) -> Vec<Finding> {
    let mut findings = Vec::new();
    for pair in Stage::PIPELINE.windows(2) {
        let (earlier, later) = (pair[0], pair[1]);
        let earlier_value = order.stages.get(earlier);
        let later_value = order.stages.get(later);
        if earlier_value != 0 && later_value != 0 && earlier_value < later_value {
            findings.push(finding(
                order.row,
                format!("{}/{}", earlier.key(), later.key()),
                Severity::Warning,
                RuleCode::SequenceViolation,
                format!(
                    "stage {} cleared {earlier_value} but later stage {} cleared {later_value}",
                    earlier.key(),
                    later.key()
                ),
                Some(format!("{earlier_value} < {later_value}")),
            ));
        }
    }
    findings
}
