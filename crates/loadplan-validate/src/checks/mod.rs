//! Independent rule families, one module each.
//!
//! Every check is a pure function `Order -> Vec<Finding>` (plus config
//! where thresholds apply); the engine runs them in a fixed order so the
//! output is deterministic.

pub mod crossfield;
pub mod dates;
pub mod factory;
pub mod numeric;
pub mod required;
pub mod sequence;

use loadplan_model::{Finding, RuleCode, Severity};

/// Shared finding constructor keeping message shape consistent across
/// rule families.
pub(crate) fn finding(
    row: usize,
    field: impl Into<String>,
    severity: Severity,
    code: RuleCode,
    message: impl Into<String>,
    value: Option<String>,
) -> Finding {
    Finding {
        row,
        field: field.into(),
        severity,
        code,
        message: message.into(),
        value,
    }
}
