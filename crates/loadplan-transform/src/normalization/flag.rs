//! Approval-flag coercion.

use loadplan_model::CellValue;

use crate::normalization::datetime;

/// Coerces an approval cell to a boolean.
///
/// Sentinel and error tokens are false; otherwise true iff the normalized
/// value is one of `yes`, `true`, `1`, `y`.
pub fn parse_flag(cell: Option<&CellValue>) -> bool {
    let Some(cell) = cell else {
        return false;
    };
    let text = match cell {
        CellValue::Missing | CellValue::Date(_) => return false,
        CellValue::Number(value) => value.to_string(),
        CellValue::Text(text) => text.clone(),
    };
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() || datetime::is_sentinel(&normalized) {
        return false;
    }
    matches!(normalized.as_str(), "yes" | "true" | "1" | "y")
}
