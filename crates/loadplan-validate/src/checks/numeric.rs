//! Numeric sanity over quantity and stage counts.

use loadplan_model::{Finding, Order, RuleCode, Severity, fields};

use super::finding;

/// Negative values warn, exact zeros are informational. The transformer
/// clamps its own output, so negatives here indicate hand-built or
/// tampered records.
pub fn check(order: &Order) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(quantity) = order.quantity {
        push_value_finding(&mut findings, order.row, fields::QUANTITY, quantity);
    }
    for (stage, value) in order.stages.iter() {
        push_value_finding(&mut findings, order.row, stage.key(), value);
    }

    findings
}

fn push_value_finding(findings: &mut Vec<Finding>, row: usize, field: &str, value: i64) {
    if value < 0 {
        findings.push(finding(
            row,
            field,
            Severity::Warning,
            RuleCode::NegativeValue,
            format!("{field} is negative"),
            Some(value.to_string()),
        ));
    } else if value == 0 {
        findings.push(finding(
            row,
            field,
            Severity::Info,
            RuleCode::ZeroValue,
            format!("{field} is zero"),
            Some("0".to_string()),
        ));
    }
}
