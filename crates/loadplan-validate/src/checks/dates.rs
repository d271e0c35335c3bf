//! Date sanity: sentinel text left in CRD/SDD slots.

use loadplan_model::{Finding, Order, RuleCode, Severity, fields, sentinel::is_date_sentinel};

use super::finding;

pub fn check(order: &Order) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (field, raw, parsed) in [
        (fields::CRD, &order.crd_raw, order.crd),
        (fields::SDD_CURRENT, &order.sdd_raw, order.effective_sdd()),
    ] {
        if parsed.is_none() && !raw.is_empty() && is_date_sentinel(raw) {
            findings.push(finding(
                order.row,
                field,
                Severity::Warning,
                RuleCode::InvalidDate,
                format!("{field} holds the sentinel '{raw}' instead of a date"),
                Some(raw.clone()),
            ));
        }
    }
    findings
}
