//! Required-field presence (Critical).

use tracing::debug;

use loadplan_model::{Finding, Order, RuleCode, Severity, fields};

use crate::config::ValidationConfig;

use super::finding;

/// A configured field (whose aliases were already folded at transform
/// time) must be present on the row.
pub fn check(order: &Order, config: &ValidationConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    for field in &config.required_fields {
        let present = match field.as_str() {
            fields::PO_NUMBER => !order.po_number.is_empty(),
            fields::STYLE => !order.style.is_empty(),
            fields::MODEL => !order.model.is_empty(),
            fields::COLOR => !order.color.is_empty(),
            fields::QUANTITY => order.quantity.is_some(),
            fields::CRD => order.crd.is_some() || !order.crd_raw.is_empty(),
            fields::SDD_ORIGINAL | fields::SDD_CURRENT => {
                order.effective_sdd().is_some() || !order.sdd_raw.is_empty()
            }
            fields::DESTINATION => !order.destination.is_empty(),
            fields::FACTORY => !order.factory.is_empty(),
            fields::VENDOR => !order.vendor.is_empty(),
            fields::BUYER => !order.buyer.is_empty(),
            // The approval flag always carries a value.
            fields::APPROVED => true,
            other => {
                debug!(field = other, "unknown required field in config; skipped");
                true
            }
        };
        if !present {
            findings.push(finding(
                order.row,
                field.clone(),
                Severity::Critical,
                RuleCode::RequiredMissing,
                format!("required field '{field}' is missing"),
                None,
            ));
        }
    }
    findings
}
