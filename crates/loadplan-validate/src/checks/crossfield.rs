//! Cross-field logical checks: stage counts vs quantity, CRD plausibility
//! window.

use chrono::NaiveDate;

use loadplan_model::{Finding, Order, RuleCode, Severity, fields};

use crate::config::ValidationConfig;

use super::finding;

pub fn check(order: &Order, config: &ValidationConfig, reference: NaiveDate) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(quantity) = order.quantity {
        for (stage, value) in order.stages.iter() {
            if value > quantity + config.balance_tolerance {
                findings.push(finding(
                    order.row,
                    stage.key(),
                    Severity::Warning,
                    RuleCode::BalanceExceedsQuantity,
                    format!(
                        "stage {} count {value} exceeds order quantity {quantity}",
                        stage.key()
                    ),
                    Some(value.to_string()),
                ));
            }
        }
    }

    if let Some(crd) = order.crd {
        let offset = crd.signed_duration_since(reference).num_days();
        if offset < -config.crd_window_past_days || offset > config.crd_window_future_days {
            findings.push(finding(
                order.row,
                fields::CRD,
                Severity::Info,
                RuleCode::CrdOutOfWindow,
                format!(
                    "CRD {crd} is {offset} days from the reference date, outside \
                     [-{}, +{}]",
                    config.crd_window_past_days, config.crd_window_future_days
                ),
                Some(crd.to_string()),
            ));
        }
    }

    findings
}
