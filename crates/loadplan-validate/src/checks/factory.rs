//! Factory-code plausibility.
//!
//! Internal codes may legitimately differ from the A-D network, so an
//! unknown code is logged as Info and never rejected.

use loadplan_model::{Finding, Order, RuleCode, Severity, fields};

use crate::config::ValidationConfig;

use super::finding;

pub fn check(order: &Order, config: &ValidationConfig) -> Vec<Finding> {
    if order.factory.is_empty() || config.known_factories.contains(&order.factory) {
        return Vec::new();
    }
    vec![finding(
        order.row,
        fields::FACTORY,
        Severity::Info,
        RuleCode::UnknownFactory,
        format!(
            "factory code '{}' is outside the known set {:?}",
            order.factory, config.known_factories
        ),
        Some(order.factory.clone()),
    )]
}
