use chrono::NaiveDate;

use loadplan_model::{
    Order, OrderStatus, RuleCode, Severity, Stage, StageBalances,
};
use loadplan_validate::{ValidationConfig, validate};

fn config() -> ValidationConfig {
    ValidationConfig {
        reference_date: NaiveDate::from_ymd_opt(2025, 12, 20),
        ..ValidationConfig::default()
    }
}

fn order(row: usize) -> Order {
    Order {
        row,
        factory: "A".to_string(),
        po_number: "4501234".to_string(),
        style: "AQ1234".to_string(),
        model: "RUNNER".to_string(),
        color: "BLACK".to_string(),
        destination: "US".to_string(),
        vendor: String::new(),
        buyer: String::new(),
        quantity: Some(100),
        crd: NaiveDate::from_ymd_opt(2025, 12, 28),
        sdd_original: None,
        sdd_current: None,
        crd_raw: "12/28".to_string(),
        sdd_raw: String::new(),
        approved: false,
        stages: StageBalances::from_fn(|_| 100),
        status: OrderStatus::Completed,
        year_month: Some("2025-12".to_string()),
    }
}

fn with_stages(row: usize, values: [i64; 8]) -> Order {
    let mut o = order(row);
    for (i, stage) in Stage::PIPELINE.into_iter().enumerate() {
        o.stages.set(stage, values[i]);
    }
    o
}

fn sequence_violations(orders: &[Order]) -> Vec<loadplan_model::Finding> {
    validate(orders, &config())
        .findings
        .into_iter()
        .filter(|f| f.code == RuleCode::SequenceViolation)
        .collect()
}

#[test]
fn monotonic_stages_produce_no_sequence_violations() {
    let o = with_stages(6, [10, 8, 6, 4, 2, 1, 0, 0]);
    assert!(sequence_violations(&[o]).is_empty());
}

#[test]
fn single_increase_produces_exactly_one_violation_naming_both_stages() {
    let o = with_stages(6, [5, 8, 6, 4, 2, 1, 0, 0]);
    let violations = sequence_violations(&[o]);
    assert_eq!(violations.len(), 1);
    let violation = &violations[0];
    assert!(violation.message.contains("S_CUT"));
    assert!(violation.message.contains("PRE_SEW"));
    assert!(violation.message.contains('5'));
    assert!(violation.message.contains('8'));
    assert_eq!(violation.severity, Severity::Warning);
}

#[test]
fn zero_pairs_carry_no_signal() {
    let o = with_stages(6, [0, 0, 0, 0, 0, 0, 0, 0]);
    assert!(sequence_violations(&[o]).is_empty());
    // An increase out of zero is also not a pair signal: only pairs where
    // both values are nonzero count.
    let o = with_stages(6, [0, 5, 5, 5, 0, 0, 0, 0]);
    assert!(sequence_violations(&[o]).is_empty());
}

#[test]
fn missing_quantity_is_exactly_one_critical_required_missing() {
    let mut o = order(6);
    o.quantity = None;
    o.stages = StageBalances::default();
    o.status = OrderStatus::Pending;

    let summary = validate(&[o], &config());
    let criticals: Vec<_> = summary
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Critical)
        .collect();
    assert_eq!(criticals.len(), 1);
    assert_eq!(criticals[0].code, RuleCode::RequiredMissing);
    assert_eq!(criticals[0].field, "quantity");
    assert!(!summary.is_valid);
    assert_eq!(summary.stats.critical, 1);
}

#[test]
fn stage_exceeding_quantity_warns() {
    let mut o = order(6);
    o.stages.set(Stage::SCut, 140);
    let summary = validate(&[o], &config());
    assert!(summary.findings.iter().any(|f| {
        f.code == RuleCode::BalanceExceedsQuantity
            && f.field == "S_CUT"
            && f.severity == Severity::Warning
    }));
    // Warnings never invalidate the dataset.
    assert!(summary.is_valid);
}

#[test]
fn crd_outside_window_is_informational() {
    let mut o = order(6);
    o.crd = NaiveDate::from_ymd_opt(2031, 1, 1);
    o.crd_raw = "2031-01-01".to_string();
    let summary = validate(&[o], &config());
    assert!(summary.findings.iter().any(|f| {
        f.code == RuleCode::CrdOutOfWindow && f.severity == Severity::Info
    }));
}

#[test]
fn sentinel_date_text_warns() {
    let mut o = order(6);
    o.crd = None;
    o.crd_raw = "#REF!".to_string();
    let summary = validate(&[o], &config());
    assert!(summary.findings.iter().any(|f| {
        f.code == RuleCode::InvalidDate
            && f.severity == Severity::Warning
            && f.value.as_deref() == Some("#REF!")
    }));
}

#[test]
fn unknown_factory_is_informational_never_rejecting() {
    let mut o = order(6);
    o.factory = "X".to_string();
    let summary = validate(&[o], &config());
    assert!(summary.findings.iter().any(|f| {
        f.code == RuleCode::UnknownFactory && f.severity == Severity::Info
    }));
    assert!(summary.is_valid);
}

#[test]
fn clean_rows_produce_a_valid_summary() {
    let summary = validate(&[order(6), order(7)], &config());
    assert!(summary.is_valid);
    assert_eq!(summary.stats.rows, 2);
    assert_eq!(summary.stats.critical, 0);
    assert_eq!(summary.error_rate, 0.0);
}

#[test]
fn validation_is_byte_identical_across_runs() {
    let orders = vec![
        with_stages(6, [5, 8, 6, 4, 2, 1, 0, 0]),
        {
            let mut o = order(7);
            o.quantity = None;
            o
        },
        order(8),
    ];
    let cfg = config();
    let first = serde_json::to_vec(&validate(&orders, &cfg)).unwrap();
    let second = serde_json::to_vec(&validate(&orders, &cfg)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn error_rate_is_critical_rows_over_total() {
    let mut bad = order(7);
    bad.quantity = None;
    let summary = validate(&[order(6), bad, order(8), order(9)], &config());
    assert_eq!(summary.stats.critical, 1);
    assert!((summary.error_rate - 0.25).abs() < f64::EPSILON);
}
