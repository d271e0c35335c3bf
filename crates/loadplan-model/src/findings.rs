//! Validation findings and the dataset-level summary.
//!
//! Findings are data, never errors: a Critical finding flags a row for the
//! consumer but the row stays in the output.

use serde::{Deserialize, Serialize};

/// Finding severity, ordered `Info < Warning < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Stable rule codes for queryable findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleCode {
    RequiredMissing,
    NegativeValue,
    ZeroValue,
    InvalidDate,
    SequenceViolation,
    BalanceExceedsQuantity,
    CrdOutOfWindow,
    UnknownFactory,
}

impl RuleCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RuleCode::RequiredMissing => "REQUIRED_MISSING",
            RuleCode::NegativeValue => "NEGATIVE_VALUE",
            RuleCode::ZeroValue => "ZERO_VALUE",
            RuleCode::InvalidDate => "INVALID_DATE",
            RuleCode::SequenceViolation => "SEQUENCE_VIOLATION",
            RuleCode::BalanceExceedsQuantity => "BALANCE_EXCEEDS_QUANTITY",
            RuleCode::CrdOutOfWindow => "CRD_OUT_OF_WINDOW",
            RuleCode::UnknownFactory => "UNKNOWN_FACTORY",
        }
    }
}

impl std::fmt::Display for RuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding attached to one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// 1-based source row the finding refers to.
    pub row: usize,
    /// Canonical field or stage key the finding is about.
    pub field: String,
    pub severity: Severity,
    pub code: RuleCode,
    pub message: String,
    /// The offending raw value, when one exists.
    pub value: Option<String>,
}

/// Row counts per severity; each row is counted once under its worst
/// severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub rows: usize,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

/// Result of one validation pass: an immutable query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub stats: SummaryStats,
    pub findings: Vec<Finding>,
    /// True iff zero Critical findings exist anywhere in the dataset.
    pub is_valid: bool,
    /// Fraction of rows carrying a Critical finding.
    pub error_rate: f64,
}

impl ValidationSummary {
    /// All findings for one row, in engine emission order.
    pub fn findings_for_row(&self, row: usize) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |finding| finding.row == row)
    }

    /// The worst severity recorded for a row, if any finding exists.
    #[must_use]
    pub fn worst_severity(&self, row: usize) -> Option<Severity> {
        self.findings_for_row(row).map(|finding| finding.severity).max()
    }

    /// Total findings at a given severity (finding count, not row count).
    #[must_use]
    pub fn finding_count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }
}
