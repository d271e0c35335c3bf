//! The canonical production-order record.

use chrono::NaiveDate;

use crate::stage::StageBalances;

/// Overall completion state of an order, derived once at transform time
/// from the quantity cleared through the final stage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
    Partial,
    Pending,
}

impl OrderStatus {
    /// Derives the status from the completed-quantity proxy vs the order
    /// quantity.
    #[must_use]
    pub fn derive(cleared: i64, quantity: i64) -> Self {
        if quantity > 0 && cleared >= quantity {
            OrderStatus::Completed
        } else if cleared > 0 {
            OrderStatus::Partial
        } else {
            OrderStatus::Pending
        }
    }
}

/// One normalized purchase-order line.
///
/// Created once by the transformer and never mutated afterwards; derived
/// fields (`status`, `year_month`) are computed exactly once at creation.
/// `crd_raw` and `sdd_raw` keep the original cell text so the record filter
/// and the date-sanity validation rule can still see sentinel values after
/// coercion has produced `None`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    /// 1-based row number in the source sheet; the row reference used by
    /// validation findings.
    pub row: usize,
    /// Factory code, expected to be one of A-D.
    pub factory: String,
    pub po_number: String,
    pub style: String,
    pub model: String,
    pub color: String,
    pub destination: String,
    pub vendor: String,
    pub buyer: String,
    /// `None` means the quantity cell (and all its aliases) was absent,
    /// which is distinct from an explicit zero.
    pub quantity: Option<i64>,
    /// Customer required date.
    pub crd: Option<NaiveDate>,
    /// Scheduled delivery date as originally planned.
    pub sdd_original: Option<NaiveDate>,
    /// Current scheduled delivery date; takes precedence over the original.
    pub sdd_current: Option<NaiveDate>,
    pub crd_raw: String,
    pub sdd_raw: String,
    /// Delay/AQL approval flag.
    pub approved: bool,
    pub stages: StageBalances,
    pub status: OrderStatus,
    /// `YYYY-MM` bucket from the effective SDD, falling back to CRD.
    pub year_month: Option<String>,
}

impl Order {
    /// Quantity treated as zero when missing.
    #[must_use]
    pub fn quantity_or_zero(&self) -> i64 {
        self.quantity.unwrap_or(0)
    }

    /// Completed-quantity proxy: what has cleared the final warehouse-out
    /// stage.
    #[must_use]
    pub fn completed_quantity(&self) -> i64 {
        self.stages.wh_out
    }

    /// Effective scheduled delivery date (current wins over original).
    #[must_use]
    pub fn effective_sdd(&self) -> Option<NaiveDate> {
        self.sdd_current.or(self.sdd_original)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    /// Completion ratio in `[0, 1]`; zero when the quantity is unknown.
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        let quantity = self.quantity_or_zero();
        if quantity <= 0 {
            return 0.0;
        }
        self.completed_quantity() as f64 / quantity as f64
    }
}
