//! The record filter: a pure per-row predicate separating data rows from
//! structural noise (repeated headers, sub-header echoes, TOTAL rows,
//! placeholders).

use loadplan_model::Order;
use loadplan_resolve::normalize_text;

/// Sub-header words that leak into the date slot when the sub-header row is
/// transformed as data.
const SUBHEADER_ECHOES: [&str; 6] = ["original", "current", "plan", "actual", "target", "balance"];

/// Header labels that reappear as data when a sheet repeats its header
/// mid-file.
const HEADER_ECHOES: [&str; 11] = [
    "po",
    "po no",
    "po number",
    "order no",
    "setp",
    "sales order",
    "qty",
    "quantity",
    "style",
    "model",
    "no",
];

/// True when the order is a real data row worth keeping.
///
/// Evaluated independently per row with no cross-row state. Missing
/// quantity does NOT drop a row; that is suspicious but legitimate, and
/// the pipeline logs it instead.
pub fn is_data_row(order: &Order) -> bool {
    let crd_norm = normalize_text(&order.crd_raw);
    let sdd_norm = normalize_text(&order.sdd_raw);

    // Sub-header row transformed as data: its date slot reads like a
    // sub-header word, never like a date.
    if SUBHEADER_ECHOES.contains(&crd_norm.as_str())
        || SUBHEADER_ECHOES.contains(&sdd_norm.as_str())
    {
        return false;
    }

    // Repeated header row: the identifier slot holds a header label.
    let po_norm = normalize_text(&order.po_number);
    if !po_norm.is_empty() && HEADER_ECHOES.contains(&po_norm.as_str()) {
        return false;
    }

    // Summary rows.
    let upper_po = order.po_number.to_uppercase();
    if upper_po.contains("TOTAL")
        || order.crd_raw.to_uppercase().contains("TOTAL")
        || order.sdd_raw.to_uppercase().contains("TOTAL")
    {
        return false;
    }

    // Placeholder identifier with no date signal.
    if order.po_number == "-" && order.crd.is_none() && order.effective_sdd().is_none() {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use loadplan_model::{OrderStatus, StageBalances};

    use super::*;

    fn order() -> Order {
        Order {
            row: 6,
            factory: "A".to_string(),
            po_number: "4501234".to_string(),
            style: String::new(),
            model: "RUNNER".to_string(),
            color: String::new(),
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
            stages: StageBalances::default(),
            status: OrderStatus::Pending,
            year_month: Some("2025-12".to_string()),
        }
    }

    #[test]
    fn keeps_ordinary_rows() {
        assert!(is_data_row(&order()));
    }

    #[test]
    fn drops_subheader_echoes() {
        for echo in ["Original", "Current", "Plan", "Actual", "Target", "Balance"] {
            let mut o = order();
            o.sdd_raw = echo.to_string();
            o.crd = None;
            assert!(!is_data_row(&o), "{echo}");
        }
    }

    #[test]
    fn drops_repeated_header_rows() {
        let mut o = order();
        o.po_number = "PO No".to_string();
        assert!(!is_data_row(&o));
        o.po_number = "Q.ty".to_string();
        assert!(!is_data_row(&o));
    }

    #[test]
    fn drops_total_rows() {
        let mut o = order();
        o.po_number = "TOTAL".to_string();
        assert!(!is_data_row(&o));

        let mut o = order();
        o.crd_raw = "GRAND TOTAL".to_string();
        assert!(!is_data_row(&o));
    }

    #[test]
    fn drops_dash_placeholder_without_dates() {
        let mut o = order();
        o.po_number = "-".to_string();
        o.crd = None;
        o.crd_raw = String::new();
        assert!(!is_data_row(&o));
    }

    #[test]
    fn keeps_dash_identifier_with_a_real_date() {
        let mut o = order();
        o.po_number = "-".to_string();
        assert!(is_data_row(&o));
    }

    #[test]
    fn keeps_rows_with_missing_quantity() {
        let mut o = order();
        o.quantity = None;
        assert!(is_data_row(&o));
    }
}
