//! Raw row -> canonical [`Order`] transformation.

use chrono::NaiveDate;

use loadplan_model::{
    CellValue, ColumnMap, Order, OrderStatus, RawRow, RowTransformError, Stage, StageBalances,
};

use crate::aliases::fields;
use crate::factory;
use crate::field_index::FieldIndex;
use crate::normalization::{clean_identifier, datetime, flag, numeric};

/// Per-file context shared by every row transform: the resolved schema,
/// the field index and the factory hint are computed once, before the first
/// row.
#[derive(Debug, Clone)]
pub struct TransformContext<'a> {
    pub fields: &'a FieldIndex,
    pub columns: &'a ColumnMap,
    /// Factory code inferred from the source file name, when available.
    /// Takes precedence over anything found inside the rows.
    pub factory_hint: Option<String>,
    /// "Today" for year inference on `MM/DD` dates; injected so the
    /// transform stays a pure function.
    pub reference_date: NaiveDate,
}

impl<'a> TransformContext<'a> {
    pub fn new(
        fields: &'a FieldIndex,
        columns: &'a ColumnMap,
        file_name: Option<&str>,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            fields,
            columns,
            factory_hint: file_name.and_then(factory::from_file_name),
            reference_date,
        }
    }
}

/// Transforms one raw row into a canonical order.
///
/// Field-level problems degrade to safe defaults; the only error case is a
/// row with nothing interpretable at all, which the pipeline records as a
/// parse warning and skips.
pub fn transform_row(
    row_number: usize,
    row: &RawRow,
    ctx: &TransformContext<'_>,
) -> Result<Order, RowTransformError> {
    if row.is_blank() {
        return Err(RowTransformError::new(row_number, "row is blank"));
    }

    let po_number = clean_identifier(&ctx.fields.text(row, fields::PO_NUMBER));
    let style = clean_identifier(&ctx.fields.text(row, fields::STYLE));
    let model = clean_identifier(&ctx.fields.text(row, fields::MODEL));
    let color = clean_identifier(&ctx.fields.text(row, fields::COLOR));
    let destination = clean_identifier(&ctx.fields.text(row, fields::DESTINATION));
    let vendor = clean_identifier(&ctx.fields.text(row, fields::VENDOR));
    let buyer = clean_identifier(&ctx.fields.text(row, fields::BUYER));

    let quantity = numeric::parse_quantity(ctx.fields.cell(row, fields::QUANTITY));

    let crd_raw = ctx.fields.text(row, fields::CRD);
    let sdd_original_raw = ctx.fields.text(row, fields::SDD_ORIGINAL);
    let sdd_current_raw = ctx.fields.text(row, fields::SDD_CURRENT);

    let crd = parse_date_field(ctx.fields.cell(row, fields::CRD), ctx.reference_date);
    let sdd_original = parse_date_field(
        ctx.fields.cell(row, fields::SDD_ORIGINAL),
        ctx.reference_date,
    );
    let sdd_current = parse_date_field(
        ctx.fields.cell(row, fields::SDD_CURRENT),
        ctx.reference_date,
    );
    // The raw SDD text kept for the filter and date-sanity checks: current
    // wins, mirroring the parsed precedence.
    let sdd_raw = if sdd_current_raw.is_empty() {
        sdd_original_raw
    } else {
        sdd_current_raw
    };

    let approved = flag::parse_flag(ctx.fields.cell(row, fields::APPROVED));

    let factory_text = ctx.fields.text(row, fields::FACTORY);
    let factory = resolve_factory(ctx.factory_hint.as_deref(), &factory_text);

    let uninterpretable = po_number.is_empty()
        && style.is_empty()
        && model.is_empty()
        && quantity.is_none()
        && crd_raw.is_empty()
        && sdd_raw.is_empty();
    if uninterpretable {
        return Err(RowTransformError::new(
            row_number,
            "no interpretable fields present",
        ));
    }

    let qty = quantity.unwrap_or(0);
    let stages = StageBalances::from_fn(|stage| {
        stage_cleared(stage_cell(row, ctx.columns, stage), qty, ctx.reference_date)
    });

    let status = OrderStatus::derive(stages.wh_out, qty);
    let year_month = sdd_current
        .or(sdd_original)
        .or(crd)
        .map(datetime::year_month);

    Ok(Order {
        row: row_number,
        factory,
        po_number,
        style,
        model,
        color,
        destination,
        vendor,
        buyer,
        quantity,
        crd,
        sdd_original,
        sdd_current,
        crd_raw,
        sdd_raw,
        approved,
        stages,
        status,
        year_month,
    })
}

fn parse_date_field(cell: Option<&CellValue>, reference: NaiveDate) -> Option<NaiveDate> {
    match cell {
        Some(CellValue::Date(date)) => Some(*date),
        Some(CellValue::Text(text)) => datetime::parse_date(text, reference),
        // Excel serial numbers are the decoder's job; a bare number in a
        // date slot carries no usable date here.
        Some(CellValue::Number(_)) | Some(CellValue::Missing) | None => None,
    }
}

fn stage_cell<'a>(row: &'a RawRow, columns: &ColumnMap, stage: Stage) -> Option<&'a CellValue> {
    columns.column(stage).and_then(|column| row.get(column))
}

/// Folds a raw BAL cell into the canonical cleared-through-stage count.
///
/// Ground truth for the BAL columns: a date means the stage finished the
/// full quantity, a number is the remaining balance, `INHOUSE` marks an
/// outsourced step handled internally (complete). Everything is clamped to
/// `[0, quantity]`.
fn stage_cleared(cell: Option<&CellValue>, quantity: i64, reference: NaiveDate) -> i64 {
    let Some(cell) = cell else {
        return 0;
    };
    let cleared = match cell {
        CellValue::Missing => 0,
        CellValue::Date(_) => quantity,
        CellValue::Number(remaining) => quantity - (*remaining as i64),
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0
            } else if trimmed.to_uppercase().contains("INHOUSE") {
                quantity
            } else if datetime::parse_date(trimmed, reference).is_some() {
                // A date here is a completion date: the whole quantity
                // cleared. Sentinels like "1/0" already parsed to None.
                quantity
            } else if let Some(remaining) = numeric::parse_i64(trimmed) {
                quantity - remaining
            } else {
                0
            }
        }
    };
    cleared.clamp(0, quantity.max(0))
}

fn resolve_factory(hint: Option<&str>, cell_text: &str) -> String {
    if let Some(code) = hint {
        return code.to_string();
    }
    factory::from_identifier(cell_text).unwrap_or_else(|| clean_identifier(cell_text))
}

#[cfg(test)]
mod tests {
    use loadplan_model::SourceFile;
    use loadplan_resolve::{ResolverConfig, resolve};

    use crate::aliases::AliasTable;

    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 20).unwrap()
    }

    fn header_row(cells: &[(&str, &str)]) -> RawRow {
        let mut row = RawRow::new();
        for (column, text) in cells {
            row.insert(*column, CellValue::text(*text));
        }
        row
    }

    fn context_fixture() -> (FieldIndex, ColumnMap) {
        let header = header_row(&[
            ("A", "Unit"),
            ("B", "PO No"),
            ("C", "Model"),
            ("D", "Q.ty"),
            ("E", "CRD"),
            ("F", "SDD"),
            ("G", "S/CUT BAL"),
            ("H", "SEW BAL"),
            ("I", "W.H OUT BAL"),
        ]);
        let source = SourceFile::new(None, vec![header]);
        let resolution = resolve(&source, &ResolverConfig::default()).unwrap();
        let index = FieldIndex::build(&resolution, &AliasTable::default());
        (index, resolution.columns)
    }

    #[test]
    fn stage_values_never_leave_the_quantity_range() {
        let (index, columns) = context_fixture();
        let ctx = TransformContext::new(&index, &columns, None, reference());

        let mut row = RawRow::new();
        row.insert("B", CellValue::text("4501"));
        row.insert("D", CellValue::text("100"));
        // Remaining larger than the quantity and a negative remainder.
        row.insert("G", CellValue::Number(250.0));
        row.insert("H", CellValue::Number(-40.0));
        row.insert("I", CellValue::text("12/28"));

        let order = transform_row(6, &row, &ctx).unwrap();
        for (_, value) in order.stages.iter() {
            assert!((0..=100).contains(&value));
        }
        // Date in a BAL column means the full quantity cleared.
        assert_eq!(order.stages.wh_out, 100);
        // Negative remaining clamps to the full quantity, oversized
        // remaining clamps to zero.
        assert_eq!(order.stages.s_cut, 0);
        assert_eq!(order.stages.sew_bal, 100);
    }

    #[test]
    fn inhouse_counts_as_cleared() {
        let (index, columns) = context_fixture();
        let ctx = TransformContext::new(&index, &columns, None, reference());

        let mut row = RawRow::new();
        row.insert("B", CellValue::text("4501"));
        row.insert("D", CellValue::Number(80.0));
        row.insert("G", CellValue::text("INHOUSE"));

        let order = transform_row(6, &row, &ctx).unwrap();
        assert_eq!(order.stages.s_cut, 80);
        assert_eq!(order.stages.sew_bal, 0);
    }

    #[test]
    fn factory_hint_from_file_name_wins() {
        let (index, columns) = context_fixture();
        let ctx = TransformContext::new(
            &index,
            &columns,
            Some("factory_b_export.xlsx"),
            reference(),
        );

        let mut row = RawRow::new();
        row.insert("A", CellValue::text("RCF.05-SEW RA.12"));
        row.insert("B", CellValue::text("4501"));
        row.insert("D", CellValue::Number(10.0));

        let order = transform_row(6, &row, &ctx).unwrap();
        assert_eq!(order.factory, "B");
    }

    #[test]
    fn factory_falls_back_to_first_unit_code() {
        let (index, columns) = context_fixture();
        let ctx = TransformContext::new(&index, &columns, None, reference());

        let mut row = RawRow::new();
        row.insert("A", CellValue::text("RBF.05-SEW RA.12"));
        row.insert("B", CellValue::text("4501"));
        row.insert("D", CellValue::Number(10.0));

        let order = transform_row(6, &row, &ctx).unwrap();
        assert_eq!(order.factory, "B");
    }

    #[test]
    fn missing_quantity_stays_none_and_status_pending() {
        let (index, columns) = context_fixture();
        let ctx = TransformContext::new(&index, &columns, None, reference());

        let mut row = RawRow::new();
        row.insert("B", CellValue::text("4501"));
        row.insert("E", CellValue::text("12/28"));

        let order = transform_row(6, &row, &ctx).unwrap();
        assert_eq!(order.quantity, None);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.stages.wh_out, 0);
    }

    #[test]
    fn sentinel_dates_parse_to_none() {
        let (index, columns) = context_fixture();
        let ctx = TransformContext::new(&index, &columns, None, reference());

        for sentinel in ["1/0", "#REF!", "N/A"] {
            let mut row = RawRow::new();
            row.insert("B", CellValue::text("4501"));
            row.insert("D", CellValue::Number(10.0));
            row.insert("E", CellValue::text(sentinel));

            let order = transform_row(6, &row, &ctx).unwrap();
            assert_eq!(order.crd, None, "{sentinel}");
            assert_eq!(order.crd_raw, sentinel);
        }
    }

    #[test]
    fn blank_row_is_a_transform_error() {
        let (index, columns) = context_fixture();
        let ctx = TransformContext::new(&index, &columns, None, reference());
        let err = transform_row(9, &RawRow::new(), &ctx).unwrap_err();
        assert_eq!(err.row, 9);
    }

    #[test]
    fn derived_fields_computed_once_at_creation() {
        let (index, columns) = context_fixture();
        let ctx = TransformContext::new(&index, &columns, None, reference());

        let mut row = RawRow::new();
        row.insert("B", CellValue::text("4501"));
        row.insert("D", CellValue::Number(100.0));
        row.insert("F", CellValue::text("2026-01-15"));
        row.insert("I", CellValue::Number(0.0));

        let order = transform_row(6, &row, &ctx).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.year_month.as_deref(), Some("2026-01"));
    }
}
