use loadplan_model::{CellValue, RawRow, SourceFile, Stage, StructuralError};
use loadplan_resolve::{ResolverConfig, resolve};

fn row(cells: &[(&str, &str)]) -> RawRow {
    let mut row = RawRow::new();
    for (column, text) in cells {
        row.insert(*column, CellValue::text(*text));
    }
    row
}

/// A representative factory sheet: title row, blank row, header, sub-header.
fn factory_sheet() -> SourceFile {
    let rows = vec![
        row(&[("A", "LOADPLAN ASSEMBLY OF RACHGIA FACTORY B  12.20.2025")]),
        RawRow::new(),
        row(&[
            ("A", "Unit"),
            ("B", "Season"),
            ("C", "CRD"),
            ("D", "SDD"),
            ("F", "Model"),
            ("G", "Color"),
            ("H", "Destination"),
            ("I", "Q.ty"),
            ("J", "PO No"),
            ("K", "S/CUT"),
            ("L", "PRE-SEW"),
            ("M", "SEW INPUT"),
            ("N", "SEW"),
            ("O", "S.FIT"),
            ("P", "ASS"),
            ("Q", "W.H IN"),
            ("R", "W.H OUT"),
        ]),
        row(&[
            ("D", "Original"),
            ("E", "Current"),
            ("K", "BAL"),
            ("L", "BAL"),
            ("M", "BAL"),
            ("N", "BAL"),
            ("O", "BAL"),
            ("P", "BAL"),
            ("Q", "BAL"),
            ("R", "BAL"),
        ]),
    ];
    SourceFile::new(Some("B- LOADPLAN ASSEMBLY.csv".to_string()), rows)
}

#[test]
fn locates_header_past_title_rows() {
    let resolution = resolve(&factory_sheet(), &ResolverConfig::default()).unwrap();
    assert_eq!(resolution.header_row, 2);
    assert_eq!(resolution.first_data_row(), 3);
}

#[test]
fn binds_all_eight_stages() {
    let resolution = resolve(&factory_sheet(), &ResolverConfig::default()).unwrap();
    assert_eq!(resolution.columns.column(Stage::SCut), Some("K"));
    assert_eq!(resolution.columns.column(Stage::PreSew), Some("L"));
    assert_eq!(resolution.columns.column(Stage::SewInput), Some("M"));
    assert_eq!(resolution.columns.column(Stage::SewBal), Some("N"));
    assert_eq!(resolution.columns.column(Stage::SFit), Some("O"));
    assert_eq!(resolution.columns.column(Stage::AssBal), Some("P"));
    assert_eq!(resolution.columns.column(Stage::WhIn), Some("Q"));
    assert_eq!(resolution.columns.column(Stage::WhOut), Some("R"));
    assert!(resolution.unresolved.is_empty());
}

#[test]
fn merged_header_cells_fall_back_to_sub_header_labels() {
    let resolution = resolve(&factory_sheet(), &ResolverConfig::default()).unwrap();
    assert_eq!(resolution.labels.get("D").map(String::as_str), Some("SDD"));
    // Column E has no header text; the sub-header word stands in.
    assert_eq!(
        resolution.labels.get("E").map(String::as_str),
        Some("Current")
    );
}

#[test]
fn sew_wording_disambiguates() {
    // Three near-identical sub-headers must land on three distinct stages.
    let rows = vec![
        row(&[
            ("A", "PO"),
            ("B", "Style"),
            ("C", "Qty"),
            ("D", "SEW INPUT BAL"),
            ("E", "SEW BAL"),
            ("F", "PRE SEW BAL"),
        ]),
        RawRow::new(),
    ];
    let source = SourceFile::new(None, rows);
    let resolution = resolve(&source, &ResolverConfig::default()).unwrap();
    assert_eq!(resolution.columns.column(Stage::SewInput), Some("D"));
    assert_eq!(resolution.columns.column(Stage::SewBal), Some("E"));
    assert_eq!(resolution.columns.column(Stage::PreSew), Some("F"));
}

#[test]
fn cell_matching_multiple_patterns_follows_priority_order() {
    // "PRE SEW INPUT BAL" satisfies both SEW_INPUT and PRE_SEW; the
    // declared priority gives it to SEW_INPUT.
    let rows = vec![
        row(&[("A", "PO"), ("B", "Qty"), ("C", "CRD"), ("D", "PRE SEW INPUT BAL")]),
        RawRow::new(),
    ];
    let source = SourceFile::new(None, rows);
    let resolution = resolve(&source, &ResolverConfig::default()).unwrap();
    assert_eq!(resolution.columns.column(Stage::SewInput), Some("D"));
    assert_eq!(resolution.columns.column(Stage::PreSew), None);
}

#[test]
fn duplicate_stage_wording_binds_only_the_first_column() {
    let rows = vec![
        row(&[
            ("A", "PO"),
            ("B", "Qty"),
            ("C", "CRD"),
            ("D", "SEW BAL"),
            ("E", "SEW BAL"),
        ]),
        RawRow::new(),
    ];
    let source = SourceFile::new(None, rows);
    let resolution = resolve(&source, &ResolverConfig::default()).unwrap();
    assert_eq!(resolution.columns.column(Stage::SewBal), Some("D"));
    assert!(!resolution.columns.is_column_bound("E"));
}

#[test]
fn missing_stage_column_is_reported_not_fatal() {
    let mut source = factory_sheet();
    // Drop the W.H IN column from header and sub-header.
    for row in &mut source.rows {
        row.cells.remove("Q");
    }
    let resolution = resolve(&source, &ResolverConfig::default()).unwrap();
    assert_eq!(resolution.unresolved, vec![Stage::WhIn]);
    assert_eq!(resolution.columns.column(Stage::WhOut), Some("R"));
}

#[test]
fn defaults_to_row_zero_when_no_row_qualifies() {
    let rows = vec![row(&[("A", "alpha"), ("B", "beta"), ("C", "gamma")])];
    let source = SourceFile::new(None, rows);
    let resolution = resolve(&source, &ResolverConfig::default()).unwrap();
    assert_eq!(resolution.header_row, 0);
    assert!(resolution.columns.is_empty());
    assert_eq!(resolution.unresolved.len(), 8);
}

#[test]
fn empty_source_is_a_structural_error() {
    let source = SourceFile::new(Some("empty.csv".to_string()), Vec::new());
    let err = resolve(&source, &ResolverConfig::default()).unwrap_err();
    assert!(matches!(err, StructuralError::EmptySource { .. }));
    assert!(err.to_string().contains("empty.csv"));
}

#[test]
fn resolution_is_idempotent() {
    let source = factory_sheet();
    let config = ResolverConfig::default();
    let first = resolve(&source, &config).unwrap();
    let second = resolve(&source, &config).unwrap();
    assert_eq!(first, second);
}
