//! CSV decoding collaborator.
//!
//! The core consumes already-decoded rows; this is the edge that does the
//! decoding for the CLI. Rows are read positionally with no header
//! interpretation, since the real sheets bury their header mid-file and
//! locating it is the resolver's job. Columns get synthetic
//! spreadsheet-letter labels instead.

use std::path::Path;

use loadplan_model::{CellValue, RawRow, SourceFile};

/// Reads a CSV file into a [`SourceFile`], one [`RawRow`] per record.
///
/// Cells stay text; coercion happens in the transformer. Ragged rows are
/// accepted, as exports frequently pad or truncate trailing columns.
pub fn read_csv_source(path: &Path) -> anyhow::Result<SourceFile> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (index, value) in record.iter().enumerate() {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            row.insert(column_label(index), CellValue::Text(trimmed.to_string()));
        }
        rows.push(row);
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    Ok(SourceFile::new(name, rows))
}

/// Spreadsheet-style column label: 0 -> A, 25 -> Z, 26 -> AA.
fn column_label(mut index: usize) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (index % 26) as u8) as char);
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    label
}
