//! Canonical field -> source column lookup, built once per file.

use std::collections::BTreeMap;

use tracing::debug;

use loadplan_model::{CellValue, RawRow};
use loadplan_resolve::{SchemaResolution, normalize_text};

use crate::aliases::AliasTable;

/// Maps canonical fields to the columns that may hold them in one file.
///
/// Built once from the resolved labels and the alias table. A field can
/// match several columns (a sheet may carry both "PO" and "Order No");
/// candidates are kept in alias priority order and, per row, the first
/// present value wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldIndex {
    candidates: BTreeMap<String, Vec<String>>,
}

impl FieldIndex {
    pub fn build(resolution: &SchemaResolution, aliases: &AliasTable) -> Self {
        // Label lookup normalized once; first column (in key order) wins for
        // duplicate labels.
        let mut by_label: BTreeMap<String, &str> = BTreeMap::new();
        for (column, label) in &resolution.labels {
            by_label
                .entry(normalize_text(label))
                .or_insert(column.as_str());
        }

        let mut candidates: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for field in aliases.fields() {
            let mut columns = Vec::new();
            for label in aliases.labels(field) {
                if let Some(column) = by_label.get(&normalize_text(label))
                    && !columns.iter().any(|existing| existing == column)
                {
                    columns.push((*column).to_string());
                }
            }
            if columns.is_empty() {
                debug!(field, "no source column for canonical field");
            } else {
                candidates.insert(field.to_string(), columns);
            }
        }
        Self { candidates }
    }

    /// The highest-priority column bound to a canonical field, if any.
    pub fn column(&self, field: &str) -> Option<&str> {
        self.candidates
            .get(field)
            .and_then(|columns| columns.first())
            .map(String::as_str)
    }

    /// The cell holding a canonical field in the given row: the first
    /// candidate column with a present value.
    pub fn cell<'a>(&self, row: &'a RawRow, field: &str) -> Option<&'a CellValue> {
        let columns = self.candidates.get(field)?;
        let mut fallback = None;
        for column in columns {
            if let Some(cell) = row.get(column) {
                if !cell.is_missing() {
                    return Some(cell);
                }
                fallback = fallback.or(Some(cell));
            }
        }
        fallback
    }

    /// The field's cell as display text, empty when absent.
    pub fn text(&self, row: &RawRow, field: &str) -> String {
        self.cell(row, field)
            .map(CellValue::display_text)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
