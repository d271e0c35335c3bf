//! Raw, already-decoded source rows.
//!
//! The core never opens a spreadsheet or CSV container itself; a decoding
//! collaborator hands in `SourceFile` values and everything downstream is
//! pure. `RawRow` is ephemeral: it exists only until the transformer has
//! produced a canonical [`Order`](crate::Order) for it.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// One decoded spreadsheet cell.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True for absent cells and cells that are blank after trimming.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) | Self::Date(_) => false,
        }
    }

    /// The cell's content as display text, trimmed.
    ///
    /// Numbers drop insignificant trailing zeros, dates render ISO 8601,
    /// missing cells render empty.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Number(value) => format_numeric(*value),
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::Missing => String::new(),
        }
    }
}

/// Formats a floating-point number as a string without trailing zeros.
fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// One source row: column label -> cell. Insertion order is irrelevant;
/// all schema discovery is content-based.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RawRow {
    pub cells: BTreeMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: CellValue) {
        self.cells.insert(label.into(), value);
    }

    pub fn get(&self, label: &str) -> Option<&CellValue> {
        self.cells.get(label)
    }

    /// True when every cell is missing or blank.
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(CellValue::is_missing)
    }
}

/// A decoded source file: rows plus the original file name, which is used
/// only for factory-code inference.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SourceFile {
    pub name: Option<String>,
    pub rows: Vec<RawRow>,
}

impl SourceFile {
    pub fn new(name: Option<String>, rows: Vec<RawRow>) -> Self {
        Self { name, rows }
    }

    /// Display name for error reporting.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}
