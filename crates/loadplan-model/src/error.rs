use thiserror::Error;

/// Fatal per-file errors: the layout cannot be interpreted at all.
///
/// A `StructuralError` aborts the parse of the file it names and nothing
/// else; other files in the same batch are unaffected.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("{file}: source contains no rows")]
    EmptySource { file: String },
    #[error("{file}: no usable header row within the first {scanned} rows")]
    UnusableHeader { file: String, scanned: usize },
}

/// Recoverable per-row transform failure.
///
/// Always caught by the pipeline and recorded as a parse warning; never
/// propagated, since real exports contain dozens of malformed rows per file.
#[derive(Debug, Clone, Error)]
#[error("row {row}: {reason}")]
pub struct RowTransformError {
    /// 1-based row number in the source sheet.
    pub row: usize,
    pub reason: String,
}

impl RowTransformError {
    pub fn new(row: usize, reason: impl Into<String>) -> Self {
        Self {
            row,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StructuralError>;
