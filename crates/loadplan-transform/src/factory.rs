//! Factory-code extraction.
//!
//! The file name is the most reliable signal (`"B- LOADPLAN ..."`,
//! `"factory_b_export.xlsx"`); failing that, the composite unit identifier
//! carries an `R<code>` token. `"RBF.05-SEW RA.12"` belongs to factory B:
//! the first match wins, not the last.

use std::sync::LazyLock;

use regex::Regex;

static FILE_FACTORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)factory[\s._-]*([a-d])(?:[^a-z]|$)").expect("valid factory file pattern")
});

static FILE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Da-d])\s*-").expect("valid factory prefix pattern"));

static UNIT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"R([A-D])").expect("valid unit code pattern"));

/// Extracts a factory code from a source file name, if one is present.
pub fn from_file_name(name: &str) -> Option<String> {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);
    if let Some(captures) = FILE_FACTORY.captures(base) {
        return Some(captures[1].to_uppercase());
    }
    FILE_PREFIX
        .captures(base)
        .map(|captures| captures[1].to_uppercase())
}

/// Extracts a factory code from a composite identifier cell.
///
/// A bare `A`-`D` cell is taken verbatim; otherwise the first `R<code>`
/// token decides.
pub fn from_identifier(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.len() == 1 && trimmed.chars().all(|ch| matches!(ch, 'A'..='D' | 'a'..='d')) {
        return Some(trimmed.to_uppercase());
    }
    UNIT_CODE
        .captures(trimmed)
        .map(|captures| captures[1].to_string())
}
