//! Schema resolution engine.
//!
//! Layouts differ across the four factory exports in column positions,
//! sub-header wording and column counts, so the schema is discovered from
//! content: a vocabulary scan locates the header row, and a priority-ordered
//! predicate table binds the eight stage-balance columns. Resolution runs
//! exactly once per file and is a pure function of the rows and the config.

use std::collections::{BTreeMap, BTreeSet};

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;
use tracing::debug;

use loadplan_model::{ColumnMap, RawRow, SourceFile, StructuralError};

use crate::types::{ResolverConfig, SchemaResolution};
use crate::utils::normalize_text;

/// Resolves the header row and stage columns for one source file.
///
/// # Errors
///
/// Returns [`StructuralError`] when the source has no rows, or when the
/// chosen header row carries no usable labels at all. A header that merely
/// fails the vocabulary scan is not fatal: the search falls back to row 0.
pub fn resolve(
    source: &SourceFile,
    config: &ResolverConfig,
) -> Result<SchemaResolution, StructuralError> {
    if source.rows.is_empty() {
        return Err(StructuralError::EmptySource {
            file: source.display_name().to_string(),
        });
    }

    let header_row = find_header_row(&source.rows, config).unwrap_or(0);
    let header = &source.rows[header_row];
    let sub_header = source.rows.get(header_row + 1);

    let labels = effective_labels(header, sub_header);
    if labels.is_empty() {
        return Err(StructuralError::UnusableHeader {
            file: source.display_name().to_string(),
            scanned: config.scan_rows,
        });
    }

    let columns = discover_stages(header, sub_header, config);
    let unresolved = columns.unresolved();
    if !unresolved.is_empty() {
        debug!(
            file = source.display_name(),
            stages = ?unresolved,
            "stage columns not found; balances default to zero"
        );
    }

    Ok(SchemaResolution {
        header_row,
        labels,
        columns,
        unresolved,
    })
}

/// Scans the leading rows for the first one with enough vocabulary hits.
fn find_header_row(rows: &[RawRow], config: &ResolverConfig) -> Option<usize> {
    for (index, row) in rows.iter().take(config.scan_rows).enumerate() {
        let matches = row
            .cells
            .values()
            .filter(|cell| matches_vocabulary(&cell.display_text(), config))
            .count();
        if matches >= config.min_matches {
            debug!(row = index, matches, "header row located");
            return Some(index);
        }
    }
    None
}

/// True when any normalized token of the cell text equals a vocabulary term
/// or sits within the Jaro-Winkler similarity threshold of one.
fn matches_vocabulary(text: &str, config: &ResolverConfig) -> bool {
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return false;
    }
    normalized.split(' ').any(|token| {
        config.vocabulary.iter().any(|term| {
            token == term.as_str()
                || jaro_similarity(token.chars(), term.chars()) >= config.similarity_threshold
        })
    })
}

/// Effective label per column: the header text, or the sub-header text when
/// the header cell is blank (merged-cell spillover in the real sheets).
fn effective_labels(
    header: &RawRow,
    sub_header: Option<&RawRow>,
) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    for column in column_keys(header, sub_header) {
        let header_text = header
            .get(&column)
            .map(|cell| cell.display_text())
            .unwrap_or_default();
        let sub_text = sub_header
            .and_then(|row| row.get(&column))
            .map(|cell| cell.display_text())
            .unwrap_or_default();
        let effective = if header_text.is_empty() {
            sub_text
        } else {
            header_text
        };
        if !effective.is_empty() {
            labels.insert(column, effective);
        }
    }
    labels
}

/// Binds stage columns by testing each column's composite header plus
/// sub-header text against the priority-ordered predicate table.
///
/// First match wins in both directions: a stage binds at most one column
/// and a column binds at most one stage, so ambiguous wording always
/// resolves the same way.
fn discover_stages(
    header: &RawRow,
    sub_header: Option<&RawRow>,
    config: &ResolverConfig,
) -> ColumnMap {
    let mut candidates: Vec<(String, String)> = Vec::new();
    for column in column_keys(header, sub_header) {
        let header_text = header
            .get(&column)
            .map(|cell| cell.display_text())
            .unwrap_or_default();
        let sub_text = sub_header
            .and_then(|row| row.get(&column))
            .map(|cell| cell.display_text())
            .unwrap_or_default();
        let composite = normalize_text(&format!("{header_text} {sub_text}"));
        if !composite.is_empty() {
            candidates.push((column, composite));
        }
    }

    let mut columns = ColumnMap::new();
    for pattern in &config.patterns {
        if columns.is_bound(pattern.stage) {
            continue;
        }
        for (column, composite) in &candidates {
            if columns.is_column_bound(column) {
                continue;
            }
            if pattern.matches(composite) {
                debug!(stage = %pattern.stage, column = column.as_str(), text = composite.as_str(), "stage column bound");
                columns.bind(pattern.stage, column.clone());
                break;
            }
        }
    }
    columns
}

/// Sorted union of the column keys present in the header and sub-header.
fn column_keys(header: &RawRow, sub_header: Option<&RawRow>) -> Vec<String> {
    let mut keys: BTreeSet<&String> = header.cells.keys().collect();
    if let Some(row) = sub_header {
        keys.extend(row.cells.keys());
    }
    keys.into_iter().cloned().collect()
}
