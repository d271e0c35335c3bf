//! Numeric coercion for quantity and stage cells.

use loadplan_model::CellValue;

use crate::normalization::clean_identifier;

/// Parses integer-ish text, tolerating thousands separators and a decimal
/// tail. Returns `None` for non-numeric text.
pub fn parse_i64(raw: &str) -> Option<i64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().map(|value| value as i64)
}

/// Coerces a quantity cell.
///
/// `None` means the cell is genuinely absent (missing, blank, or a noise
/// sentinel), which is distinct from zero so the required-field rule can
/// flag it.
/// Present but non-numeric or negative values normalize to `Some(0)`.
pub fn parse_quantity(cell: Option<&CellValue>) -> Option<i64> {
    let cell = cell?;
    match cell {
        CellValue::Missing => None,
        CellValue::Number(value) => Some((*value as i64).max(0)),
        CellValue::Date(_) => Some(0),
        CellValue::Text(text) => {
            let cleaned = clean_identifier(text);
            if cleaned.is_empty() || cleaned == "-" {
                return None;
            }
            match parse_i64(&cleaned) {
                Some(value) => Some(value.max(0)),
                None => Some(0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators_are_stripped() {
        assert_eq!(parse_i64("1,234"), Some(1234));
        assert_eq!(parse_i64("12 500"), Some(12500));
        assert_eq!(parse_i64("980.0"), Some(980));
    }

    #[test]
    fn absent_quantity_is_none_not_zero() {
        assert_eq!(parse_quantity(None), None);
        assert_eq!(parse_quantity(Some(&CellValue::Missing)), None);
        assert_eq!(parse_quantity(Some(&CellValue::text("  "))), None);
        assert_eq!(parse_quantity(Some(&CellValue::text("N/A"))), None);
    }

    #[test]
    fn garbage_and_negatives_normalize_to_zero() {
        assert_eq!(parse_quantity(Some(&CellValue::text("Q.ty"))), Some(0));
        assert_eq!(parse_quantity(Some(&CellValue::text("-120"))), Some(0));
        assert_eq!(parse_quantity(Some(&CellValue::Number(-5.0))), Some(0));
    }

    #[test]
    fn plain_numbers_pass_through() {
        assert_eq!(parse_quantity(Some(&CellValue::Number(1200.0))), Some(1200));
        assert_eq!(parse_quantity(Some(&CellValue::text("1,200"))), Some(1200));
        assert_eq!(parse_quantity(Some(&CellValue::text("0"))), Some(0));
    }
}
