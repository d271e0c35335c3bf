//! Date coercion for CRD/SDD and BAL completion cells.
//!
//! The factory exports write dates as `MM/DD` (year implied), `YYYY.MM.DD`,
//! `YYYY-MM-DD` and a handful of full formats, interleaved with sentinel
//! error strings that must parse to nothing rather than fail a row.

use chrono::{Datelike, NaiveDate};

pub use loadplan_model::sentinel::is_date_sentinel as is_sentinel;

const FULL_DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Parses loadplan date text.
///
/// `MM/DD` and `MM-DD` assume the reference year; when that lands more than
/// 180 days in the past the date rolls forward one year (the sheets only
/// ever look ahead). Sentinels and unparseable text yield `None`, never an
/// error.
pub fn parse_date(raw: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_sentinel(trimmed) {
        return None;
    }

    if let Some(date) = parse_month_day(trimmed, reference) {
        return Some(date);
    }

    for format in FULL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    None
}

/// `MM/DD` or `MM-DD` with the year inferred from the reference date.
fn parse_month_day(trimmed: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let (month_part, day_part) = trimmed
        .split_once('/')
        .or_else(|| trimmed.split_once('-'))?;
    let month: u32 = parse_small_number(month_part)?;
    let day: u32 = parse_small_number(day_part)?;
    let candidate = NaiveDate::from_ymd_opt(reference.year(), month, day)?;
    if reference.signed_duration_since(candidate).num_days() > 180 {
        return candidate
            .with_year(reference.year() + 1)
            .or(Some(candidate));
    }
    Some(candidate)
}

/// One- or two-digit component; anything longer is a full date, not MM/DD.
fn parse_small_number(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// `YYYY-MM` bucket for grouping.
pub fn year_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
