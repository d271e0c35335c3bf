//! Sentinel tokens the factory exports write into date cells.
//!
//! Shared vocabulary: the transformer uses it to coerce these cells to
//! `None`, and the validator's date-sanity rule uses it to classify the
//! leftover raw text.

/// Tokens that occupy a date cell but carry no date: spreadsheet error
/// values, divide-by-zero artifacts, and assorted "no value" spellings.
pub const DATE_SENTINELS: [&str; 18] = [
    "1/0",
    "0",
    "-",
    "#ref!",
    "#n/a",
    "#div/0!",
    "#value!",
    "#name?",
    "#num!",
    "#null!",
    "n/a",
    "na",
    "null",
    "undefined",
    "nan",
    "none",
    "00:00:00",
    "tbd",
];

/// True when the text is one of the known no-date sentinels.
pub fn is_date_sentinel(raw: &str) -> bool {
    let lowered = raw.trim().to_lowercase();
    DATE_SENTINELS.contains(&lowered.as_str())
}
