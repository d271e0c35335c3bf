//! Value coercion: numbers, dates, flags.
//!
//! Every parser here degrades to a safe default instead of failing; real
//! exports are full of sentinel strings and per-cell noise, and a single
//! bad cell must never cost a row.

pub mod datetime;
pub mod flag;
pub mod numeric;

/// Textual noise tokens that stand in for "no value" in identifier cells.
///
/// Distinct from the date sentinels in [`datetime::SENTINELS`]: `-` is kept
/// for identifiers because the record filter treats a literal `-` as a
/// placeholder signal.
const NOISE_TOKENS: [&str; 9] = [
    "nan", "none", "null", "undefined", "n/a", "na", "#n/a", "#ref!", "tbd",
];

/// Trims an identifier-ish cell, blanking out pure noise tokens.
pub fn clean_identifier(raw: &str) -> String {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();
    if NOISE_TOKENS.contains(&lowered.as_str()) {
        return String::new();
    }
    trimmed.to_string()
}
