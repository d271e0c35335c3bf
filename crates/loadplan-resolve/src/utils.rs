//! Text normalization shared by header search and stage discovery.

/// Normalizes cell text for matching: lowercase, punctuation stripped,
/// whitespace collapsed to single spaces.
///
/// Punctuation is removed rather than replaced so that `"Q.ty"` and
/// `"W.H OUT"` normalize to `"qty"` and `"wh out"`, the forms the alias
/// tables and stage predicates are written against.
pub fn normalize_text(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            normalized.extend(ch.to_lowercase());
        } else if ch.is_whitespace() {
            normalized.push(' ');
        }
    }
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}
