//! Report tokenization and token utilities
//!
//! Field decoders operate on an upper-cased, whitespace-split token
//! sequence. The sequence is positional: the station identifier is token 0
//! and the time group, when present, is token 1.

/// Split a raw report line into upper-cased tokens
///
/// Splitting on whitespace guarantees no token is empty.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_uppercase).collect()
}

/// Whether a token consists entirely of ASCII digits
///
/// Stricter than a plain integer parse: signs and non-ASCII digits do not
/// qualify, matching the report encoding.
pub fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
