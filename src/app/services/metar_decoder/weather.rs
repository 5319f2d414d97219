//! Significant-weather decoding
//!
//! Phenomenon codes are matched as substrings anywhere inside a token, so
//! intensity prefixes and combined groups ("+TSRA", "-SHSN") resolve to
//! every phenomenon they contain. Insertion is idempotent; a label appears
//! at most once regardless of how many tokens carry its code.

use crate::constants::WEATHER_CODES;

/// Decode significant-weather labels from a token sequence
///
/// The result preserves the fixed table order of first discovery, which
/// keeps output reproducible. A report without weather groups yields an
/// empty list, which is a real observation, not an absence.
pub fn decode_weather(tokens: &[String]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for token in tokens {
        for (code, label) in WEATHER_CODES {
            if token.contains(code) && !found.iter().any(|existing| existing == label) {
                found.push((*label).to_string());
            }
        }
    }

    found
}
