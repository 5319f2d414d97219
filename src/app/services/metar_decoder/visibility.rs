//! Visibility decoding
//!
//! Handles the plain ("10SM"), fractional ("1/2SM"), and compound
//! ("1 1/2SM") visibility encodings. The compound form spreads one value
//! across two tokens: a bare whole-number token immediately before the
//! unit-suffixed fraction, and the two must be summed.

use tracing::debug;

use super::tokenizer::is_digits;
use crate::constants::VISIBILITY_UNIT_SUFFIX;

/// Decode prevailing visibility in statute miles from a token sequence
///
/// A candidate must decode to a strictly positive value to be accepted;
/// zero or unparseable candidates are skipped and scanning continues.
pub fn decode_visibility_sm(tokens: &[String]) -> Option<f64> {
    for (index, token) in tokens.iter().enumerate() {
        let Some(suffix_pos) = token.find(VISIBILITY_UNIT_SUFFIX) else {
            continue;
        };

        let value_part = &token[..suffix_pos];
        let mut total = 0.0;

        if !value_part.is_empty() {
            if let Some(fraction) = parse_fraction(value_part) {
                total += fraction;
            } else if is_digits(value_part) {
                if let Ok(whole) = value_part.parse::<f64>() {
                    total += whole;
                }
            }
        }

        // Compound form: a bare whole-number token before the fraction
        if index > 0 && is_digits(&tokens[index - 1]) {
            if let Ok(whole) = tokens[index - 1].parse::<f64>() {
                total += whole;
            }
        }

        if total > 0.0 {
            return Some(total);
        }

        debug!(%token, "visibility candidate decoded to zero, skipping");
    }

    None
}

/// Parse a "numerator/denominator" value
///
/// A zero denominator is a malformed fraction and yields no value rather
/// than infinity.
fn parse_fraction(value: &str) -> Option<f64> {
    let (numerator, denominator) = value.split_once('/')?;

    if !is_digits(numerator) || !is_digits(denominator) {
        return None;
    }

    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;

    if denominator == 0.0 {
        debug!(%value, "fraction with zero denominator, skipping");
        return None;
    }

    Some(numerator / denominator)
}
