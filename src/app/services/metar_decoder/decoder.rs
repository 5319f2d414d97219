//! Decode orchestration
//!
//! Runs the tokenizer and every field decoder over one raw report line.
//! Decoding never fails; fields that cannot be extracted are absent in the
//! result.

use tracing::debug;

use super::{ceiling, tokenizer, visibility, weather, wind};
use crate::app::models::DecodedMetar;
use crate::constants::{TIME_GROUP_MIN_LEN, TIME_GROUP_SUFFIX};

/// Decode one raw report into structured fields
///
/// The station identifier is token 0; the time group is token 1 when it is
/// long enough and carries the zulu marker. All other fields are located
/// by their own token-shape grammar, independent of position.
pub fn decode(raw: &str) -> DecodedMetar {
    let tokens = tokenizer::tokenize(raw);

    let station = tokens.first().cloned().unwrap_or_default();
    let timestamp = tokens
        .get(1)
        .filter(|token| token.len() >= TIME_GROUP_MIN_LEN && token.ends_with(TIME_GROUP_SUFFIX))
        .cloned();

    let decoded = DecodedMetar {
        station,
        timestamp,
        wind: wind::decode_wind(&tokens),
        visibility_sm: visibility::decode_visibility_sm(&tokens),
        ceiling: ceiling::decode_ceiling(&tokens),
        weather: weather::decode_weather(&tokens),
    };

    debug!(
        station = %decoded.station,
        wind = decoded.wind.is_some(),
        visibility = decoded.visibility_sm.is_some(),
        ceiling = decoded.ceiling.is_some(),
        "decoded report"
    );

    decoded
}
