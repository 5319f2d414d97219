//! Ceiling decoding
//!
//! Scans for broken, overcast, and vertical-visibility layer tokens and
//! keeps the lowest qualifying height, which is the layer that actually
//! constrains an approach. Heights are encoded as three digits in hundreds
//! of feet directly after the sky-cover prefix.

use tracing::debug;

use super::tokenizer::is_digits;
use crate::app::models::{Ceiling, SkyCover};
use crate::constants::{CEILING_HEIGHT_DIGITS, CEILING_HEIGHT_SCALE_FT};

/// Decode the ceiling from a token sequence
///
/// Among all qualifying layer tokens the lowest height wins, together with
/// the sky-cover classification that produced it. Tokens whose height
/// group fails to parse are skipped, not fatal.
pub fn decode_ceiling(tokens: &[String]) -> Option<Ceiling> {
    let mut lowest: Option<Ceiling> = None;

    for token in tokens {
        let Some(layer) = SkyCover::match_token(token) else {
            continue;
        };

        let start = layer.prefix_len();
        let Some(height_group) = token.get(start..start + CEILING_HEIGHT_DIGITS) else {
            debug!(%token, "sky-cover token too short for a height group");
            continue;
        };

        if !is_digits(height_group) {
            debug!(%token, "sky-cover height group is not numeric");
            continue;
        }

        let Ok(hundreds) = height_group.parse::<u32>() else {
            continue;
        };

        let height_ft = hundreds * CEILING_HEIGHT_SCALE_FT;
        let is_lower = lowest
            .as_ref()
            .is_none_or(|current| height_ft < current.height_ft);

        if is_lower {
            lowest = Some(Ceiling { height_ft, layer });
        }
    }

    lowest
}
