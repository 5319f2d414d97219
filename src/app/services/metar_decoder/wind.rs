//! Wind group decoding
//!
//! Matches tokens of the shape `dddssKT`, `dddssGggKT`, or the
//! variable-direction forms `VRBssKT` / `VRBssGggKT`. The first matching
//! token wins; a report with no match has no wind observation.

use regex::Regex;
use std::sync::OnceLock;

use crate::app::models::Wind;
use crate::constants::VARIABLE_WIND_MARKER;

/// Wind group shape: heading or VRB, 2-3 digit speed, optional gust, unit
fn wind_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{3}|VRB)(\d{2,3})(G(\d{2,3}))?KT$").expect("wind pattern is valid")
    })
}

/// Decode the wind group from a token sequence
pub fn decode_wind(tokens: &[String]) -> Option<Wind> {
    for token in tokens {
        let Some(captures) = wind_pattern().captures(token) else {
            continue;
        };

        let direction_deg = if &captures[1] == VARIABLE_WIND_MARKER {
            None
        } else {
            match captures[1].parse::<u16>() {
                Ok(heading) => Some(heading),
                Err(_) => continue,
            }
        };

        let Ok(speed_kt) = captures[2].parse::<u16>() else {
            continue;
        };

        let gust_kt = captures
            .get(4)
            .and_then(|gust| gust.as_str().parse::<u16>().ok());

        return Some(Wind {
            direction_deg,
            speed_kt,
            gust_kt,
        });
    }

    None
}
