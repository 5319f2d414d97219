//! Data models for METAR analysis
//!
//! This module contains the core data structures for decoded reports,
//! derived wind components, minima assessments, and trend summaries.
//! Every decoded field except the station identifier is independently
//! optional: absence of an observation is always modeled as `None`,
//! never as a zero or sentinel value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::sky_cover;

// =============================================================================
// Decoded Report
// =============================================================================

/// One decoded surface weather report
///
/// Produced by the decoder service from a single raw report line. Decoding
/// is best-effort: a field whose token grammar does not match anywhere in
/// the report is absent, and absence is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedMetar {
    /// Station identifier (token 0 of the report; free text)
    pub station: String,

    /// Raw time group ("011651Z"), kept as encoded text for display
    pub timestamp: Option<String>,

    /// Decoded wind group
    pub wind: Option<Wind>,

    /// Prevailing visibility in statute miles
    pub visibility_sm: Option<f64>,

    /// Lowest broken/overcast/indefinite layer
    pub ceiling: Option<Ceiling>,

    /// Plain-language significant weather labels, deduplicated
    pub weather: Vec<String>,
}

/// Decoded wind group
///
/// A calm report ("00000KT") decodes to a zero speed with direction zero;
/// a variable-direction report ("VRB05KT") has no direction at all. Both
/// are distinct from wind being absent from the report entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind direction in degrees, taken literally from the report
    ///
    /// `None` for variable-direction wind.
    pub direction_deg: Option<u16>,

    /// Sustained speed in knots
    pub speed_kt: u16,

    /// Gust speed in knots, when reported
    pub gust_kt: Option<u16>,
}

impl Wind {
    /// Whether the direction is variable (no component decomposition exists)
    pub fn is_variable(&self) -> bool {
        self.direction_deg.is_none()
    }
}

/// Lowest ceiling-defining cloud layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ceiling {
    /// Layer height in feet above ground
    pub height_ft: u32,

    /// Sky cover classification that produced this ceiling
    pub layer: SkyCover,
}

/// Sky cover classifications that define a ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkyCover {
    /// Broken layer (BKN)
    #[serde(rename = "BKN")]
    Broken,

    /// Overcast layer (OVC)
    #[serde(rename = "OVC")]
    Overcast,

    /// Indefinite ceiling reported as vertical visibility (VV)
    #[serde(rename = "VV")]
    VerticalVisibility,
}

impl SkyCover {
    /// Report token prefix for this classification
    pub fn code(&self) -> &'static str {
        match self {
            SkyCover::Broken => sky_cover::BROKEN,
            SkyCover::Overcast => sky_cover::OVERCAST,
            SkyCover::VerticalVisibility => sky_cover::VERTICAL_VISIBILITY,
        }
    }

    /// Length of the prefix, which is where the height digits start
    pub fn prefix_len(&self) -> usize {
        self.code().len()
    }

    /// Match a token against the ceiling-defining prefixes
    pub fn match_token(token: &str) -> Option<SkyCover> {
        if token.starts_with(sky_cover::BROKEN) {
            Some(SkyCover::Broken)
        } else if token.starts_with(sky_cover::OVERCAST) {
            Some(SkyCover::Overcast)
        } else if token.starts_with(sky_cover::VERTICAL_VISIBILITY) {
            Some(SkyCover::VerticalVisibility)
        } else {
            None
        }
    }
}

impl fmt::Display for SkyCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Derived Values
// =============================================================================

/// Wind projected onto a runway alignment
///
/// Headwind is negative for a tailwind. The crosswind value is kept as
/// computed; display layers take the absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindComponents {
    /// Parallel component in knots
    pub headwind_kt: f64,

    /// Perpendicular component in knots
    pub crosswind_kt: f64,
}

/// A single minima threshold violation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The configured threshold that was compared against
    pub limit: f64,

    /// The observed (or computed) value that violated it
    pub observed: f64,
}

/// Per-category minima assessment for one report
///
/// Categories are evaluated independently; an absent field never produces
/// a violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MinimaAssessment {
    /// Visibility below the configured minimum
    pub visibility: Option<Violation>,

    /// Ceiling below the configured minimum
    pub ceiling: Option<Violation>,

    /// Crosswind component above the configured maximum
    pub crosswind: Option<Violation>,
}

impl MinimaAssessment {
    /// Whether no category violated its threshold
    pub fn is_clear(&self) -> bool {
        self.visibility.is_none() && self.ceiling.is_none() && self.crosswind.is_none()
    }
}

// =============================================================================
// Trend Summary
// =============================================================================

/// Qualitative direction of change between the oldest and latest report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendState {
    Improving,
    Worsening,
    Steady,
}

impl fmt::Display for TrendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            TrendState::Improving => "improving",
            TrendState::Worsening => "worsening",
            TrendState::Steady => "steady",
        };
        f.write_str(word)
    }
}

/// Endpoint values and classification for one trended field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldTrend {
    pub from: f64,
    pub to: f64,
    pub state: TrendState,
}

/// Wind direction change between the oldest and latest report
///
/// Direction has no better/worse polarity, so only the raw shift is
/// reported, never a qualitative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionShift {
    pub from_deg: u16,
    pub to_deg: u16,
}

impl DirectionShift {
    /// Signed shift in degrees, latest minus oldest
    pub fn shift_deg(&self) -> i32 {
        i32::from(self.to_deg) - i32::from(self.from_deg)
    }
}

/// Trend across an ordered report sequence, oldest to latest
///
/// A field absent at either endpoint is omitted entirely rather than
/// defaulted to steady.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub visibility: Option<FieldTrend>,
    pub ceiling: Option<FieldTrend>,
    pub wind_direction: Option<DirectionShift>,
}

impl TrendSummary {
    /// Whether no field was comparable across the sequence
    pub fn is_empty(&self) -> bool {
        self.visibility.is_none() && self.ceiling.is_none() && self.wind_direction.is_none()
    }
}

// =============================================================================
// Analysis Bundles
// =============================================================================

/// One report with everything derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetarAnalysis {
    /// The raw report line as received
    pub raw: String,

    /// Decoded fields
    pub decoded: DecodedMetar,

    /// Wind components, when a runway heading was set and the wind
    /// direction was not variable
    pub components: Option<WindComponents>,

    /// Minima assessment for this report
    pub assessment: MinimaAssessment,
}

/// A complete briefing: analyzed reports plus the cross-report trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Briefing {
    /// Analyzed reports in the order supplied (oldest first)
    pub reports: Vec<MetarAnalysis>,

    /// Trend summary, present only when two or more reports were supplied
    pub trend: Option<TrendSummary>,

    /// Opaque forecast text passed through unmodified, never decoded
    pub forecast: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sky_cover_codes() {
        assert_eq!(SkyCover::Broken.code(), "BKN");
        assert_eq!(SkyCover::Overcast.code(), "OVC");
        assert_eq!(SkyCover::VerticalVisibility.code(), "VV");
        assert_eq!(SkyCover::VerticalVisibility.prefix_len(), 2);
    }

    #[test]
    fn test_sky_cover_token_matching() {
        assert_eq!(SkyCover::match_token("BKN025"), Some(SkyCover::Broken));
        assert_eq!(SkyCover::match_token("OVC008"), Some(SkyCover::Overcast));
        assert_eq!(
            SkyCover::match_token("VV004"),
            Some(SkyCover::VerticalVisibility)
        );
        assert_eq!(SkyCover::match_token("FEW030"), None);
        assert_eq!(SkyCover::match_token("SCT040"), None);
    }

    #[test]
    fn test_wind_variable_flag() {
        let variable = Wind {
            direction_deg: None,
            speed_kt: 5,
            gust_kt: None,
        };
        assert!(variable.is_variable());

        let calm = Wind {
            direction_deg: Some(0),
            speed_kt: 0,
            gust_kt: None,
        };
        assert!(!calm.is_variable());
    }

    #[test]
    fn test_assessment_is_clear() {
        let assessment = MinimaAssessment::default();
        assert!(assessment.is_clear());

        let flagged = MinimaAssessment {
            crosswind: Some(Violation {
                limit: 15.0,
                observed: 17.3,
            }),
            ..MinimaAssessment::default()
        };
        assert!(!flagged.is_clear());
    }

    #[test]
    fn test_direction_shift_is_signed() {
        let shift = DirectionShift {
            from_deg: 220,
            to_deg: 180,
        };
        assert_eq!(shift.shift_deg(), -40);

        let shift = DirectionShift {
            from_deg: 180,
            to_deg: 220,
        };
        assert_eq!(shift.shift_deg(), 40);
    }

    #[test]
    fn test_trend_summary_empty() {
        assert!(TrendSummary::default().is_empty());
    }
}
