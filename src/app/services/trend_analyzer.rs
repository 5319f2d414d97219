//! Trend analysis across an ordered report sequence
//!
//! Compares the oldest and latest decoded reports field by field. The
//! ordering (oldest first) and deduplication are the acquisition layer's
//! responsibility; this analyzer trusts the sequence it is given and does
//! not re-sort.

use crate::app::models::{
    DecodedMetar, DirectionShift, FieldTrend, TrendState, TrendSummary,
};
use crate::constants::{TREND_MIN_REPORTS, TREND_TOLERANCE};

/// Summarize the trend across a report sequence, oldest to latest
///
/// Returns `None` for fewer than two reports: no trend exists, which is
/// not the same as "no change observed". A field absent at either endpoint
/// is omitted from the summary rather than defaulted to steady.
pub fn summarize(reports: &[DecodedMetar]) -> Option<TrendSummary> {
    if reports.len() < TREND_MIN_REPORTS {
        return None;
    }

    let first = reports.first()?;
    let last = reports.last()?;

    let visibility = first
        .visibility_sm
        .zip(last.visibility_sm)
        .map(|(from, to)| FieldTrend {
            from,
            to,
            state: classify(to - from),
        });

    let ceiling = first
        .ceiling
        .zip(last.ceiling)
        .map(|(from, to)| FieldTrend {
            from: f64::from(from.height_ft),
            to: f64::from(to.height_ft),
            state: classify(f64::from(to.height_ft) - f64::from(from.height_ft)),
        });

    let wind_direction = direction_of(first)
        .zip(direction_of(last))
        .map(|(from_deg, to_deg)| DirectionShift { from_deg, to_deg });

    Some(TrendSummary {
        visibility,
        ceiling,
        wind_direction,
    })
}

/// Classify a delta against the steadiness tolerance
///
/// Higher visibility and higher ceilings are better, so a positive delta
/// is improving for both trended fields.
pub fn classify(delta: f64) -> TrendState {
    if delta > TREND_TOLERANCE {
        TrendState::Improving
    } else if delta < -TREND_TOLERANCE {
        TrendState::Worsening
    } else {
        TrendState::Steady
    }
}

fn direction_of(report: &DecodedMetar) -> Option<u16> {
    report.wind.as_ref().and_then(|wind| wind.direction_deg)
}
