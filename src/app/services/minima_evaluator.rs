//! Personal minima evaluation
//!
//! Compares one decoded report, and its wind components when computed,
//! against the configured thresholds. Each category is checked
//! independently, and an absent field never produces a violation: no data
//! means no flag, not a conservative failure.

use crate::app::models::{DecodedMetar, MinimaAssessment, Violation, WindComponents};
use crate::config::Minima;

/// Evaluate one report against the configured minima
///
/// Visibility and ceiling violate when strictly below their minimum; the
/// crosswind violates when its magnitude strictly exceeds the maximum.
/// When components were not computed the crosswind cannot be flagged,
/// regardless of the reported wind speed.
pub fn evaluate(
    metar: &DecodedMetar,
    components: Option<&WindComponents>,
    minima: &Minima,
) -> MinimaAssessment {
    let visibility = metar
        .visibility_sm
        .filter(|observed| *observed < minima.min_visibility_sm)
        .map(|observed| Violation {
            limit: minima.min_visibility_sm,
            observed,
        });

    let ceiling = metar
        .ceiling
        .map(|ceiling| f64::from(ceiling.height_ft))
        .filter(|observed| *observed < minima.min_ceiling_ft)
        .map(|observed| Violation {
            limit: minima.min_ceiling_ft,
            observed,
        });

    let crosswind = components
        .map(|components| components.crosswind_kt.abs())
        .filter(|observed| *observed > minima.max_crosswind_kt)
        .map(|observed| Violation {
            limit: minima.max_crosswind_kt,
            observed,
        });

    MinimaAssessment {
        visibility,
        ceiling,
        crosswind,
    }
}
