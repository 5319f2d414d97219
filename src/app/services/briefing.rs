//! Briefing assembly
//!
//! Orchestrates the decode → component → minima → trend pipeline over an
//! ordered batch of raw reports. Every invocation works from immutable
//! inputs and freshly allocated outputs; nothing persists between calls.

use tracing::debug;

use crate::app::models::{Briefing, DecodedMetar, MetarAnalysis};
use crate::app::services::{metar_decoder, minima_evaluator, trend_analyzer, wind_components};
use crate::config::AnalysisConfig;
use crate::{Error, Result};

/// Assemble a briefing from raw reports, oldest first
///
/// An empty report list is the only fatal condition in the core and is
/// rejected before any decoding happens. Individual reports are never
/// rejected; their unmatched fields simply decode to absent.
pub fn assemble(
    raws: &[String],
    forecast: Option<String>,
    config: &AnalysisConfig,
) -> Result<Briefing> {
    if raws.is_empty() {
        return Err(Error::NoReports);
    }

    let decoded: Vec<DecodedMetar> = raws.iter().map(|raw| metar_decoder::decode(raw)).collect();

    // Trend computation is order-sensitive, so it runs over the decoded
    // sequence exactly as supplied
    let trend = trend_analyzer::summarize(&decoded);
    debug!(
        reports = decoded.len(),
        trend = trend.is_some(),
        "assembling briefing"
    );

    let reports = raws
        .iter()
        .zip(decoded)
        .map(|(raw, decoded)| {
            let components = decoded
                .wind
                .as_ref()
                .and_then(|wind| wind_components::compute(wind, config.runway_heading_deg));
            let assessment =
                minima_evaluator::evaluate(&decoded, components.as_ref(), &config.minima);

            MetarAnalysis {
                raw: raw.clone(),
                decoded,
                components,
                assessment,
            }
        })
        .collect();

    Ok(Briefing {
        reports,
        trend,
        forecast,
    })
}
