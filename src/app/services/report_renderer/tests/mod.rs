//! Test utilities for the briefing renderers

use crate::app::models::Briefing;
use crate::app::services::briefing;
use crate::config::AnalysisConfig;


/// Helper to assemble a briefing from raw report lines
pub fn briefing_for(raws: &[&str], config: &AnalysisConfig) -> Briefing {
    let raws: Vec<String> = raws.iter().map(|raw| raw.to_string()).collect();
    briefing::assemble(&raws, None, config).expect("test briefing should assemble")
}

/// A report that is comfortably above the default minima
pub const CLEAR_REPORT: &str = "KJFK 011651Z 18012G18KT 10SM BKN025 OVC035 18/12 A2992";

/// A report that is below the default visibility and ceiling minima
pub const POOR_REPORT: &str = "KJFK 011751Z 18025KT 1/2SM +TSRA OVC003 17/16 A2970";
