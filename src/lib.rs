//! METAR Analyzer Library
//!
//! A Rust library for decoding aviation routine weather reports (METARs)
//! into structured fields and evaluating them against pilot-supplied
//! personal minima.
//!
//! This library provides tools for:
//! - Decoding wind, visibility, ceiling, and significant-weather groups
//!   from raw report text with best-effort, field-by-field semantics
//! - Computing headwind and crosswind components for a runway heading
//! - Flagging visibility, ceiling, and crosswind minima violations
//! - Summarizing the trend across an ordered sequence of reports
//! - Rendering briefings as human-readable text or a JSON document
//! - Fetching current and historical reports from the NOAA text service

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod briefing;
        pub mod metar_decoder;
        pub mod minima_evaluator;
        pub mod report_renderer;
        pub mod trend_analyzer;
        pub mod wind_components;
    }
    pub mod adapters {
        pub mod noaa;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Briefing, DecodedMetar, MetarAnalysis, TrendSummary, Wind, WindComponents};
pub use config::{AnalysisConfig, Minima};

/// Result type alias for the METAR analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for METAR analysis operations
///
/// Decoder non-matches are not errors: a report field that fails to match
/// its token grammar decodes to an absent value. The variants here cover
/// the fatal no-input condition, configuration validation, acquisition
/// failures, and output serialization.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No report text was supplied or fetched
    #[error("no METAR reports provided or fetched")]
    NoReports,

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Report acquisition failed
    #[error("fetch error for {station}: {message}")]
    Fetch {
        station: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// JSON document serialization failed
    #[error("serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a fetch error with context
    pub fn fetch(
        station: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Fetch {
            station: station.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Fetch {
            station: "unknown".to_string(),
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
