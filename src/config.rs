//! Configuration for minima evaluation and wind component computation.
//!
//! Provides the personal minima thresholds and the analysis configuration
//! assembled from CLI arguments. Both are immutable for the duration of a
//! run; every analysis invocation receives them by reference.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_CROSSWIND_KT, DEFAULT_MIN_CEILING_FT, DEFAULT_MIN_VISIBILITY_SM};
use crate::{Error, Result};

/// Pilot-supplied personal minima thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Minima {
    /// Minimum acceptable ceiling in feet
    pub min_ceiling_ft: f64,

    /// Minimum acceptable visibility in statute miles
    pub min_visibility_sm: f64,

    /// Maximum acceptable crosswind component in knots
    pub max_crosswind_kt: f64,
}

impl Default for Minima {
    fn default() -> Self {
        Self {
            min_ceiling_ft: DEFAULT_MIN_CEILING_FT,
            min_visibility_sm: DEFAULT_MIN_VISIBILITY_SM,
            max_crosswind_kt: DEFAULT_MAX_CROSSWIND_KT,
        }
    }
}

impl Minima {
    /// Validate thresholds for consistency
    pub fn validate(&self) -> Result<()> {
        if self.min_ceiling_ft < 0.0 {
            return Err(Error::configuration(format!(
                "minimum ceiling must be non-negative, got {}",
                self.min_ceiling_ft
            )));
        }

        if self.min_visibility_sm < 0.0 {
            return Err(Error::configuration(format!(
                "minimum visibility must be non-negative, got {}",
                self.min_visibility_sm
            )));
        }

        if self.max_crosswind_kt < 0.0 {
            return Err(Error::configuration(format!(
                "maximum crosswind must be non-negative, got {}",
                self.max_crosswind_kt
            )));
        }

        Ok(())
    }
}

/// Global configuration for one analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Thresholds for minima evaluation
    pub minima: Minima,

    /// Magnetic runway heading in degrees
    ///
    /// `None` suppresses wind component computation. A heading of zero is
    /// not a valid magnetic heading in this domain and is rejected by
    /// validation rather than treated as a value.
    pub runway_heading_deg: Option<u32>,
}

impl AnalysisConfig {
    /// Create configuration with custom minima
    pub fn with_minima(mut self, minima: Minima) -> Self {
        self.minima = minima;
        self
    }

    /// Create configuration with a runway heading
    pub fn with_runway_heading(mut self, heading_deg: u32) -> Self {
        self.runway_heading_deg = Some(heading_deg);
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        self.minima.validate()?;

        if let Some(heading) = self.runway_heading_deg {
            if heading == 0 {
                return Err(Error::configuration(
                    "runway heading 0 means unset; omit the heading instead".to_string(),
                ));
            }

            if heading > 360 {
                return Err(Error::configuration(format!(
                    "runway heading must be within 1-360 degrees, got {}",
                    heading
                )));
            }
        }

        Ok(())
    }
}
