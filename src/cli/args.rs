//! Command-line argument definitions for the METAR analyzer
//!
//! Defines the CLI interface using the clap derive API. Analysis options
//! (minima, runway heading, output format) are shared by every subcommand
//! through a flattened argument group.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{AnalysisConfig, Minima};
use crate::constants::{
    DEFAULT_MAX_CROSSWIND_KT, DEFAULT_MIN_CEILING_FT, DEFAULT_MIN_VISIBILITY_SM,
    HISTORY_LOOKBACK_HOURS, STATION_ID_MIN_LEN,
};
use crate::{Error, Result};

/// CLI arguments for the METAR analyzer
///
/// Decodes aviation routine weather reports, evaluates them against
/// personal minima, and computes wind components for a runway heading.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-analyzer",
    version,
    about = "Decode METARs, check personal minima, and compute runway wind components",
    long_about = "Decodes aviation routine weather reports (METARs) into structured fields, \
                  evaluates visibility, ceiling, and crosswind against pilot-supplied personal \
                  minima, and summarizes the trend across an ordered report sequence. Reports \
                  can be supplied as raw text or fetched from the NOAA text service by station."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the METAR analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze raw METAR text supplied on the command line
    Decode(DecodeArgs),
    /// Fetch and analyze current or historical reports by station
    Station(StationArgs),
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Raw METAR report text
    ///
    /// Repeat the flag to supply a sequence for trend analysis; order is
    /// oldest first and is taken as given.
    #[arg(
        short = 'm',
        long = "metar",
        value_name = "RAW",
        required = true,
        help = "Raw METAR report text (repeat for a trend sequence, oldest first)"
    )]
    pub metars: Vec<String>,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Arguments for the station command
#[derive(Debug, Clone, Parser)]
pub struct StationArgs {
    /// ICAO station identifiers to fetch (e.g. KJFK EGLL)
    #[arg(value_name = "ICAO", required = true)]
    pub stations: Vec<String>,

    /// Number of historical reports to collect per station
    ///
    /// With the default of 1 only the latest observation is fetched; a
    /// larger count walks the hourly cycle files backwards and returns the
    /// reports oldest first for trend analysis.
    #[arg(
        long = "history",
        value_name = "COUNT",
        default_value_t = 1,
        help = "Number of historical reports to fetch per station"
    )]
    pub history: usize,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Analysis options shared by every subcommand
#[derive(Debug, Clone, clap::Args)]
pub struct AnalysisArgs {
    /// Magnetic runway heading in degrees for wind component computation
    ///
    /// Omit to skip component computation; 0 is not a valid heading.
    #[arg(
        long = "runway",
        value_name = "DEG",
        help = "Magnetic runway heading in degrees for crosswind computation"
    )]
    pub runway: Option<u32>,

    /// Minimum acceptable ceiling in feet
    #[arg(
        long = "min-ceiling",
        value_name = "FT",
        default_value_t = DEFAULT_MIN_CEILING_FT,
        help = "Minimum acceptable ceiling in feet"
    )]
    pub min_ceiling_ft: f64,

    /// Minimum acceptable visibility in statute miles
    #[arg(
        long = "min-vis",
        value_name = "SM",
        default_value_t = DEFAULT_MIN_VISIBILITY_SM,
        help = "Minimum acceptable visibility in statute miles"
    )]
    pub min_visibility_sm: f64,

    /// Maximum acceptable crosswind component in knots
    #[arg(
        long = "max-xwind",
        value_name = "KT",
        default_value_t = DEFAULT_MAX_CROSSWIND_KT,
        help = "Maximum acceptable crosswind component in knots"
    )]
    pub max_crosswind_kt: f64,

    /// Raw TAF text echoed alongside the analysis, never decoded
    #[arg(
        short = 't',
        long = "taf",
        value_name = "RAW",
        help = "Raw TAF text echoed alongside the analysis"
    )]
    pub taf: Option<String>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for the briefing"
    )]
    pub format: ReportFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the briefing
#[derive(Debug, Clone, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text blocks
    Text,
    /// JSON document for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl AnalysisArgs {
    /// Validate the shared analysis options for consistency
    pub fn validate(&self) -> Result<()> {
        self.to_config().validate()
    }

    /// Assemble the analysis configuration from these options
    pub fn to_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            minima: Minima {
                min_ceiling_ft: self.min_ceiling_ft,
                min_visibility_sm: self.min_visibility_sm,
                max_crosswind_kt: self.max_crosswind_kt,
            },
            runway_heading_deg: self.runway,
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl DecodeArgs {
    /// Validate the decode command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()
    }
}

impl StationArgs {
    /// Validate the station command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()?;

        if self.history == 0 {
            return Err(Error::configuration(
                "history count must be at least 1".to_string(),
            ));
        }

        if self.history > HISTORY_LOOKBACK_HOURS as usize {
            return Err(Error::configuration(format!(
                "history count cannot exceed the {}-hour lookback window",
                HISTORY_LOOKBACK_HOURS
            )));
        }

        for station in &self.stations {
            if station.trim().len() < STATION_ID_MIN_LEN {
                return Err(Error::configuration(format!(
                    "station identifier '{}' is too short",
                    station
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).expect("arguments should parse")
    }

    #[test]
    fn test_decode_command_parsing() {
        let args = parse(&[
            "metar-analyzer",
            "decode",
            "--metar",
            "KJFK 011651Z 18012KT 10SM",
            "--metar",
            "KJFK 011751Z 19015KT 8SM",
            "--runway",
            "220",
        ]);

        let Commands::Decode(decode) = args.get_command() else {
            panic!("expected decode command");
        };
        assert_eq!(decode.metars.len(), 2);
        assert_eq!(decode.analysis.runway, Some(220));
        assert!(decode.validate().is_ok());
    }

    #[test]
    fn test_decode_requires_a_report() {
        assert!(Args::try_parse_from(["metar-analyzer", "decode"]).is_err());
    }

    #[test]
    fn test_station_command_parsing() {
        let args = parse(&[
            "metar-analyzer",
            "station",
            "KJFK",
            "EGLL",
            "--history",
            "4",
            "--format",
            "json",
        ]);

        let Commands::Station(station) = args.get_command() else {
            panic!("expected station command");
        };
        assert_eq!(station.stations, vec!["KJFK", "EGLL"]);
        assert_eq!(station.history, 4);
        assert!(station.validate().is_ok());
    }

    #[test]
    fn test_minima_defaults() {
        let args = parse(&["metar-analyzer", "decode", "--metar", "KJFK 011651Z"]);
        let Commands::Decode(decode) = args.get_command() else {
            panic!("expected decode command");
        };

        let config = decode.analysis.to_config();
        assert_eq!(config.minima.min_ceiling_ft, 1000.0);
        assert_eq!(config.minima.min_visibility_sm, 3.0);
        assert_eq!(config.minima.max_crosswind_kt, 15.0);
        assert_eq!(config.runway_heading_deg, None);
    }

    #[test]
    fn test_runway_zero_is_rejected() {
        let args = parse(&[
            "metar-analyzer",
            "decode",
            "--metar",
            "KJFK 011651Z",
            "--runway",
            "0",
        ]);
        let Commands::Decode(decode) = args.get_command() else {
            panic!("expected decode command");
        };
        assert!(decode.validate().is_err());
    }

    #[test]
    fn test_negative_minima_are_rejected() {
        let args = parse(&[
            "metar-analyzer",
            "decode",
            "--metar",
            "KJFK 011651Z",
            "--min-vis=-1",
        ]);
        let Commands::Decode(decode) = args.get_command() else {
            panic!("expected decode command");
        };
        assert!(decode.validate().is_err());
    }

    #[test]
    fn test_station_history_bounds() {
        let args = parse(&["metar-analyzer", "station", "KJFK", "--history", "0"]);
        let Commands::Station(station) = args.get_command() else {
            panic!("expected station command");
        };
        assert!(station.validate().is_err());

        let args = parse(&["metar-analyzer", "station", "KJFK", "--history", "49"]);
        let Commands::Station(station) = args.get_command() else {
            panic!("expected station command");
        };
        assert!(station.validate().is_err());
    }

    #[test]
    fn test_short_station_id_is_rejected() {
        let args = parse(&["metar-analyzer", "station", "JF"]);
        let Commands::Station(station) = args.get_command() else {
            panic!("expected station command");
        };
        assert!(station.validate().is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        let args = parse(&["metar-analyzer", "decode", "--metar", "KJFK", "-vv"]);
        let Commands::Decode(decode) = args.get_command() else {
            panic!("expected decode command");
        };
        assert_eq!(decode.analysis.get_log_level(), "debug");
        assert_eq!(
            AnalysisArgs {
                verbose: 0,
                ..decode.analysis
            }
            .get_log_level(),
            "warn"
        );
    }
}
