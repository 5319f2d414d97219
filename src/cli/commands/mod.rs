//! Command implementations for the METAR analyzer CLI
//!
//! This module contains the main command execution logic. Each command is
//! implemented in its own module, with shared logging setup and briefing
//! output plumbing in [`shared`].

pub mod decode;
pub mod shared;
pub mod station;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the METAR analyzer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `decode`: analyze raw METAR text supplied on the command line
/// - `station`: fetch current or historical reports from NOAA and analyze
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Decode(decode_args) => decode::run_decode(decode_args).await,
        Commands::Station(station_args) => station::run_station(station_args).await,
    }
}
