//! Station command implementation
//!
//! Fetches reports from the NOAA text service by station identifier and
//! feeds them into the shared analysis path. A station that fails to
//! fetch is reported and skipped; the run only fails when no report could
//! be acquired at all.

use tracing::{info, warn};

use super::shared;
use crate::Result;
use crate::app::adapters::noaa;
use crate::cli::args::StationArgs;

/// Run the station command
pub async fn run_station(args: StationArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.analysis.get_log_level());

    let client = noaa::build_client()?;
    let mut raws: Vec<String> = Vec::new();

    for station in &args.stations {
        if args.history > 1 {
            match noaa::fetch_history(&client, station, args.history).await {
                Ok(mut reports) => {
                    info!(%station, reports = reports.len(), "fetched report history");
                    raws.append(&mut reports);
                }
                Err(error) => {
                    warn!(%station, %error, "failed to fetch report history");
                    eprintln!("Failed to fetch historical METARs for {}", station);
                }
            }
        } else {
            match noaa::fetch_latest(&client, station).await {
                Ok(report) => {
                    info!(%station, "fetched latest report");
                    raws.push(report);
                }
                Err(error) => {
                    warn!(%station, %error, "failed to fetch latest report");
                    eprintln!("Failed to fetch METAR for {}", station);
                }
            }
        }
    }

    shared::analyze_and_emit(&raws, &args.analysis)
}
