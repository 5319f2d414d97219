//! NOAA aviation weather text-service client
//!
//! Retrieves raw METAR text from the NWS file server. Two products are
//! used: the per-station latest-observation file, and the hourly cycle
//! files that collectively hold roughly the last day of reports for every
//! station.
//!
//! Latest observation: `.../stations/{ICAO}.TXT`
//! Hourly cycles:      `.../cycles/{HH}Z.TXT`
//!
//! Acquisition owns its own timeout policy; the analysis core never sees a
//! failed fetch, only raw report strings or a definitive error.

use chrono::{Duration, Timelike, Utc};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::constants::{
    FETCH_TIMEOUT_SECS, HISTORY_LOOKBACK_HOURS, STATION_ID_MIN_LEN, cycle_report_url,
    station_report_url,
};
use crate::{Error, Result};

/// Build the HTTP client used for all NOAA requests
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|error| Error::fetch("client", "failed to build HTTP client", Some(error)))
}

/// Fetch the latest report for a station
///
/// The station file carries a timestamp line followed by the report; the
/// last non-empty line is the observation.
pub async fn fetch_latest(client: &Client, station_id: &str) -> Result<String> {
    let station = normalize_station_id(station_id)?;
    let body = get_text(client, &station, &station_report_url(&station)).await?;

    latest_report_line(&body)
        .ok_or_else(|| Error::fetch(&station, "empty observation file", None))
}

/// Fetch one hourly cycle file and keep the station's reports
pub async fn fetch_cycle(client: &Client, station: &str, hour_utc: u32) -> Result<Vec<String>> {
    let body = get_text(client, station, &cycle_report_url(hour_utc)).await?;
    Ok(station_lines(&body, station))
}

/// Collect up to `desired_count` distinct historical reports for a station
///
/// Walks hourly cycle files backwards from the current UTC hour. Discovery
/// is newest-first, so the collected list is reversed before returning to
/// satisfy the oldest-first ordering the trend analyzer relies on.
/// Duplicate reports across cycle files are dropped.
pub async fn fetch_history(
    client: &Client,
    station_id: &str,
    desired_count: usize,
) -> Result<Vec<String>> {
    let station = normalize_station_id(station_id)?;
    let mut collected: Vec<String> = Vec::new();
    let now = Utc::now();

    for back in 0..HISTORY_LOOKBACK_HOURS {
        if collected.len() >= desired_count {
            break;
        }

        let hour = (now - Duration::hours(back)).hour();
        match fetch_cycle(client, &station, hour).await {
            Ok(reports) => {
                for report in reports {
                    if collected.len() >= desired_count {
                        break;
                    }
                    if !collected.contains(&report) {
                        collected.push(report);
                    }
                }
            }
            Err(error) => {
                warn!(%station, hour, %error, "cycle fetch failed, skipping hour");
            }
        }
    }

    collected.reverse();

    if collected.is_empty() {
        return Err(Error::fetch(&station, "no historical reports found", None));
    }

    info!(%station, reports = collected.len(), "collected report history");
    Ok(collected)
}

/// Upper-case and sanity-check a station identifier
fn normalize_station_id(station_id: &str) -> Result<String> {
    let station = station_id.trim().to_uppercase();
    if station.len() < STATION_ID_MIN_LEN {
        return Err(Error::configuration(format!(
            "station identifier '{}' is too short",
            station_id
        )));
    }
    Ok(station)
}

/// Last non-empty line of a station observation file
fn latest_report_line(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
        .map(str::to_string)
}

/// Lines of a cycle file whose first token is the station
fn station_lines(body: &str, station: &str) -> Vec<String> {
    let prefix = format!("{} ", station);
    body.lines()
        .map(str::trim)
        .filter(|line| line.starts_with(&prefix))
        .map(str::to_string)
        .collect()
}

async fn get_text(client: &Client, station: &str, url: &str) -> Result<String> {
    debug!(url, "requesting NOAA text product");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|error| Error::fetch(station, format!("request to {} failed", url), Some(error)))?;

    if !response.status().is_success() {
        return Err(Error::fetch(
            station,
            format!("{} returned {}", url, response.status()),
            None,
        ));
    }

    response
        .text()
        .await
        .map_err(|error| Error::fetch(station, "failed to read response body", Some(error)))
}
