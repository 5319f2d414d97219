//! Application constants for the METAR analyzer
//!
//! This module contains the report token grammar, the significant-weather
//! code table, personal minima defaults, and NOAA text-service endpoints
//! used throughout the application.

// =============================================================================
// Report Token Grammar
// =============================================================================

/// Wind group speed unit suffix (knots)
pub const SPEED_UNIT_SUFFIX: &str = "KT";

/// Wind group marker for variable-direction wind
pub const VARIABLE_WIND_MARKER: &str = "VRB";

/// Visibility group distance unit suffix (statute miles)
pub const VISIBILITY_UNIT_SUFFIX: &str = "SM";

/// Final character of a report time group (zulu marker)
pub const TIME_GROUP_SUFFIX: char = 'Z';

/// Minimum length of a plausible time group token ("ddhhZ" at the shortest)
pub const TIME_GROUP_MIN_LEN: usize = 5;

/// Sky-cover prefixes that define a ceiling
pub mod sky_cover {
    /// Broken layer (5-7 oktas)
    pub const BROKEN: &str = "BKN";

    /// Overcast layer (8 oktas)
    pub const OVERCAST: &str = "OVC";

    /// Indefinite ceiling, reported as vertical visibility
    pub const VERTICAL_VISIBILITY: &str = "VV";
}

/// Number of digits in a sky-cover height group
pub const CEILING_HEIGHT_DIGITS: usize = 3;

/// Sky-cover heights are encoded in hundreds of feet
pub const CEILING_HEIGHT_SCALE_FT: u32 = 100;

// =============================================================================
// Significant Weather Codes
// =============================================================================

/// Phenomenon code to plain-language label table
///
/// Codes are matched as substrings anywhere inside a token, so intensity
/// prefixes and combined groups ("+TSRA") resolve to every phenomenon they
/// contain. The table is a plain ordered slice and is iterated in order,
/// which keeps the decoded label ordering reproducible.
pub const WEATHER_CODES: &[(&str, &str)] = &[
    ("BR", "mist"),
    ("DZ", "drizzle"),
    ("FG", "fog"),
    ("FU", "smoke"),
    ("HZ", "haze"),
    ("PL", "ice pellets"),
    ("RA", "rain"),
    ("SG", "snow grains"),
    ("SH", "showers"),
    ("SN", "snow"),
    ("TS", "thunderstorm"),
];

// =============================================================================
// Personal Minima Defaults
// =============================================================================

/// Default minimum acceptable ceiling in feet
pub const DEFAULT_MIN_CEILING_FT: f64 = 1000.0;

/// Default minimum acceptable visibility in statute miles
pub const DEFAULT_MIN_VISIBILITY_SM: f64 = 3.0;

/// Default maximum acceptable crosswind component in knots
pub const DEFAULT_MAX_CROSSWIND_KT: f64 = 15.0;

// =============================================================================
// Trend Analysis
// =============================================================================

/// Delta magnitude at or below which a field is reported as steady
pub const TREND_TOLERANCE: f64 = 0.05;

/// Minimum number of reports required for a trend summary
pub const TREND_MIN_REPORTS: usize = 2;

// =============================================================================
// NOAA Text Service
// =============================================================================

/// Base URL for NOAA METAR text products
pub const NOAA_BASE_URL: &str = "https://tgftp.nws.noaa.gov/data/observations/metar";

/// Per-request timeout in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 5;

/// How many hourly cycle files to walk back when collecting history
pub const HISTORY_LOOKBACK_HOURS: i64 = 48;

/// Shortest accepted station identifier
pub const STATION_ID_MIN_LEN: usize = 3;

// =============================================================================
// Helper Functions
// =============================================================================

/// Look up the plain-language label for a phenomenon code
pub fn weather_label(code: &str) -> Option<&'static str> {
    WEATHER_CODES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, label)| *label)
}

/// URL of the latest-observation file for a station
pub fn station_report_url(station_id: &str) -> String {
    format!("{}/stations/{}.TXT", NOAA_BASE_URL, station_id)
}

/// URL of the hourly cycle file for an UTC hour
pub fn cycle_report_url(hour_utc: u32) -> String {
    format!("{}/cycles/{:02}Z.TXT", NOAA_BASE_URL, hour_utc)
}
