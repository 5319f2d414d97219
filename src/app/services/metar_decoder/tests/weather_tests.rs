//! Tests for significant-weather decoding

use super::tokens_of;
use crate::app::services::metar_decoder::weather::decode_weather;

#[test]
fn test_single_phenomenon() {
    assert_eq!(decode_weather(&tokens_of("RA")), vec!["rain"]);
}

#[test]
fn test_combined_group_yields_every_phenomenon() {
    // "+TSRA" carries both a thunderstorm and rain
    let labels = decode_weather(&tokens_of("+TSRA"));
    assert!(labels.contains(&"rain".to_string()));
    assert!(labels.contains(&"thunderstorm".to_string()));
    assert_eq!(labels.len(), 2);
}

#[test]
fn test_intensity_prefix_does_not_block_matching() {
    assert_eq!(decode_weather(&tokens_of("-SHSN")), {
        vec!["showers".to_string(), "snow".to_string()]
    });
}

#[test]
fn test_duplicate_codes_insert_once() {
    let labels = decode_weather(&tokens_of("RA SHRA"));
    assert_eq!(
        labels.iter().filter(|label| *label == "rain").count(),
        1
    );
}

#[test]
fn test_clear_report_yields_empty_set() {
    let labels = decode_weather(&tokens_of("KJFK 011651Z 18012KT 10SM BKN025 18/12 A2992"));
    assert!(labels.is_empty());
}

#[test]
fn test_fog_and_mist() {
    let labels = decode_weather(&tokens_of("FG BR"));
    assert!(labels.contains(&"fog".to_string()));
    assert!(labels.contains(&"mist".to_string()));
}
