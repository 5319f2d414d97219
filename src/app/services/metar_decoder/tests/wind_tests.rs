//! Tests for wind group decoding

use super::tokens_of;
use crate::app::services::metar_decoder::wind::decode_wind;

#[test]
fn test_directional_wind() {
    let wind = decode_wind(&tokens_of("KJFK 011651Z 19015KT 10SM")).unwrap();
    assert_eq!(wind.direction_deg, Some(190));
    assert_eq!(wind.speed_kt, 15);
    assert_eq!(wind.gust_kt, None);
}

#[test]
fn test_gusting_wind() {
    let wind = decode_wind(&tokens_of("18012G18KT")).unwrap();
    assert_eq!(wind.direction_deg, Some(180));
    assert_eq!(wind.speed_kt, 12);
    assert_eq!(wind.gust_kt, Some(18));
}

#[test]
fn test_variable_wind_has_no_direction() {
    let wind = decode_wind(&tokens_of("VRB05KT")).unwrap();
    assert!(wind.is_variable());
    assert_eq!(wind.speed_kt, 5);
}

#[test]
fn test_calm_wind_is_an_observation() {
    // Zero speed is a valid observation, distinct from wind being absent
    let wind = decode_wind(&tokens_of("00000KT")).unwrap();
    assert_eq!(wind.direction_deg, Some(0));
    assert_eq!(wind.speed_kt, 0);
}

#[test]
fn test_three_digit_speed_and_gust() {
    let wind = decode_wind(&tokens_of("240105G120KT")).unwrap();
    assert_eq!(wind.direction_deg, Some(240));
    assert_eq!(wind.speed_kt, 105);
    assert_eq!(wind.gust_kt, Some(120));
}

#[test]
fn test_no_wind_token_decodes_to_absent() {
    assert_eq!(decode_wind(&tokens_of("KJFK 011651Z 10SM BKN025")), None);
}

#[test]
fn test_malformed_wind_tokens_are_ignored() {
    // Wrong unit, missing digits, and embedded junk must not match
    assert_eq!(decode_wind(&tokens_of("18012MPS")), None);
    assert_eq!(decode_wind(&tokens_of("1801KT")), None);
    assert_eq!(decode_wind(&tokens_of("18012G-KT")), None);
}

#[test]
fn test_first_matching_token_wins() {
    let wind = decode_wind(&tokens_of("27010KT 18020KT")).unwrap();
    assert_eq!(wind.direction_deg, Some(270));
    assert_eq!(wind.speed_kt, 10);
}

#[test]
fn test_numeric_payload_round_trips() {
    // Re-encoding the decoded numbers reproduces the original token
    for raw in ["19015KT", "04008KT", "36025G40KT"] {
        let wind = decode_wind(&tokens_of(raw)).unwrap();
        let mut encoded = format!(
            "{:03}{:02}",
            wind.direction_deg.unwrap(),
            wind.speed_kt
        );
        if let Some(gust) = wind.gust_kt {
            encoded.push_str(&format!("G{:02}", gust));
        }
        encoded.push_str("KT");
        assert_eq!(encoded, raw);
    }
}
