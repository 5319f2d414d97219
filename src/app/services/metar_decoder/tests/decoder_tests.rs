//! Tests for decode orchestration over whole reports

use crate::app::models::SkyCover;
use crate::app::services::metar_decoder::decode;

#[test]
fn test_full_report() {
    let decoded = decode("KJFK 011651Z 18012G18KT 10SM BKN025 OVC035 18/12 A2992");

    assert_eq!(decoded.station, "KJFK");
    assert_eq!(decoded.timestamp.as_deref(), Some("011651Z"));

    let wind = decoded.wind.unwrap();
    assert_eq!(wind.direction_deg, Some(180));
    assert_eq!(wind.speed_kt, 12);
    assert_eq!(wind.gust_kt, Some(18));

    assert_eq!(decoded.visibility_sm, Some(10.0));

    let ceiling = decoded.ceiling.unwrap();
    assert_eq!(ceiling.height_ft, 2500);
    assert_eq!(ceiling.layer, SkyCover::Broken);

    assert!(decoded.weather.is_empty());
}

#[test]
fn test_lowercase_input_is_normalized() {
    let decoded = decode("kjfk 011651z 18012kt 10sm bkn025");
    assert_eq!(decoded.station, "KJFK");
    assert_eq!(decoded.timestamp.as_deref(), Some("011651Z"));
    assert!(decoded.wind.is_some());
}

#[test]
fn test_station_only_report() {
    let decoded = decode("EGLL");
    assert_eq!(decoded.station, "EGLL");
    assert_eq!(decoded.timestamp, None);
    assert_eq!(decoded.wind, None);
    assert_eq!(decoded.visibility_sm, None);
    assert_eq!(decoded.ceiling, None);
    assert!(decoded.weather.is_empty());
}

#[test]
fn test_empty_report() {
    let decoded = decode("");
    assert_eq!(decoded.station, "");
    assert_eq!(decoded.timestamp, None);
}

#[test]
fn test_second_token_must_look_like_a_time_group() {
    // Too short, or missing the zulu marker
    assert_eq!(decode("KJFK 16Z 10SM").timestamp, None);
    assert_eq!(decode("KJFK 011651 10SM").timestamp, None);

    // A well-formed group is kept as raw text
    assert_eq!(
        decode("KJFK 011651Z 10SM").timestamp.as_deref(),
        Some("011651Z")
    );
}

#[test]
fn test_fields_decode_independently() {
    // Missing wind must not affect visibility or ceiling decoding
    let decoded = decode("KSFO 021756Z 1 1/2SM BR VV004");
    assert_eq!(decoded.wind, None);
    assert_eq!(decoded.visibility_sm, Some(1.5));
    assert_eq!(
        decoded.ceiling.unwrap().layer,
        SkyCover::VerticalVisibility
    );
    assert_eq!(decoded.weather, vec!["mist"]);
}

#[test]
fn test_unknown_tokens_are_ignored_not_rejected() {
    let decoded = decode("KJFK 011651Z 18012KT 10SM BKN025 RMK AO2 SLP132");
    assert_eq!(decoded.station, "KJFK");
    assert_eq!(decoded.visibility_sm, Some(10.0));
    assert!(decoded.ceiling.is_some());
}
