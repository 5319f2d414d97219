//! Tests for ceiling decoding

use super::tokens_of;
use crate::app::models::SkyCover;
use crate::app::services::metar_decoder::ceiling::decode_ceiling;

#[test]
fn test_broken_layer() {
    let ceiling = decode_ceiling(&tokens_of("BKN025")).unwrap();
    assert_eq!(ceiling.height_ft, 2500);
    assert_eq!(ceiling.layer, SkyCover::Broken);
}

#[test]
fn test_overcast_layer() {
    let ceiling = decode_ceiling(&tokens_of("OVC008")).unwrap();
    assert_eq!(ceiling.height_ft, 800);
    assert_eq!(ceiling.layer, SkyCover::Overcast);
}

#[test]
fn test_vertical_visibility_layer() {
    let ceiling = decode_ceiling(&tokens_of("VV004")).unwrap();
    assert_eq!(ceiling.height_ft, 400);
    assert_eq!(ceiling.layer, SkyCover::VerticalVisibility);
}

#[test]
fn test_lowest_layer_wins() {
    let ceiling = decode_ceiling(&tokens_of("BKN025 OVC008")).unwrap();
    assert_eq!(ceiling.height_ft, 800);
    assert_eq!(ceiling.layer, SkyCover::Overcast);

    // Order of appearance does not matter
    let ceiling = decode_ceiling(&tokens_of("OVC008 BKN025")).unwrap();
    assert_eq!(ceiling.height_ft, 800);
    assert_eq!(ceiling.layer, SkyCover::Overcast);
}

#[test]
fn test_non_ceiling_layers_are_ignored() {
    // Few and scattered layers do not define a ceiling
    assert_eq!(decode_ceiling(&tokens_of("FEW030 SCT045")), None);
}

#[test]
fn test_unparseable_height_is_skipped() {
    // The malformed layer is skipped, the valid one still decodes
    let ceiling = decode_ceiling(&tokens_of("BKN0A5 OVC035")).unwrap();
    assert_eq!(ceiling.height_ft, 3500);
    assert_eq!(ceiling.layer, SkyCover::Overcast);
}

#[test]
fn test_short_token_is_skipped() {
    assert_eq!(decode_ceiling(&tokens_of("BKN VV")), None);
}

#[test]
fn test_no_layer_reported() {
    assert_eq!(decode_ceiling(&tokens_of("KJFK 011651Z 10SM CLR")), None);
}
