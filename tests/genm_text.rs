#![recursion_limit = "1024"]

use genmdm::codec::genm;
use genmdm::{OperatorField, Parameter, PatchError};
use serde_json::json;

mod common;
use common::{BAD_GENM_TEXT, GENM_TEXT};

#[test]
fn parses_capcom_instrument() {
    let patches = genm::parse(GENM_TEXT).unwrap();
    assert_eq!(patches.len(), 2);

    let patch = &patches[0];
    assert_eq!(patch.get(Parameter::Algorithm), Some(4));
    assert_eq!(patch.get(Parameter::FmFeedback), Some(4));
    assert_eq!(
        patch.get(Parameter::Operator(0, OperatorField::TotalLevel)),
        Some(97)
    );
    assert_eq!(patch.name(), "01_capcom_logo_37.tfi");
}

#[test]
fn parses_every_field() {
    let patches = genm::parse(GENM_TEXT).unwrap();
    let parsed: Vec<_> = patches
        .iter()
        .map(|patch| serde_json::to_value(patch).unwrap())
        .collect();

    let expected = vec![
        json!({
            "instrumentIndex": 0,
            "algorithm": 4,
            "lfoFm": 0,
            "lfoAm": 0,
            "fmFeedback": 4,
            "panning": 3,
            "op1TotalLevel": 97,
            "op2TotalLevel": 97,
            "op3TotalLevel": 100,
            "op4TotalLevel": 100,
            "op1Detune": 6,
            "op2Detune": 0,
            "op3Detune": 6,
            "op4Detune": 0,
            "op1Attack": 31,
            "op2Attack": 31,
            "op3Attack": 24,
            "op4Attack": 24,
            "op1Decay1": 16,
            "op2Decay1": 13,
            "op3Decay1": 12,
            "op4Decay1": 12,
            "op1Decay2": 2,
            "op2Decay2": 2,
            "op3Decay2": 8,
            "op4Decay2": 8,
            "op1Multiple": 4,
            "op2Multiple": 4,
            "op3Multiple": 2,
            "op4Multiple": 4,
            "op1RateScaling": 0,
            "op2RateScaling": 0,
            "op3RateScaling": 0,
            "op4RateScaling": 0,
            "op1Level2": 4,
            "op2Level2": 3,
            "op3Level2": 1,
            "op4Level2": 1,
            "op1Release": 2,
            "op2Release": 2,
            "op3Release": 6,
            "op4Release": 6,
            "op1LfoEnable": 0,
            "op2LfoEnable": 0,
            "op3LfoEnable": 0,
            "op4LfoEnable": 0,
            "op1SSGEG": 0,
            "op2SSGEG": 0,
            "op3SSGEG": 0,
            "op4SSGEG": 0,
            "instrumentName": "01_capcom_logo_37.tfi",
        }),
        json!({
            "instrumentIndex": 1,
            "algorithm": 0,
            "lfoFm": 0,
            "lfoAm": 0,
            "fmFeedback": 0,
            "panning": 3,
            "op1TotalLevel": 107,
            "op2TotalLevel": 103,
            "op3TotalLevel": 107,
            "op4TotalLevel": 100,
            "op1Detune": 5,
            "op2Detune": 6,
            "op3Detune": 4,
            "op4Detune": 6,
            "op1Attack": 31,
            "op2Attack": 26,
            "op3Attack": 28,
            "op4Attack": 31,
            "op1Decay1": 20,
            "op2Decay1": 16,
            "op3Decay1": 20,
            "op4Decay1": 7,
            "op1Decay2": 3,
            "op2Decay2": 4,
            "op3Decay2": 2,
            "op4Decay2": 3,
            "op1Multiple": 6,
            "op2Multiple": 0,
            "op3Multiple": 5,
            "op4Multiple": 1,
            "op1RateScaling": 2,
            "op2RateScaling": 1,
            "op3RateScaling": 1,
            "op4RateScaling": 2,
            "op1Level2": 4,
            "op2Level2": 2,
            "op3Level2": 6,
            "op4Level2": 1,
            "op1Release": 3,
            "op2Release": 3,
            "op3Release": 3,
            "op4Release": 6,
            "op1LfoEnable": 0,
            "op2LfoEnable": 0,
            "op3LfoEnable": 0,
            "op4LfoEnable": 0,
            "op1SSGEG": 0,
            "op2SSGEG": 0,
            "op3SSGEG": 0,
            "op4SSGEG": 0,
            "instrumentName": "03_player_select_12.tfi",
        }),
    ];

    assert_eq!(parsed, expected);
}

#[test]
fn generate_reproduces_input() {
    let patches = genm::parse(GENM_TEXT).unwrap();
    assert_eq!(genm::generate(&patches).unwrap(), GENM_TEXT);
}

#[test]
fn out_of_range_value_fails_whole_parse() {
    let err = genm::parse(BAD_GENM_TEXT).unwrap_err();
    assert!(matches!(err, PatchError::Range { .. }));
    assert_eq!(
        err.to_string(),
        "op1Detune must be in range of 0 and 7. got 100"
    );
}

#[test]
fn keeps_textual_order_around_noise() {
    let mut lines: Vec<&str> = GENM_TEXT.lines().collect();
    lines.reverse();
    let text = format!("# header\n{}\n\ntrailing junk", lines.join("\n"));

    let patches = genm::parse(&text).unwrap();
    let names: Vec<_> = patches.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["03_player_select_12.tfi", "01_capcom_logo_37.tfi"]);
}
