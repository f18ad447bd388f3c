use genmdm::codec::{genm, tfi};
use genmdm::{OperatorField, Parameter, Patch, NUM_OPERATORS};

mod common;
use common::{CAPCOM_TFI, GENM_TEXT};

/// Deterministic spread of in-range values for every TFI field
fn patch_from_seed(seed: u32) -> Patch {
    let mut patch = Patch::new();
    let mut state = seed.wrapping_mul(2654435761).wrapping_add(12345);
    let mut next = |size: u8| {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        ((state >> 16) % size as u32) as i32
    };

    patch.set(Parameter::Algorithm, next(8)).unwrap();
    patch.set(Parameter::FmFeedback, next(8)).unwrap();
    for op in 0..NUM_OPERATORS {
        for field in OperatorField::ALL {
            if field == OperatorField::LfoEnable {
                continue;
            }
            let parameter = Parameter::Operator(op, field);
            patch.set(parameter, next(parameter.size())).unwrap();
        }
    }
    patch
}

#[test]
fn generates_capcom_tfi() {
    let patches = genm::parse(GENM_TEXT).unwrap();
    let data = tfi::generate(&patches[0]).unwrap();

    assert_eq!(data.len(), 42);
    assert_eq!(&data[..4], &[4, 4, 4, 6]);
    // TotalLevel 97 is stored as 127 - 97
    assert_eq!(data[4], 30);
    assert_eq!(data, CAPCOM_TFI);
}

#[test]
fn parses_capcom_tfi() {
    let patch = tfi::parse(&CAPCOM_TFI).unwrap();
    let op = |op, field| patch.get(Parameter::Operator(op, field));

    assert_eq!(patch.get(Parameter::Algorithm), Some(4));
    assert_eq!(patch.get(Parameter::FmFeedback), Some(4));

    let expected: [[u8; 10]; 4] = [
        // Multiple, Detune, TotalLevel, RateScaling, Attack, Decay1, Decay2, Release, Level2, SSGEG
        [4, 6, 97, 0, 31, 16, 2, 2, 4, 0],
        [4, 0, 97, 0, 31, 13, 2, 2, 3, 0],
        [2, 6, 100, 0, 24, 12, 8, 6, 1, 0],
        [4, 0, 100, 0, 24, 12, 8, 6, 1, 0],
    ];
    let fields = [
        OperatorField::Multiple,
        OperatorField::Detune,
        OperatorField::TotalLevel,
        OperatorField::RateScaling,
        OperatorField::Attack,
        OperatorField::Decay1,
        OperatorField::Decay2,
        OperatorField::Release,
        OperatorField::Level2,
        OperatorField::SsgEg,
    ];

    for (i, values) in expected.iter().enumerate() {
        for (field, value) in fields.iter().zip(values) {
            assert_eq!(op(i, *field), Some(*value), "op{} {:?}", i + 1, field);
        }
    }

    assert_eq!(patch.get(Parameter::LfoFm), None);
    assert_eq!(patch.name(), "");
}

#[test]
fn roundtrip_is_byte_exact() {
    for seed in 0..256 {
        let patch = patch_from_seed(seed);
        let data = tfi::generate(&patch).unwrap();
        let parsed = tfi::parse(&data).unwrap();

        assert_eq!(parsed, patch, "seed {}", seed);
        assert_eq!(tfi::generate(&parsed).unwrap(), data, "seed {}", seed);
    }
}
