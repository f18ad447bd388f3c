// Copyright 2025 GenMDM Patch Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.
//
// See http://creativecommons.org/licenses/MIT/ for more information.

//! GenMDM parameter registry
//!
//! The registry is the single source of truth for every parameter a patch
//! carries: its name, its legal size and the MIDI CC the GenMDM cartridge
//! listens on. Table order is the GenMDM text field order and the MIDI CC
//! iteration order, so it must never be rearranged.

use crate::error::{PatchError, Result};

/// Number of FM operators per voice (YM2612)
pub const NUM_OPERATORS: usize = 4;

/// Number of entries in the registry
pub const PARAMETER_COUNT: usize = 50;

/// Registry position of the first per-operator parameter
const OPERATOR_BASE: usize = 6;

/// Static description of one parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDef {
    /// Name as used by GenMDM text and JSON
    pub name: &'static str,
    /// Legal values are `0..size`
    pub size: u8,
    /// MIDI CC number, `None` for parameters the cartridge cannot receive
    pub cc: Option<u8>,
}

impl ParameterDef {
    const fn new(name: &'static str, size: u8, cc: u8) -> Self {
        Self {
            name,
            size,
            cc: Some(cc),
        }
    }

    /// Largest legal value
    pub const fn max(&self) -> u8 {
        self.size - 1
    }
}

/// The registry, in canonical order.
pub static PARAMETERS: [ParameterDef; PARAMETER_COUNT] = [
    ParameterDef {
        name: "instrumentIndex",
        size: 128,
        cc: None,
    },
    ParameterDef::new("algorithm", 8, 14),
    ParameterDef::new("lfoFm", 8, 75),
    ParameterDef::new("lfoAm", 8, 76),
    ParameterDef::new("fmFeedback", 8, 15),
    ParameterDef::new("panning", 4, 77),
    ParameterDef::new("op1TotalLevel", 128, 16),
    ParameterDef::new("op2TotalLevel", 128, 17),
    ParameterDef::new("op3TotalLevel", 128, 18),
    ParameterDef::new("op4TotalLevel", 128, 19),
    ParameterDef::new("op1Detune", 8, 24),
    ParameterDef::new("op2Detune", 8, 25),
    ParameterDef::new("op3Detune", 8, 26),
    ParameterDef::new("op4Detune", 8, 27),
    ParameterDef::new("op1Attack", 32, 43),
    ParameterDef::new("op2Attack", 32, 44),
    ParameterDef::new("op3Attack", 32, 45),
    ParameterDef::new("op4Attack", 32, 46),
    ParameterDef::new("op1Decay1", 32, 47),
    ParameterDef::new("op2Decay1", 32, 48),
    ParameterDef::new("op3Decay1", 32, 49),
    ParameterDef::new("op4Decay1", 32, 50),
    ParameterDef::new("op1Decay2", 32, 51),
    ParameterDef::new("op2Decay2", 32, 52),
    ParameterDef::new("op3Decay2", 32, 53),
    ParameterDef::new("op4Decay2", 32, 54),
    ParameterDef::new("op1Multiple", 16, 20),
    ParameterDef::new("op2Multiple", 16, 21),
    ParameterDef::new("op3Multiple", 16, 22),
    ParameterDef::new("op4Multiple", 16, 23),
    ParameterDef::new("op1RateScaling", 4, 39),
    ParameterDef::new("op2RateScaling", 4, 40),
    ParameterDef::new("op3RateScaling", 4, 41),
    ParameterDef::new("op4RateScaling", 4, 42),
    ParameterDef::new("op1Level2", 16, 55),
    ParameterDef::new("op2Level2", 16, 56),
    ParameterDef::new("op3Level2", 16, 57),
    ParameterDef::new("op4Level2", 16, 58),
    ParameterDef::new("op1Release", 16, 59),
    ParameterDef::new("op2Release", 16, 60),
    ParameterDef::new("op3Release", 16, 61),
    ParameterDef::new("op4Release", 16, 62),
    ParameterDef::new("op1LfoEnable", 2, 70),
    ParameterDef::new("op2LfoEnable", 2, 71),
    ParameterDef::new("op3LfoEnable", 2, 72),
    ParameterDef::new("op4LfoEnable", 2, 73),
    ParameterDef::new("op1SSGEG", 16, 90),
    ParameterDef::new("op2SSGEG", 16, 91),
    ParameterDef::new("op3SSGEG", 16, 92),
    ParameterDef::new("op4SSGEG", 16, 93),
];

/// Per-operator parameter kinds, declared in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorField {
    /// Loudness, 0-127 (the chip register stores the inverse)
    TotalLevel,
    /// Detune, 0-7 with 3 as centre
    Detune,
    /// Attack rate (AR), 0-31
    Attack,
    /// First decay rate (D1R), 0-31
    Decay1,
    /// Second decay rate (D2R), 0-31
    Decay2,
    /// Frequency multiplier, 0-15
    Multiple,
    /// Key rate scaling, 0-3
    RateScaling,
    /// Sustain level (D1L), 0-15
    Level2,
    /// Release rate, 0-15
    Release,
    /// Amplitude modulation enable, 0-1
    LfoEnable,
    /// SSG-EG mode, 0-15
    SsgEg,
}

impl OperatorField {
    /// Every field, in registry order
    pub const ALL: [OperatorField; 11] = [
        OperatorField::TotalLevel,
        OperatorField::Detune,
        OperatorField::Attack,
        OperatorField::Decay1,
        OperatorField::Decay2,
        OperatorField::Multiple,
        OperatorField::RateScaling,
        OperatorField::Level2,
        OperatorField::Release,
        OperatorField::LfoEnable,
        OperatorField::SsgEg,
    ];
}

/// Typed handle to a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Slot on the GenMDM instrument list, 0-127
    InstrumentIndex,
    /// Operator routing, 0-7
    Algorithm,
    /// LFO frequency modulation depth (FMS), 0-7
    LfoFm,
    /// LFO amplitude modulation depth (AMS), 0-3 on hardware
    LfoAm,
    /// Operator 1 self-feedback, 0-7
    FmFeedback,
    /// Stereo output, 0-3
    Panning,
    /// A per-operator field; the operator index is 0-3
    Operator(usize, OperatorField),
}

impl Parameter {
    /// Checked constructor for a per-operator parameter
    pub fn operator(op: usize, field: OperatorField) -> Result<Parameter> {
        Parameter::Operator(op, field).validate()
    }

    /// Returns `self` if it names a registry entry.
    pub fn validate(self) -> Result<Parameter> {
        match self {
            Parameter::Operator(op, _) if op >= NUM_OPERATORS => {
                Err(PatchError::InvalidOperator(op))
            }
            _ => Ok(self),
        }
    }

    /// Position of this parameter in [`PARAMETERS`].
    pub fn checked_index(self) -> Result<usize> {
        self.validate().map(Parameter::index)
    }

    /// Position of this parameter in [`PARAMETERS`].
    ///
    /// Panics if an operator index is not below [`NUM_OPERATORS`]; use
    /// [`Parameter::checked_index`] for handles built from untrusted input.
    pub fn index(self) -> usize {
        match self {
            Parameter::InstrumentIndex => 0,
            Parameter::Algorithm => 1,
            Parameter::LfoFm => 2,
            Parameter::LfoAm => 3,
            Parameter::FmFeedback => 4,
            Parameter::Panning => 5,
            Parameter::Operator(op, field) => {
                assert!(
                    op < NUM_OPERATORS,
                    "operator index {} out of range (must be < {})",
                    op,
                    NUM_OPERATORS
                );
                OPERATOR_BASE + field as usize * NUM_OPERATORS + op
            }
        }
    }

    /// Inverse of [`Parameter::index`].
    pub fn from_index(index: usize) -> Option<Parameter> {
        let parameter = match index {
            0 => Parameter::InstrumentIndex,
            1 => Parameter::Algorithm,
            2 => Parameter::LfoFm,
            3 => Parameter::LfoAm,
            4 => Parameter::FmFeedback,
            5 => Parameter::Panning,
            i if i < PARAMETER_COUNT => {
                let offset = i - OPERATOR_BASE;
                Parameter::Operator(
                    offset % NUM_OPERATORS,
                    OperatorField::ALL[offset / NUM_OPERATORS],
                )
            }
            _ => return None,
        };
        Some(parameter)
    }

    /// Looks a parameter up by its registry name, e.g. `"op3Attack"`.
    pub fn from_name(name: &str) -> Option<Parameter> {
        PARAMETERS
            .iter()
            .position(|def| def.name == name)
            .and_then(Parameter::from_index)
    }

    /// All parameters in registry order.
    pub fn all() -> impl Iterator<Item = Parameter> {
        (0..PARAMETER_COUNT).filter_map(Parameter::from_index)
    }

    /// Registry entry for this parameter
    pub fn definition(self) -> &'static ParameterDef {
        &PARAMETERS[self.index()]
    }

    /// Registry name, e.g. `"op1TotalLevel"`
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Number of distinct values
    pub fn size(self) -> u8 {
        self.definition().size
    }

    /// Largest valid value
    pub fn max(self) -> u8 {
        self.definition().max()
    }

    /// GenMDM controller number, if the parameter has one
    pub fn cc(self) -> Option<u8> {
        self.definition().cc
    }

    /// Value used for fields a file format does not carry.
    /// Panning 3 sends the voice to both speakers.
    pub fn default_value(self) -> u8 {
        match self {
            Parameter::Panning => 3,
            _ => 0,
        }
    }
}
