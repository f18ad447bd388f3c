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

//! DefleMask DMP instruments
//!
//! Every file version puts the same header and operator bytes at different
//! offsets; [`classify`] works them out from the version byte. Generation
//! always writes the newest Genesis FM layout (version 0x0B):
//!
//! ```text
//! 0x00       FILE_VERSION (0x0B)
//! 0x01       SYSTEM (0x02 = Genesis)
//! 0x02       INSTRUMENT MODE (1 = FM)
//! 0x03       LFO (FMS)
//! 0x04       FB
//! 0x05       ALG
//! 0x06       LFO2 (AMS)
//! 0x07 + 11n MULT TL AR DR SL RR AM RS DT D2R SSGEG
//! ```

use super::{decode_field, encode_field};
use crate::error::{PatchError, Result};
use crate::patch::{Patch, ValidationMode};
use crate::registry::{OperatorField, Parameter, NUM_OPERATORS};

/// Version byte written by [`generate`]
pub const DMP_VERSION: u8 = 0x0B;

/// System byte for the Sega Genesis
pub const SYSTEM_GENESIS: u8 = 0x02;

/// Instrument mode byte for FM instruments
pub const MODE_FM: u8 = 0x01;

/// Size of a file written by [`generate`]
pub const DMP_SIZE: usize = 7 + NUM_OPERATORS * OPERATOR_LAYOUT.len();

const HEADER_LAYOUT: [Parameter; 4] = [
    Parameter::LfoFm,
    Parameter::FmFeedback,
    Parameter::Algorithm,
    Parameter::LfoAm,
];

const OPERATOR_LAYOUT: [OperatorField; 11] = [
    OperatorField::Multiple,
    OperatorField::TotalLevel,
    OperatorField::Attack,
    OperatorField::Decay1,
    OperatorField::Level2,
    OperatorField::Release,
    OperatorField::LfoEnable,
    OperatorField::RateScaling,
    OperatorField::Detune,
    OperatorField::Decay2,
    OperatorField::SsgEg,
];

/// Where the FM header and the operator data start in a DMP file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmpLayout {
    /// Offset of the four global bytes
    pub head_offset: usize,
    /// Offset of the first operator block
    pub data_offset: usize,
}

/// Work out the layout of a DMP file from its version byte, rejecting
/// anything that is not a Genesis FM instrument.
pub fn classify(data: &[u8]) -> Result<DmpLayout> {
    let version = *data.first().ok_or(PatchError::Length {
        format: "DMP",
        expected: DMP_SIZE,
        actual: 0,
    })?;

    let fm_mode = |index: usize| -> Result<()> {
        if data.get(index) == Some(&MODE_FM) {
            Ok(())
        } else {
            Err(PatchError::InstrumentMode)
        }
    };

    let (head_offset, data_offset) = match version {
        // oldest format, no mode byte
        0x00 => (1, 5),
        0x01..=0x08 | 0x0A => {
            fm_mode(1)?;
            (2, 6)
        }
        0x09 => {
            fm_mode(1)?;
            (3, 7)
        }
        0x0B => {
            if data.get(1) != Some(&SYSTEM_GENESIS) {
                return Err(PatchError::InstrumentSystem);
            }
            fm_mode(2)?;
            (3, 7)
        }
        other => return Err(PatchError::FormatVersion(other)),
    };

    log::debug!(
        "DMP: version 0x{:02X}, header at {}, operators at {}",
        version,
        head_offset,
        data_offset
    );

    Ok(DmpLayout {
        head_offset,
        data_offset,
    })
}

/// Parse a DMP file of any supported version.
///
/// Fields past the end of truncated input stay unset.
pub fn parse(data: &[u8]) -> Result<Patch> {
    parse_with_mode(data, ValidationMode::Strict)
}

/// [`parse`] with an explicit validation mode
pub fn parse_with_mode(data: &[u8], mode: ValidationMode) -> Result<Patch> {
    let layout = classify(data)?;
    let mut patch = Patch::with_mode(mode);

    for (i, &parameter) in HEADER_LAYOUT.iter().enumerate() {
        if let Some(&byte) = data.get(layout.head_offset + i) {
            patch.set(parameter, byte as i32)?;
        }
    }

    for op in 0..NUM_OPERATORS {
        let base = layout.data_offset + op * OPERATOR_LAYOUT.len();

        for (i, &field) in OPERATOR_LAYOUT.iter().enumerate() {
            if let Some(&byte) = data.get(base + i) {
                patch.set(Parameter::Operator(op, field), decode_field(field, byte))?;
            }
        }
    }

    Ok(patch)
}

/// Serialize the patch as a version 0x0B Genesis FM instrument.
pub fn generate(patch: &Patch) -> Result<[u8; DMP_SIZE]> {
    let mut data = [0u8; DMP_SIZE];

    data[0] = DMP_VERSION;
    data[1] = SYSTEM_GENESIS;
    data[2] = MODE_FM;

    let head_offset = 3;
    for (i, &parameter) in HEADER_LAYOUT.iter().enumerate() {
        data[head_offset + i] = patch.require(parameter)?;
    }

    let data_offset = head_offset + HEADER_LAYOUT.len();
    for op in 0..NUM_OPERATORS {
        let base = data_offset + op * OPERATOR_LAYOUT.len();

        for (i, &field) in OPERATOR_LAYOUT.iter().enumerate() {
            let value = patch.require(Parameter::Operator(op, field))?;
            data[base + i] = encode_field(field, value);
        }
    }

    Ok(data)
}
