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

//! Gens KMod Y12 instrument dumps
//!
//! 128 bytes made of eight 16-byte blocks: four operators, one global block
//! and the instrument name written three times. Operator bytes are raw
//! YM2612 register values:
//!
//! ```text
//! +0  DT1 << 4 | MUL
//! +1  TL (attenuation)
//! +2  RS << 6 | AR
//! +3  AM << 7 | D1R
//! +4  D2R
//! +5  D1L << 4 | RR
//! +8  SSG-EG
//! ```

use crate::error::{PatchError, Result};
use crate::pack::{
    pack_detune_multiple, pack_level2_release, pack_lfo_enable_decay1, pack_rate_scaling_attack,
    unpack_detune_multiple, unpack_level2_release, unpack_lfo_enable_decay1,
    unpack_rate_scaling_attack,
};
use crate::patch::{Patch, ValidationMode};
use crate::registry::{OperatorField, Parameter, NUM_OPERATORS};

/// Size of a Y12 file
pub const Y12_SIZE: usize = 128;

/// Longest name a Y12 file can hold
pub const NAME_LENGTH: usize = 16;

const BLOCK_SIZE: usize = 16;
const GLOBAL_OFFSET: usize = NUM_OPERATORS * BLOCK_SIZE;
const NAME_OFFSET: usize = GLOBAL_OFFSET + BLOCK_SIZE;
const NAME_BLOCKS: usize = 3;

/// Centre of the linear detune scale used by the patch model
const DETUNE_CENTRE: u8 = 3;

/// Convert a linear detune (0-6, 3 = none) to the DT1 register encoding,
/// where bit 2 is the sign and bits 0-1 the magnitude.
///
/// Values above 6 have no register encoding and saturate at +3.
pub fn detune_to_register(detune: u8) -> u8 {
    if detune < DETUNE_CENTRE {
        0x04 | (DETUNE_CENTRE - detune)
    } else {
        (detune - DETUNE_CENTRE).min(3)
    }
}

/// Convert a DT1 register value to the linear detune scale.
/// Registers 0 and 4 both mean no detune.
pub fn register_to_detune(register: u8) -> u8 {
    let magnitude = register & 0x03;
    if register & 0x04 != 0 {
        DETUNE_CENTRE - magnitude
    } else {
        DETUNE_CENTRE + magnitude
    }
}

/// Parse a Y12 file. Anything but exactly 128 bytes is rejected.
pub fn parse(data: &[u8]) -> Result<Patch> {
    parse_with_mode(data, ValidationMode::Strict)
}

/// [`parse`] with an explicit validation mode
pub fn parse_with_mode(data: &[u8], mode: ValidationMode) -> Result<Patch> {
    if data.len() != Y12_SIZE {
        return Err(PatchError::Length {
            format: "Y12",
            expected: Y12_SIZE,
            actual: data.len(),
        });
    }

    let mut patch = Patch::with_mode(mode);

    for op in 0..NUM_OPERATORS {
        let block = &data[op * BLOCK_SIZE..(op + 1) * BLOCK_SIZE];
        let mut set = |field, value: u8| patch.set(Parameter::Operator(op, field), value as i32);

        let (detune, multiple) = unpack_detune_multiple(block[0]);
        set(OperatorField::Detune, register_to_detune(detune))?;
        set(OperatorField::Multiple, multiple)?;

        set(OperatorField::TotalLevel, 127 - (block[1] & 0x7f))?;

        let (rate_scaling, attack) = unpack_rate_scaling_attack(block[2]);
        set(OperatorField::RateScaling, rate_scaling)?;
        set(OperatorField::Attack, attack)?;

        let (lfo_enable, decay1) = unpack_lfo_enable_decay1(block[3]);
        set(OperatorField::LfoEnable, lfo_enable)?;
        set(OperatorField::Decay1, decay1)?;

        set(OperatorField::Decay2, block[4] & 0x1f)?;

        let (level2, release) = unpack_level2_release(block[5]);
        set(OperatorField::Level2, level2)?;
        set(OperatorField::Release, release)?;

        set(OperatorField::SsgEg, block[8] & 0x0f)?;
    }

    patch.set(Parameter::Algorithm, data[GLOBAL_OFFSET] as i32)?;
    patch.set(Parameter::FmFeedback, data[GLOBAL_OFFSET + 1] as i32)?;

    // only the first name block is authoritative
    let name: String = data[NAME_OFFSET..NAME_OFFSET + NAME_LENGTH]
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| char::from(b))
        .collect();
    patch.set_name(name);

    Ok(patch)
}

/// Serialize the patch as a 128 byte Y12 file.
pub fn generate(patch: &Patch) -> Result<[u8; Y12_SIZE]> {
    let mut data = [0u8; Y12_SIZE];

    for op in 0..NUM_OPERATORS {
        let get = |field| patch.require(Parameter::Operator(op, field));
        let block = &mut data[op * BLOCK_SIZE..(op + 1) * BLOCK_SIZE];

        block[0] = pack_detune_multiple(
            detune_to_register(get(OperatorField::Detune)?),
            get(OperatorField::Multiple)?,
        );
        block[1] = (127 - get(OperatorField::TotalLevel)?) & 0x7f;
        block[2] = pack_rate_scaling_attack(
            get(OperatorField::RateScaling)?,
            get(OperatorField::Attack)?,
        );
        block[3] = pack_lfo_enable_decay1(
            get(OperatorField::LfoEnable)?,
            get(OperatorField::Decay1)?,
        );
        block[4] = get(OperatorField::Decay2)? & 0x1f;
        block[5] = pack_level2_release(get(OperatorField::Level2)?, get(OperatorField::Release)?);
        block[8] = get(OperatorField::SsgEg)? & 0x0f;
    }

    data[GLOBAL_OFFSET] = patch.require(Parameter::Algorithm)?;
    data[GLOBAL_OFFSET + 1] = patch.require(Parameter::FmFeedback)?;

    let mut name = [0u8; NAME_LENGTH];
    for (slot, c) in name.iter_mut().zip(patch.name().chars()) {
        *slot = u8::try_from(u32::from(c)).unwrap_or(b'?');
    }
    for i in 0..NAME_BLOCKS {
        let start = NAME_OFFSET + i * BLOCK_SIZE;
        data[start..start + NAME_LENGTH].copy_from_slice(&name);
    }

    Ok(data)
}
