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

//! TFI instrument files (TFM Music Maker)
//!
//! ```text
//!  Index          | Description   | Range
//! ----------------|---------------|---------
//!   0             | Algorithm     | 0 - 7
//!   1             | Feedback      | 0 - 7
//!   2, 12, 22, 32 | Multiplier    | 0 - 15
//!   3, 13, 23, 33 | Detune        | 0 - 7
//!   4, 14, 24, 34 | Total Level   | 0 - 127 (attenuation)
//!   5, 15, 25, 35 | Rate Scaling  | 0 - 3
//!   6, 16, 26, 36 | Attack Rate   | 0 - 31
//!   7, 17, 27, 37 | Decay Rate 1  | 0 - 31
//!   8, 18, 28, 38 | Decay Rate 2  | 0 - 31
//!   9, 19, 29, 39 | Release Rate  | 0 - 15
//!  10, 20, 30, 40 | Sustain Level | 0 - 15
//!  11, 21, 31, 41 | SSG-EG        | 0 - 15
//! ```

use super::{decode_field, encode_field};
use crate::error::Result;
use crate::patch::{Patch, ValidationMode};
use crate::registry::{OperatorField, Parameter, NUM_OPERATORS};

/// Size of a TFI file
pub const TFI_SIZE: usize = 42;

const OPERATOR_OFFSET: usize = 2;

const OPERATOR_LAYOUT: [OperatorField; 10] = [
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

/// Parse a TFI file.
///
/// The length is not checked: trailing bytes are ignored and fields past
/// the end of short input stay unset.
pub fn parse(data: &[u8]) -> Result<Patch> {
    parse_with_mode(data, ValidationMode::Strict)
}

/// [`parse`] with an explicit validation mode
pub fn parse_with_mode(data: &[u8], mode: ValidationMode) -> Result<Patch> {
    if data.len() != TFI_SIZE {
        log::debug!("TFI: expected {} bytes, got {}", TFI_SIZE, data.len());
    }

    let mut patch = Patch::with_mode(mode);

    if let Some(&algorithm) = data.first() {
        patch.set(Parameter::Algorithm, algorithm as i32)?;
    }
    if let Some(&feedback) = data.get(1) {
        patch.set(Parameter::FmFeedback, feedback as i32)?;
    }

    for op in 0..NUM_OPERATORS {
        let base = OPERATOR_OFFSET + op * OPERATOR_LAYOUT.len();

        for (i, &field) in OPERATOR_LAYOUT.iter().enumerate() {
            if let Some(&byte) = data.get(base + i) {
                patch.set(Parameter::Operator(op, field), decode_field(field, byte))?;
            }
        }
    }

    Ok(patch)
}

/// Serialize the patch as a 42 byte TFI file.
pub fn generate(patch: &Patch) -> Result<[u8; TFI_SIZE]> {
    let mut data = [0u8; TFI_SIZE];

    data[0] = patch.require(Parameter::Algorithm)?;
    data[1] = patch.require(Parameter::FmFeedback)?;

    for op in 0..NUM_OPERATORS {
        let base = OPERATOR_OFFSET + op * OPERATOR_LAYOUT.len();

        for (i, &field) in OPERATOR_LAYOUT.iter().enumerate() {
            let value = patch.require(Parameter::Operator(op, field))?;
            data[base + i] = encode_field(field, value);
        }
    }

    Ok(data)
}
