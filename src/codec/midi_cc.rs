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

//! GenMDM MIDI CC maps
//!
//! The GenMDM cartridge exposes every parameter except the instrument
//! index as a 7-bit controller. Values are rescaled onto 0-127 with
//! rounding and scaled back down the same way.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::patch::{Patch, ValidationMode};
use crate::registry::Parameter;
use crate::rescale::{from_cc_range, to_cc_range};

/// Sparse map from CC number to 7-bit value. Missing entries were never sent.
pub type CcMap = BTreeMap<u8, u8>;

/// Status nibble of a MIDI Control Change message
pub const CONTROL_CHANGE: u8 = 0xB0;

/// Build a patch from received CC values.
///
/// Parameters whose CC is absent from `cc_map` stay unset.
pub fn parse_from_cc(cc_map: &CcMap) -> Result<Patch> {
    parse_from_cc_with_mode(cc_map, ValidationMode::Strict)
}

/// [`parse_from_cc`] with an explicit validation mode
pub fn parse_from_cc_with_mode(cc_map: &CcMap, mode: ValidationMode) -> Result<Patch> {
    let mut patch = Patch::with_mode(mode);

    for parameter in Parameter::all() {
        let Some(cc) = parameter.cc() else {
            continue;
        };

        if let Some(&value) = cc_map.get(&cc) {
            patch.set(parameter, from_cc_range(value, parameter.max()))?;
        }
    }

    Ok(patch)
}

/// CC values for every parameter that has a controller.
pub fn generate_to_cc(patch: &Patch) -> Result<CcMap> {
    let mut cc_map = CcMap::new();

    for parameter in Parameter::all() {
        if let Some(cc) = parameter.cc() {
            let value = patch.require(parameter)?;
            cc_map.insert(cc, to_cc_range(value, parameter.max()));
        }
    }

    Ok(cc_map)
}

/// Render a CC map as Control Change messages on `channel` (0-15), in
/// registry order.
pub fn to_messages(cc_map: &CcMap, channel: u8) -> Vec<[u8; 3]> {
    let status = CONTROL_CHANGE | (channel & 0x0f);

    Parameter::all()
        .filter_map(|parameter| parameter.cc())
        .filter_map(|cc| cc_map.get(&cc).map(|&value| [status, cc, value & 0x7f]))
        .collect()
}
