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

//! Integer range rescaling for MIDI CC values

/// Largest 7-bit MIDI data value
pub const CC_MAX: u8 = 127;

/// Maps `value` from `0..=from_max` onto `0..=to_max`, rounding half away
/// from zero.
///
/// A zero `from_max` has no meaningful scale and maps everything to 0.
pub fn rescale(value: u32, from_max: u32, to_max: u32) -> u32 {
    if from_max == 0 {
        return 0;
    }

    ((value as f64 / from_max as f64) * to_max as f64).round() as u32
}

/// Scale a parameter value with maximum `max` up to the CC range
#[inline]
pub fn to_cc_range(value: u8, max: u8) -> u8 {
    rescale(value as u32, max as u32, CC_MAX as u32) as u8
}

/// Scale a CC value down to a parameter with maximum `max`.
///
/// Values above 127 are not clipped, so they surface as range errors when
/// written to a patch.
#[inline]
pub fn from_cc_range(value: u8, max: u8) -> i32 {
    rescale(value as u32, CC_MAX as u32, max as u32) as i32
}
