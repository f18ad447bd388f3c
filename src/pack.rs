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

//! Register byte packing for the Y12 operator layout
//!
//! Each helper combines two narrow fields into one YM2612-style register
//! byte (high field first) and the matching unpack splits it again. Inputs
//! are masked, so out-of-range bits never leak into the neighbouring field.

/// `DT1 << 4 | MUL`
#[inline]
pub fn pack_detune_multiple(detune: u8, multiple: u8) -> u8 {
    (0x70 & (detune << 4)) | (0x0f & multiple)
}

/// Returns `(detune, multiple)`
#[inline]
pub fn unpack_detune_multiple(value: u8) -> (u8, u8) {
    ((value >> 4) & 0x07, value & 0x0f)
}

/// `RS << 6 | AR`
#[inline]
pub fn pack_rate_scaling_attack(rate_scaling: u8, attack: u8) -> u8 {
    (0xc0 & (rate_scaling << 6)) | (0x1f & attack)
}

/// Returns `(rate_scaling, attack)`
#[inline]
pub fn unpack_rate_scaling_attack(value: u8) -> (u8, u8) {
    ((value >> 6) & 0x03, value & 0x1f)
}

/// `AM << 7 | D1R`
#[inline]
pub fn pack_lfo_enable_decay1(lfo_enable: u8, decay1: u8) -> u8 {
    (0x80 & (lfo_enable << 7)) | (0x1f & decay1)
}

/// Returns `(lfo_enable, decay1)`
#[inline]
pub fn unpack_lfo_enable_decay1(value: u8) -> (u8, u8) {
    ((value >> 7) & 0x01, value & 0x1f)
}

/// `D1L << 4 | RR`
#[inline]
pub fn pack_level2_release(level2: u8, release: u8) -> u8 {
    (0xf0 & (level2 << 4)) | (0x0f & release)
}

/// Returns `(level2, release)`
#[inline]
pub fn unpack_level2_release(value: u8) -> (u8, u8) {
    ((value >> 4) & 0x0f, value & 0x0f)
}
