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

//! Error type shared by the patch model and every codec

use thiserror::Error;

/// Everything that can go wrong while validating, parsing or generating a patch.
#[derive(Error, Debug)]
pub enum PatchError {
    /// A value outside `0..size` was written in strict mode.
    #[error("{parameter} must be in range of 0 and {max}. got {value}")]
    Range {
        /// Registry name of the parameter
        parameter: &'static str,
        /// Largest accepted value
        max: u8,
        /// Value that was rejected
        value: i32,
    },
    /// Input does not have the length the format requires.
    #[error("{format} data has the wrong length: expected {expected} bytes, got {actual}")]
    Length {
        /// Format being parsed
        format: &'static str,
        /// Length the format needs
        expected: usize,
        /// Length of the input
        actual: usize,
    },
    /// DMP version byte is not one we know how to lay out.
    #[error("DMP error - unsupported file version 0x{0:02X}, is the DMP version greater than v1.0.0?")]
    FormatVersion(u8),
    /// DMP file is not an FM instrument.
    #[error("DMP instrument mode error. FM instruments only.")]
    InstrumentMode,
    /// DMP file targets a system other than the Genesis.
    #[error("DMP instrument system error. Sega Genesis only.")]
    InstrumentSystem,
    /// A generator needed a field that was never set.
    #[error("{0} has not been set")]
    UnsetParameter(&'static str),
    /// A parameter named an operator past the fourth.
    #[error("Invalid operator index {0}, must be below 4")]
    InvalidOperator(usize),
    /// An instrument name that the GenMDM text line cannot hold.
    #[error("instrument name {0:?} contains ';' or a line break")]
    InvalidName(String),
    /// A GenMDM text field could not be read as a number.
    #[error("invalid numeric field {0:?}")]
    InvalidField(String),
    /// A single-patch format was asked to write zero patches.
    #[error("no patches to write")]
    EmptyBatch,
    /// Malformed or invalid JSON patch list
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PatchError>;
