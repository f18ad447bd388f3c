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

//! GenMDM text instrument lists
//!
//! One instrument per line:
//!
//! ```text
//! 0, 4 0 0 4 3 97 97 100 100 6 0 6 0 31 31 24 24 16 13 12 12 2 2 8 8 4 4 2 4 0 0 0 0 4 3 1 1 2 2 6 6 0 0 0 0 0 0 0 0 01_capcom_logo_37.tfi;
//! ```
//!
//! The leading number is the instrument index, the next 49 numbers follow
//! registry order and everything up to the `;` is the instrument name.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{PatchError, Result};
use crate::patch::{Patch, ValidationMode};
use crate::registry::{Parameter, PARAMETER_COUNT};

lazy_static! {
    static ref INSTRUMENT_REGEX: Regex =
        Regex::new(r"([0-9]{1,3}), ((?:[0-9]{1,3} ){49})(.*?);").unwrap();
}

/// Parse every instrument line in `text`, in order of appearance.
///
/// Lines that do not have the instrument shape are skipped. Values are
/// validated strictly; one bad value fails the whole parse.
pub fn parse(text: &str) -> Result<Vec<Patch>> {
    parse_with_mode(text, ValidationMode::Strict)
}

/// [`parse`] with an explicit validation mode
pub fn parse_with_mode(text: &str, mode: ValidationMode) -> Result<Vec<Patch>> {
    let mut patches = Vec::new();

    for captures in INSTRUMENT_REGEX.captures_iter(text) {
        let mut patch = Patch::with_mode(mode);

        patch.set(Parameter::InstrumentIndex, parse_field(&captures[1])?)?;

        let values = captures[2].split(' ').filter(|token| !token.is_empty());
        for (parameter, token) in Parameter::all().skip(1).zip(values) {
            patch.set(parameter, parse_field(token)?)?;
        }

        patch.set_name(&captures[3]);
        patches.push(patch);
    }

    log::debug!(
        "GenMDM: parsed {} instruments ({} fields each)",
        patches.len(),
        PARAMETER_COUNT - 1
    );

    Ok(patches)
}

fn parse_field(token: &str) -> Result<i32> {
    token
        .parse()
        .map_err(|_| PatchError::InvalidField(token.to_string()))
}

/// Render `patches` as GenMDM text, one line each, joined with `\n`.
pub fn generate(patches: &[Patch]) -> Result<String> {
    let lines = patches
        .iter()
        .map(Patch::to_display_string)
        .collect::<Result<Vec<_>>>()?;

    Ok(lines.join("\n"))
}
