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

//! JSON patch lists
//!
//! A file is an array of objects keyed by registry name plus
//! `instrumentName`. Unset fields are omitted.

use serde::de::DeserializeSeed;

use crate::error::Result;
use crate::patch::{Patch, PatchListSeed, ValidationMode};

/// Parse a JSON array of patches. Values are validated strictly.
pub fn parse(text: &str) -> Result<Vec<Patch>> {
    parse_with_mode(text, ValidationMode::Strict)
}

/// Parse a JSON array of patches with an explicit validation mode.
pub fn parse_with_mode(text: &str, mode: ValidationMode) -> Result<Vec<Patch>> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    let patches = PatchListSeed(mode).deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(patches)
}

/// Pretty-printed JSON array of `patches`
pub fn generate(patches: &[Patch]) -> Result<String> {
    Ok(serde_json::to_string_pretty(patches)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use crate::registry::{OperatorField, Parameter};

    #[test]
    fn test_roundtrip() {
        let mut first = Patch::new();
        first.fill_unset();
        first.set_name("lead");
        let mut second = Patch::new();
        second.set(Parameter::Algorithm, 3).unwrap();

        let patches = vec![first, second];
        let text = generate(&patches).unwrap();
        assert_eq!(parse(&text).unwrap(), patches);
    }

    #[test]
    fn test_clamp_mode() {
        let text = r#"[{"panning": 4, "op2TotalLevel": -3, "instrumentName": "wide"}]"#;
        let patches = parse_with_mode(text, ValidationMode::Clamp).unwrap();

        assert_eq!(patches[0].get(Parameter::Panning), Some(3));
        assert_eq!(
            patches[0].get(Parameter::Operator(1, OperatorField::TotalLevel)),
            Some(0)
        );
        assert_eq!(patches[0].name(), "wide");
        assert_eq!(patches[0].mode(), ValidationMode::Clamp);
        assert!(parse(text).is_err());
    }

    #[test]
    fn test_trailing_garbage() {
        assert!(matches!(parse("[] x"), Err(PatchError::Json(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse("{"), Err(PatchError::Json(_))));
        assert!(matches!(
            parse(r#"[{"panning": 4}]"#),
            Err(PatchError::Json(_))
        ));
    }
}
