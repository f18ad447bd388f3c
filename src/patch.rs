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

//! In-memory instrument patch with registry-driven validation

use std::fmt;

use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PatchError, Result};
use crate::registry::{Parameter, PARAMETER_COUNT};

/// JSON key holding the free-text name
const NAME_KEY: &str = "instrumentName";

/// How [`Patch::set`] treats out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Reject with [`PatchError::Range`]
    #[default]
    Strict,
    /// Clamp into range and log a warning
    Clamp,
}

/// One GenMDM voice.
///
/// Values are stored by registry position. A fresh patch has every numeric
/// field unset; codecs fill in what their format carries.
#[derive(Debug, Clone)]
pub struct Patch {
    values: [Option<u8>; PARAMETER_COUNT],
    name: String,
    mode: ValidationMode,
}

impl Default for Patch {
    fn default() -> Self {
        Self::with_mode(ValidationMode::default())
    }
}

impl PartialEq for Patch {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.name == other.name
    }
}

impl Eq for Patch {}

impl Patch {
    /// Create an empty patch with strict validation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty patch with the given validation mode
    pub fn with_mode(mode: ValidationMode) -> Self {
        Self {
            values: [None; PARAMETER_COUNT],
            name: String::new(),
            mode,
        }
    }

    /// Validation mode used by [`Patch::set`]
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validate `value` against the registry and store it.
    ///
    /// In [`ValidationMode::Clamp`] only an invalid operator index fails.
    pub fn set(&mut self, parameter: Parameter, value: i32) -> Result<()> {
        let slot = parameter.checked_index()?;
        let max = parameter.max();

        let value = if (0..=max as i32).contains(&value) {
            value as u8
        } else {
            match self.mode {
                ValidationMode::Strict => {
                    return Err(PatchError::Range {
                        parameter: parameter.name(),
                        max,
                        value,
                    });
                }
                ValidationMode::Clamp => {
                    let clamped = value.clamp(0, max as i32) as u8;
                    log::warn!(
                        "{} must be in range of 0 and {}. got {}, clamped to {}",
                        parameter.name(),
                        max,
                        value,
                        clamped
                    );
                    clamped
                }
            }
        };

        self.values[slot] = Some(value);
        Ok(())
    }

    /// Last validated value, `None` if never set or if `parameter` names
    /// an operator past the fourth
    pub fn get(&self, parameter: Parameter) -> Option<u8> {
        let slot = parameter.checked_index().ok()?;
        self.values[slot]
    }

    /// Like [`Patch::get`] but an unset field is an error.
    pub fn require(&self, parameter: Parameter) -> Result<u8> {
        let slot = parameter.checked_index()?;
        self.values[slot].ok_or(PatchError::UnsetParameter(parameter.name()))
    }

    /// Free-text instrument name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the instrument name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Slot on the GenMDM instrument list, if set
    pub fn instrument_index(&self) -> Option<u8> {
        self.get(Parameter::InstrumentIndex)
    }

    /// True once every registry field holds a value
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Give every unset field its registry default.
    pub fn fill_unset(&mut self) {
        for parameter in Parameter::all() {
            let slot = &mut self.values[parameter.index()];
            if slot.is_none() {
                *slot = Some(parameter.default_value());
            }
        }
    }

    /// Render the patch as one GenMDM text line:
    /// `"<index>, <49 values> <name>;"`.
    ///
    /// A name holding `;` or a line break cannot be read back from the
    /// line and is rejected with [`PatchError::InvalidName`].
    pub fn to_display_string(&self) -> Result<String> {
        if self.name.contains(|c: char| matches!(c, ';' | '\n' | '\r')) {
            return Err(PatchError::InvalidName(self.name.clone()));
        }

        let mut line = format!("{}, ", self.require(Parameter::InstrumentIndex)?);

        let values = Parameter::all()
            .skip(1)
            .map(|parameter| self.require(parameter).map(|v| v.to_string()))
            .collect::<Result<Vec<_>>>()?;

        line.push_str(&values.join(" "));
        line.push(' ');
        line.push_str(&self.name);
        line.push(';');

        Ok(line)
    }
}

impl Serialize for Patch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let set = self.values.iter().filter(|v| v.is_some()).count();
        let mut map = serializer.serialize_map(Some(set + 1))?;

        for parameter in Parameter::all() {
            if let Some(value) = self.get(parameter) {
                map.serialize_entry(parameter.name(), &value)?;
            }
        }
        map.serialize_entry(NAME_KEY, &self.name)?;

        map.end()
    }
}

impl<'de> Deserialize<'de> for Patch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        PatchSeed(ValidationMode::Strict).deserialize(deserializer)
    }
}

/// Deserializes one [`Patch`] validating values with the given mode.
#[derive(Debug, Clone, Copy)]
pub struct PatchSeed(pub ValidationMode);

impl<'de> DeserializeSeed<'de> for PatchSeed {
    type Value = Patch;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<Patch, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for PatchSeed {
    type Value = Patch;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of GenMDM parameter names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Patch, A::Error> {
        let mut patch = Patch::with_mode(self.0);

        while let Some(key) = map.next_key::<String>()? {
            if key == NAME_KEY {
                patch.name = map.next_value()?;
                continue;
            }

            let parameter = Parameter::from_name(&key)
                .ok_or_else(|| de::Error::custom(format!("unknown parameter {:?}", key)))?;
            let value: i32 = map.next_value()?;
            patch.set(parameter, value).map_err(de::Error::custom)?;
        }

        Ok(patch)
    }
}

/// Deserializes a JSON array of patches, each read with [`PatchSeed`].
#[derive(Debug, Clone, Copy)]
pub struct PatchListSeed(pub ValidationMode);

impl<'de> DeserializeSeed<'de> for PatchListSeed {
    type Value = Vec<Patch>;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Vec<Patch>, D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for PatchListSeed {
    type Value = Vec<Patch>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of patches")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Vec<Patch>, A::Error> {
        let mut patches = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(patch) = seq.next_element_seed(PatchSeed(self.0))? {
            patches.push(patch);
        }
        Ok(patches)
    }
}
