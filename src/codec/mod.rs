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

//! Wire formats for GenMDM patches
//!
//! Each submodule is a self-contained parse/generate pair. [`Format`] picks
//! one from a file extension for callers that deal in files.

pub mod dmp;
pub mod genm;
pub mod json;
pub mod midi_cc;
pub mod tfi;
pub mod y12;

use std::path::Path;

use crate::error::{PatchError, Result};
use crate::patch::{Patch, ValidationMode};
use crate::registry::OperatorField;

/// Largest TotalLevel; the binary formats store `TOTAL_LEVEL_MAX - level`
const TOTAL_LEVEL_MAX: u8 = 127;

/// Byte to patch value for TFI/DMP operator fields
pub(crate) fn decode_field(field: OperatorField, byte: u8) -> i32 {
    match field {
        OperatorField::TotalLevel => TOTAL_LEVEL_MAX as i32 - byte as i32,
        _ => byte as i32,
    }
}

/// Patch value to byte for TFI/DMP operator fields
pub(crate) fn encode_field(field: OperatorField, value: u8) -> u8 {
    match field {
        OperatorField::TotalLevel => TOTAL_LEVEL_MAX - value,
        _ => value,
    }
}

/// File formats with a patch codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// GenMDM text instrument list
    GenMdm,
    /// TFM Music Maker instrument
    Tfi,
    /// DefleMask instrument
    Dmp,
    /// Gens KMod instrument dump
    Y12,
    /// JSON array of patches
    Json,
}

impl Format {
    /// Match a file extension, ignoring case
    pub fn from_extension(extension: &str) -> Option<Format> {
        match extension.to_ascii_lowercase().as_str() {
            "genm" | "txt" => Some(Format::GenMdm),
            "tfi" => Some(Format::Tfi),
            "dmp" => Some(Format::Dmp),
            "y12" => Some(Format::Y12),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Format named by the extension of `path`
    pub fn from_path(path: &Path) -> Option<Format> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }

    /// Whether one file can hold more than one patch
    pub fn is_multi_patch(self) -> bool {
        matches!(self, Format::GenMdm | Format::Json)
    }

    /// Parse file contents into patches.
    pub fn parse(self, data: &[u8], mode: ValidationMode) -> Result<Vec<Patch>> {
        let patches = match self {
            Format::GenMdm => genm::parse_with_mode(&String::from_utf8_lossy(data), mode)?,
            Format::Json => json::parse_with_mode(&String::from_utf8_lossy(data), mode)?,
            Format::Tfi => vec![tfi::parse_with_mode(data, mode)?],
            Format::Dmp => vec![dmp::parse_with_mode(data, mode)?],
            Format::Y12 => vec![y12::parse_with_mode(data, mode)?],
        };

        Ok(patches)
    }

    /// Serialize patches into file contents.
    ///
    /// Single-patch formats write the first patch and log the rest as
    /// dropped.
    pub fn generate(self, patches: &[Patch]) -> Result<Vec<u8>> {
        if self.is_multi_patch() {
            let text = match self {
                Format::Json => json::generate(patches)?,
                _ => genm::generate(patches)?,
            };
            return Ok(text.into_bytes());
        }

        let (patch, rest) = patches.split_first().ok_or(PatchError::EmptyBatch)?;
        if !rest.is_empty() {
            log::warn!(
                "{:?} holds a single patch, dropping {} after {:?}",
                self,
                rest.len(),
                patch.name()
            );
        }

        let data = match self {
            Format::Tfi => tfi::generate(patch)?.to_vec(),
            Format::Dmp => dmp::generate(patch)?.to_vec(),
            _ => y12::generate(patch)?.to_vec(),
        };

        Ok(data)
    }
}
