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

//! GenMDM instrument patch toolkit.
//!
//! Reads and writes 4-operator YM2612 (Sega Genesis) FM patches in the
//! formats used around the GenMDM cartridge: GenMDM text instrument lists,
//! TFI, DefleMask DMP, Gens KMod Y12 and GenMDM MIDI CC maps.
//!
//! Every codec parses into the same [`Patch`], whose fields are validated
//! against the static [`registry`].

#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod pack;
pub mod patch;
pub mod registry;
pub mod rescale;

pub use codec::midi_cc::CcMap;
pub use codec::Format;
pub use error::{PatchError, Result};
pub use patch::{Patch, ValidationMode};
pub use registry::{OperatorField, Parameter, NUM_OPERATORS};
