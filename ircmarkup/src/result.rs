//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Error types for the ircmarkup crate.
//!
//! Color code failures never escape [`parse`](crate::parse). They are
//! recovered inside the scanner and only observable through `tracing`
//! output, or by calling [`parse_color_code`](crate::parse_color_code)
//! directly.

use thiserror::Error;

/// Result type alias for color code parsing.
pub type ColorCodeResult<T> = Result<T, ColorCodeError>;

/// Reasons a color code following `^C` could not be interpreted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorCodeError {
    /// The text ended before the color code was complete.
    #[error("color code truncated: needed {needed} characters, {available} available")]
    Truncated {
        /// Characters required to finish the code
        needed: usize,
        /// Characters left in the input
        available: usize,
    },

    /// The color code contained something other than decimal digits.
    #[error("invalid color code: {found:?} is not a decimal color number")]
    NotDecimal {
        /// The offending characters
        found: String,
    },

    /// No `,` separator where a background color would start.
    #[error("no color separator present (found {found:?}), hence no background color")]
    MissingSeparator {
        /// The character found instead of the separator
        found: char,
    },

    /// The color index does not name a palette entry.
    #[error("color value {index} is not a known color")]
    UnknownColor {
        /// The reduced palette index
        index: usize,
    },
}

impl ColorCodeError {
    /// Check if the error was caused by the input ending early
    pub fn is_truncation(&self) -> bool {
        matches!(self, ColorCodeError::Truncated { .. })
    }
}
