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


//! Rendering configuration.
//!
//! ```
//! use ircmarkup::{ColorNotation, MarkupConfig};
//!
//! let config = MarkupConfig::default()
//!     .with_color_notation(ColorNotation::Hex)
//!     .with_render_background(false);
//! ```

use crate::Color;

/// Controls how decoded formatting is rendered into markup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarkupConfig {
    /// How colors are written in `color` / `bgcolor` attributes
    pub color_notation: ColorNotation,
    /// Emit the `bgcolor` attribute for background colors
    pub render_background: bool,
}

impl MarkupConfig {
    /// Named colors with backgrounds
    pub fn named() -> MarkupConfig {
        MarkupConfig {
            color_notation: ColorNotation::Named,
            render_background: true,
        }
    }

    /// Hex colors with backgrounds
    pub fn hex() -> MarkupConfig {
        MarkupConfig {
            color_notation: ColorNotation::Hex,
            render_background: true,
        }
    }

    /// Set the color notation
    pub fn with_color_notation(mut self, notation: ColorNotation) -> Self {
        self.color_notation = notation;
        self
    }

    /// Enable or disable background color attributes
    pub fn with_render_background(mut self, enabled: bool) -> Self {
        self.render_background = enabled;
        self
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self::named()
    }
}

/// Notation used when writing a [`Color`] into markup.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColorNotation {
    /// HTML color names such as `Red` or `RoyalBlue`.
    #[default]
    Named,
    /// `#RRGGBB` values.
    Hex,
}

impl ColorNotation {
    /// Attribute value for `color` in this notation.
    pub fn render(self, color: Color) -> &'static str {
        match self {
            ColorNotation::Named => color.html_name(),
            ColorNotation::Hex => color.hex(),
        }
    }
}
