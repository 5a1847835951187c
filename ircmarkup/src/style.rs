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


use crate::{Color, MarkupConfig};

/// The fixed set of style kinds a span can have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Bold text, rendered as `<b>`.
    Bold,
    /// Italic text, rendered as `<i>`.
    Italic,
    /// Underlined text, rendered as `<u>`.
    Underline,
    /// Foreground and/or background color, rendered as `<font>`.
    Color,
}

/// A style span that can be opened in a
/// [`FormattedTextBuilder`](crate::FormattedTextBuilder).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// Bold span.
    Bold,
    /// Italic span.
    Italic,
    /// Underline span.
    Underline,
    /// Color span.
    Color(ColorFormat),
}

impl Style {
    /// The kind of this style.
    pub fn kind(&self) -> StyleKind {
        match self {
            Style::Bold => StyleKind::Bold,
            Style::Italic => StyleKind::Italic,
            Style::Underline => StyleKind::Underline,
            Style::Color(_) => StyleKind::Color,
        }
    }

    /// Writes the opening tag of this style into `out`.
    pub fn write_open(&self, out: &mut String, config: &MarkupConfig) {
        match self {
            Style::Bold => out.push_str("<b>"),
            Style::Italic => out.push_str("<i>"),
            Style::Underline => out.push_str("<u>"),
            Style::Color(format) => format.write_open(out, config),
        }
    }

    /// Writes the closing tag of this style into `out`.
    pub fn write_close(&self, out: &mut String) {
        out.push_str(self.close_tag());
    }

    /// The closing tag of this style.
    pub fn close_tag(&self) -> &'static str {
        match self {
            Style::Bold => "</b>",
            Style::Italic => "</i>",
            Style::Underline => "</u>",
            Style::Color(_) => "</font>",
        }
    }
}

/// A color span: an optional foreground and an optional background.
///
/// Spans decoded from a message always carry a foreground; a background-only
/// format can still be applied programmatically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorFormat {
    /// Text color
    pub foreground: Option<Color>,
    /// Background color
    pub background: Option<Color>,
}

impl ColorFormat {
    /// Creates a color format from its two halves.
    pub fn new(foreground: Option<Color>, background: Option<Color>) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Foreground only.
    pub fn foreground(color: Color) -> Self {
        Self::new(Some(color), None)
    }

    /// Returns `true` if neither half is set.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none()
    }

    /// Writes `<font color=".." bgcolor="..">`, leaving out unset halves.
    pub fn write_open(&self, out: &mut String, config: &MarkupConfig) {
        out.push_str("<font");
        if let Some(fg) = self.foreground {
            out.push_str(" color=\"");
            out.push_str(config.color_notation.render(fg));
            out.push('"');
        }
        if let Some(bg) = self.background.filter(|_| config.render_background) {
            out.push_str(" bgcolor=\"");
            out.push_str(config.color_notation.render(bg));
            out.push('"');
        }
        out.push('>');
    }
}

/// Snapshot of which styles are currently open.
///
/// One flag per toggle style plus the current color, so callers query by
/// [`StyleKind`] against a fixed record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActiveStyles {
    /// Bold span open
    pub bold: bool,
    /// Italic span open
    pub italic: bool,
    /// Underline span open
    pub underline: bool,
    /// Open color span, if any
    pub color: Option<ColorFormat>,
}

impl ActiveStyles {
    /// Returns `true` if a span of `kind` is open.
    pub fn is_active(&self, kind: StyleKind) -> bool {
        match kind {
            StyleKind::Bold => self.bold,
            StyleKind::Italic => self.italic,
            StyleKind::Underline => self.underline,
            StyleKind::Color => self.color.is_some(),
        }
    }

    /// Returns `true` if no span is open.
    pub fn is_plain(&self) -> bool {
        *self == ActiveStyles::default()
    }

    pub(crate) fn set(&mut self, style: &Style) {
        match style {
            Style::Bold => self.bold = true,
            Style::Italic => self.italic = true,
            Style::Underline => self.underline = true,
            Style::Color(format) => self.color = Some(*format),
        }
    }

    pub(crate) fn unset(&mut self, kind: StyleKind) {
        match kind {
            StyleKind::Bold => self.bold = false,
            StyleKind::Italic => self.italic = false,
            StyleKind::Underline => self.underline = false,
            StyleKind::Color => self.color = None,
        }
    }
}
