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


/// A color from the 16-entry mIRC palette.
///
/// The discriminant of each variant is its color number in the palette, so
/// the color code `04` selects [`Color::Red`]. Codes beyond the palette wrap
/// around: the color number `d` selects `Color::PALETTE[d % 16]`, which makes
/// `16` an alias of `00` and `99` an alias of `03`.
///
/// # Rendering
///
/// Each color has an HTML color name ([`Color::html_name`]) and a `#RRGGBB`
/// value ([`Color::hex`]). Which one ends up in the markup is selected by
/// [`ColorNotation`](crate::ColorNotation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Color {
    /// White - Color #0.
    White = 0,
    /// Black - Color #1.
    Black = 1,
    /// Navy blue - Color #2.
    Navy = 2,
    /// Green - Color #3.
    Green = 3,
    /// Red - Color #4.
    Red = 4,
    /// Maroon (brown) - Color #5.
    Maroon = 5,
    /// Purple - Color #6.
    Purple = 6,
    /// Orange - Color #7.
    Orange = 7,
    /// Yellow - Color #8.
    Yellow = 8,
    /// Lime (light green) - Color #9.
    Lime = 9,
    /// Teal - Color #10.
    Teal = 10,
    /// Cyan (light cyan) - Color #11.
    Cyan = 11,
    /// Royal blue (light blue) - Color #12.
    RoyalBlue = 12,
    /// Fuchsia (pink) - Color #13.
    Fuchsia = 13,
    /// Grey - Color #14.
    Grey = 14,
    /// Silver (light grey) - Color #15.
    Silver = 15,
}

impl Color {
    /// The palette in color number order.
    pub const PALETTE: [Color; 16] = [
        Color::White,
        Color::Black,
        Color::Navy,
        Color::Green,
        Color::Red,
        Color::Maroon,
        Color::Purple,
        Color::Orange,
        Color::Yellow,
        Color::Lime,
        Color::Teal,
        Color::Cyan,
        Color::RoyalBlue,
        Color::Fuchsia,
        Color::Grey,
        Color::Silver,
    ];

    /// Looks up a palette entry by its exact index.
    ///
    /// Returns `None` for indices outside `0..16`. Use [`Color::from_code`]
    /// for color numbers taken from a message.
    pub fn from_index(index: usize) -> Option<Color> {
        Self::PALETTE.get(index).copied()
    }

    /// Maps a color number to a palette entry, wrapping around the palette.
    pub fn from_code(code: usize) -> Color {
        Self::PALETTE[code % Self::PALETTE.len()]
    }

    /// The color number of this color.
    pub fn index(self) -> usize {
        self as usize
    }

    /// HTML color name used in `color` / `bgcolor` attributes.
    pub fn html_name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
            Color::Navy => "Navy",
            Color::Green => "Green",
            Color::Red => "Red",
            Color::Maroon => "Maroon",
            Color::Purple => "Purple",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Lime => "Lime",
            Color::Teal => "Teal",
            Color::Cyan => "Cyan",
            Color::RoyalBlue => "RoyalBlue",
            Color::Fuchsia => "Fuchsia",
            Color::Grey => "Grey",
            Color::Silver => "Silver",
        }
    }

    /// The customary mIRC RGB value, as `#RRGGBB`.
    pub fn hex(self) -> &'static str {
        match self {
            Color::White => "#FFFFFF",
            Color::Black => "#000000",
            Color::Navy => "#00007F",
            Color::Green => "#009300",
            Color::Red => "#FF0000",
            Color::Maroon => "#7F0000",
            Color::Purple => "#9C009C",
            Color::Orange => "#FC7F00",
            Color::Yellow => "#FFFF00",
            Color::Lime => "#00FC00",
            Color::Teal => "#009393",
            Color::Cyan => "#00FFFF",
            Color::RoyalBlue => "#0000FC",
            Color::Fuchsia => "#FF00FF",
            Color::Grey => "#7F7F7F",
            Color::Silver => "#D2D2D2",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order_matches_discriminants() {
        for (index, color) in Color::PALETTE.iter().enumerate() {
            assert_eq!(color.index(), index);
            assert_eq!(Color::from_index(index), Some(*color));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Color::from_index(16), None);
        assert_eq!(Color::from_index(usize::MAX), None);
    }

    #[test]
    fn test_from_code_wraps() {
        assert_eq!(Color::from_code(0), Color::White);
        assert_eq!(Color::from_code(4), Color::Red);
        assert_eq!(Color::from_code(15), Color::Silver);
        assert_eq!(Color::from_code(16), Color::White);
        assert_eq!(Color::from_code(20), Color::Red);
        assert_eq!(Color::from_code(99), Color::Green);
    }

    #[test]
    fn test_display_is_two_digit_code() {
        assert_eq!(Color::White.to_string(), "00");
        assert_eq!(Color::RoyalBlue.to_string(), "12");
    }

    #[test]
    fn test_names_and_hex() {
        assert_eq!(Color::Navy.html_name(), "Navy");
        assert_eq!(Color::Red.hex(), "#FF0000");
        for color in Color::PALETTE {
            assert_eq!(color.hex().len(), 7);
            assert!(color.hex().starts_with('#'));
        }
    }
}
