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


/// Bold toggle (`^B`).
pub const BOLD: char = '\u{0002}';

/// Color introducer (`^C`), optionally followed by `FG` or `FG,BG` digits.
pub const COLOR: char = '\u{0003}';

/// Reset all formatting (`^O`).
pub const RESET: char = '\u{000F}';

/// Italic toggle (`^V`).
///
/// Traditional clients use this code for reverse video. It is rendered as
/// italic here.
pub const ITALIC: char = '\u{0016}';

/// Underline toggle (`^_`).
pub const UNDERLINE: char = '\u{001F}';

/// Every control marker recognized by the scanner.
pub const CONTROL_MARKERS: &[char] = &[BOLD, COLOR, RESET, ITALIC, UNDERLINE];

/// Separator between the foreground and background halves of a color code.
pub const COLOR_SEPARATOR: char = ',';

/// Number of decimal digits in each half of a color code.
pub const COLOR_CODE_DIGITS: usize = 2;
