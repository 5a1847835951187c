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


use crate::consts::{BOLD, COLOR, COLOR_CODE_DIGITS, COLOR_SEPARATOR, ITALIC, RESET, UNDERLINE};
use crate::{Color, ColorCodeError, ColorCodeResult, ColorFormat};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// A single unit of a formatted message, as classified by the [`Scanner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// Displayable character.
    Literal(char),
    /// Bold toggle (`^B`).
    Bold,
    /// Italic toggle (`^V`).
    Italic,
    /// Underline toggle (`^_`).
    Underline,
    /// Color introducer (`^C`) with its decoded color code.
    ///
    /// `None` when no color could be decoded, which cancels the current color.
    Color(Option<ColorFormat>),
    /// Reset all formatting (`^O`).
    Reset,
}

/// Splits a message into [`Token`]s, decoding color codes on the way.
///
/// Every character is visited once. A color introducer additionally consumes
/// the digits of its color code: two characters for a foreground, five for
/// `FG,BG`. A malformed color code consumes nothing, so the characters that
/// follow the introducer come out as literals.
///
/// ```
/// use ircmarkup::{Color, ColorFormat, Scanner, Token};
///
/// let tokens: Vec<Token> = Scanner::new("\x0304!").collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Color(Some(ColorFormat::foreground(Color::Red))),
///         Token::Literal('!'),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `text`.
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// The part of the input not yet scanned.
    pub fn remainder(&self) -> &'a str {
        self.rest
    }

    fn scan_color(&mut self) -> Option<ColorFormat> {
        match parse_color_code(self.rest) {
            Ok((format, consumed)) => {
                // Color codes are ASCII, so characters and bytes line up.
                self.rest = &self.rest[consumed..];
                Some(format)
            }
            Err(err) => {
                debug!("Invalid color code {:?}: {}", self.rest, err);
                None
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut chars = self.rest.chars();
        let ch = chars.next()?;
        self.rest = chars.as_str();

        let token = match ch {
            BOLD => Token::Bold,
            ITALIC => Token::Italic,
            UNDERLINE => Token::Underline,
            COLOR => Token::Color(self.scan_color()),
            RESET => Token::Reset,
            ch => Token::Literal(ch),
        };
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(!self.rest.is_empty()), Some(self.rest.len()))
    }
}

impl FusedIterator for Scanner<'_> {}

/// Decodes the color code that follows a `^C` introducer.
///
/// `text` starts right after the introducer. On success returns the decoded
/// format and the number of characters it occupies: 2 for `FG`, 5 for
/// `FG,BG`. Color numbers wrap around the 16-color palette.
///
/// The foreground is mandatory; its failure is returned as the error. A
/// missing or malformed background is not an error, the code is then
/// foreground only.
///
/// ```
/// use ircmarkup::{parse_color_code, Color, ColorFormat};
///
/// let (format, consumed) = parse_color_code("04,02text").unwrap();
/// assert_eq!(format, ColorFormat::new(Some(Color::Red), Some(Color::Navy)));
/// assert_eq!(consumed, 5);
/// ```
pub fn parse_color_code(text: &str) -> ColorCodeResult<(ColorFormat, usize)> {
    let foreground = parse_color_number(text)?;

    match parse_background(&text[COLOR_CODE_DIGITS..]) {
        Ok(background) => Ok((
            ColorFormat::new(Some(foreground), Some(background)),
            COLOR_CODE_DIGITS * 2 + 1,
        )),
        Err(err) => {
            trace!("Foreground color only: {}", err);
            Ok((ColorFormat::foreground(foreground), COLOR_CODE_DIGITS))
        }
    }
}

/// Parses the separator and digits of a background color.
fn parse_background(text: &str) -> ColorCodeResult<Color> {
    let mut chars = text.chars();
    match chars.next() {
        Some(COLOR_SEPARATOR) => {
            parse_color_number(chars.as_str()).map_err(|err| match err {
                ColorCodeError::Truncated { needed, available } => ColorCodeError::Truncated {
                    needed: needed + 1,
                    available: available + 1,
                },
                err => err,
            })
        }
        Some(found) => Err(ColorCodeError::MissingSeparator { found }),
        None => Err(ColorCodeError::Truncated {
            needed: COLOR_CODE_DIGITS + 1,
            available: 0,
        }),
    }
}

/// Parses the two leading decimal digits of `text` as a palette color.
fn parse_color_number(text: &str) -> ColorCodeResult<Color> {
    let digits: String = text.chars().take(COLOR_CODE_DIGITS).collect();
    let available = digits.chars().count();
    if available < COLOR_CODE_DIGITS {
        return Err(ColorCodeError::Truncated {
            needed: COLOR_CODE_DIGITS,
            available,
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ColorCodeError::NotDecimal { found: digits });
    }

    let code = digits
        .bytes()
        .fold(0usize, |acc, b| acc * 10 + usize::from(b - b'0'));
    let index = code % Color::PALETTE.len();
    Color::from_index(index).ok_or(ColorCodeError::UnknownColor { index })
}
