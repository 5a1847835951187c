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


use crate::consts::CONTROL_MARKERS;
use crate::{Scanner, Token};
use std::borrow::Cow;

/// Returns `true` if `str` contains any IRC formatting control marker.
pub fn has_control_codes(str: &str) -> bool {
    str.contains(CONTROL_MARKERS)
}

/// Removes IRC formatting control codes from a string.
///
/// Bold, italic, underline and reset markers are dropped, as are color
/// introducers together with the color code digits they consume. Digits that
/// do not form a valid color code are kept as text, exactly as
/// [`parse`](crate::parse) would keep them.
///
/// # Returns
///
/// - `Cow::Borrowed(str)` if the input contains no control markers
/// - `Cow::Owned(String)` with the markers removed otherwise
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use ircmarkup::strip_control_codes;
///
/// assert_eq!(strip_control_codes("\x02bold\x02 \x0304,01red"), "bold red");
///
/// let result = strip_control_codes("Plain Text");
/// assert!(matches!(result, Cow::Borrowed(_)));
/// ```
pub fn strip_control_codes(str: &str) -> Cow<'_, str> {
    if !has_control_codes(str) {
        return Cow::Borrowed(str);
    }

    let stripped = Scanner::new(str)
        .filter_map(|token| match token {
            Token::Literal(ch) => Some(ch),
            _ => None,
        })
        .collect();
    Cow::Owned(stripped)
}
