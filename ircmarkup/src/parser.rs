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


use crate::{CancelScope, FormattedTextBuilder, MarkupConfig, Scanner, Style, StyleKind, Token};
use tracing::instrument;

/// Converts an IRC message with formatting control codes into markup.
///
/// Returns `None` for `None`, since there is nothing to convert. Uses the
/// default [`MarkupConfig`].
///
/// ```
/// let html = ircmarkup::parse(Some("\x02bold\x02 \x0304red"));
/// assert_eq!(html.as_deref(), Some("<b>bold</b> <font color=\"Red\">red</font>"));
/// assert_eq!(ircmarkup::parse(None), None);
/// ```
pub fn parse(text: Option<&str>) -> Option<String> {
    parse_with_config(text, &MarkupConfig::default())
}

/// Converts an IRC message into markup rendered according to `config`.
pub fn parse_with_config(text: Option<&str>, config: &MarkupConfig) -> Option<String> {
    text.map(|text| render(text, config))
}

/// Converts a present IRC message into markup rendered according to `config`.
///
/// Never fails: malformed color codes are logged and skipped, unbalanced
/// toggles are closed at the end of the text.
#[instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn render(text: &str, config: &MarkupConfig) -> String {
    let mut builder = FormattedTextBuilder::with_capacity(config.clone(), text.len());
    for token in Scanner::new(text) {
        match token {
            Token::Literal(ch) => builder.append(ch),
            Token::Bold => toggle(&mut builder, Style::Bold),
            Token::Italic => toggle(&mut builder, Style::Italic),
            Token::Underline => toggle(&mut builder, Style::Underline),
            Token::Color(Some(format)) => builder.apply(Style::Color(format)),
            Token::Color(None) => builder.cancel(StyleKind::Color, CancelScope::Every),
            Token::Reset => builder.cancel_all(),
        }
    }
    builder.done()
}

fn toggle(builder: &mut FormattedTextBuilder, style: Style) {
    if builder.is_active(style.kind()) {
        builder.cancel(style.kind(), CancelScope::Innermost);
    } else {
        builder.apply(style);
    }
}
