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


use crate::{ActiveStyles, MarkupConfig, Style, StyleKind};

/// How far [`FormattedTextBuilder::cancel`] unwinds the span stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CancelScope {
    /// Stop at the innermost open span of the kind. Used when a toggle
    /// marker switches a style off.
    #[default]
    Innermost,
    /// Close every open span of the kind, unwinding until none is left.
    Every,
}

/// Accumulates markup while tracking which style spans are open.
///
/// Open spans are kept on a stack in the order they were opened, so the
/// emitted tags always nest properly. Closing a span that is not the
/// innermost one first closes the spans nested inside it and then reopens
/// them, e.g. closing bold in `<b><i>x` yields `<b><i>x</i></b><i>`.
///
/// ```
/// use ircmarkup::{CancelScope, FormattedTextBuilder, Style, StyleKind};
///
/// let mut builder = FormattedTextBuilder::new();
/// builder.apply(Style::Bold);
/// builder.append_str("bold");
/// builder.cancel(StyleKind::Bold, CancelScope::Innermost);
/// builder.append_str(" plain");
/// assert_eq!(builder.done(), "<b>bold</b> plain");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormattedTextBuilder {
    config: MarkupConfig,
    text: String,
    stack: Vec<Style>,
    active: ActiveStyles,
}

impl FormattedTextBuilder {
    /// Creates an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder rendering with `config`.
    pub fn with_config(config: MarkupConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates an empty builder with room for `capacity` bytes of output.
    pub fn with_capacity(config: MarkupConfig, capacity: usize) -> Self {
        Self {
            config,
            text: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns `true` if a span of `kind` is open.
    pub fn is_active(&self, kind: StyleKind) -> bool {
        self.active.is_active(kind)
    }

    /// Snapshot of the open styles.
    pub fn active(&self) -> ActiveStyles {
        self.active
    }

    /// Opens a span for `style`.
    ///
    /// A span of the same kind that is already open is closed first, so a
    /// new color replaces the current one.
    pub fn apply(&mut self, style: Style) {
        if self.is_active(style.kind()) {
            self.cancel(style.kind(), CancelScope::Every);
        }
        self.open(style);
    }

    /// Closes the open span of `kind`. Does nothing if none is open.
    ///
    /// Spans opened after it are closed before it and reopened after it, in
    /// their original order.
    pub fn cancel(&mut self, kind: StyleKind, scope: CancelScope) {
        if !self.is_active(kind) {
            return;
        }

        let mut rewind = Vec::new();
        while let Some(current) = self.stack.pop() {
            current.write_close(&mut self.text);
            if current.kind() == kind {
                if scope == CancelScope::Innermost || !self.stack.iter().any(|s| s.kind() == kind)
                {
                    break;
                }
            } else {
                rewind.push(current);
            }
        }
        self.active.unset(kind);

        while let Some(style) = rewind.pop() {
            self.open(style);
        }
    }

    /// Closes every open span, innermost first.
    pub fn cancel_all(&mut self) {
        while let Some(current) = self.stack.pop() {
            current.write_close(&mut self.text);
        }
        self.active = ActiveStyles::default();
    }

    /// Appends a literal character inside the open spans.
    pub fn append(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Appends literal text inside the open spans.
    pub fn append_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Closes all open spans and returns the finished markup.
    pub fn done(mut self) -> String {
        self.cancel_all();
        self.text
    }

    fn open(&mut self, style: Style) {
        style.write_open(&mut self.text, &self.config);
        self.active.set(&style);
        self.stack.push(style);
    }
}
