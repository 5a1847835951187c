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


//! Decodes IRC text formatting control codes into HTML-like markup.
//!
//! Messages on IRC carry inline control characters for bold (`^B`), italic
//! (`^V`), underline (`^_`), color (`^C` followed by `FG` or `FG,BG` digits)
//! and reset (`^O`). [`parse`] scans a message once, tracks the open styles
//! in a [`FormattedTextBuilder`] and emits properly nested `<b>`, `<i>`,
//! `<u>` and `<font>` tags.

mod builder;
mod color;
mod config;
pub mod consts;
pub mod frame;
mod parser;
mod result;
mod scanner;
mod style;
pub mod utility;

pub use self::builder::{CancelScope, FormattedTextBuilder};
pub use self::color::Color;
pub use self::config::{ColorNotation, MarkupConfig};
pub use self::frame::{format_action, format_message, format_notice};
pub use self::parser::{parse, parse_with_config, render};
pub use self::result::{ColorCodeError, ColorCodeResult};
pub use self::scanner::{Scanner, Token, parse_color_code};
pub use self::style::{ActiveStyles, ColorFormat, Style, StyleKind};
pub use self::utility::{has_control_codes, strip_control_codes};
