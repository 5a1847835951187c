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


//! Message framing for rendered markup.
//!
//! These helpers wrap already rendered markup (see [`parse`](crate::parse))
//! for display. They do not look inside `message`.

/// Formats a normal message. The markup is used as is.
pub fn format_message(message: &str) -> String {
    message.to_string()
}

/// Formats a notice: the sender in italics, followed by the message.
pub fn format_notice(message: &str, user: &str) -> String {
    format!("<i>{user}</i>: {message}")
}

/// Formats an action (`/me`): `*user` in bold, followed by the message.
pub fn format_action(message: &str, user: &str) -> String {
    format!("<b>*{user}</b> {message}")
}
