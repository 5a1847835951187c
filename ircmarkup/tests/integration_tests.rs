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


//! Integration tests for message decoding through the public API

use ircmarkup::consts::{BOLD, COLOR, ITALIC, RESET, UNDERLINE};
use ircmarkup::{
    CancelScope, Color, ColorFormat, FormattedTextBuilder, MarkupConfig, Style, StyleKind,
    format_action, format_notice, parse, parse_with_config, strip_control_codes,
};

fn html(text: &str) -> String {
    parse(Some(text)).expect("present input yields output")
}

// ============================================================================
// Baseline Behavior
// ============================================================================

#[test]
fn test_absent_message_yields_absent_markup() {
    assert_eq!(parse(None), None);
}

#[test]
fn test_empty_message() {
    assert_eq!(parse(Some("")), Some(String::new()));
}

#[test]
fn test_plain_message_is_verbatim() {
    let message = "Hello, world! 12,34 -- ünïcödé";
    assert_eq!(html(message), message);
}

// ============================================================================
// Toggles and Reset
// ============================================================================

#[test]
fn test_paired_toggle_closes_span() {
    assert_eq!(html(&format!("{BOLD}x{BOLD}")), "<b>x</b>");
    assert_eq!(html(&format!("{BOLD}x{BOLD}y")), "<b>x</b>y");
}

#[test]
fn test_unpaired_toggle_is_closed_at_end() {
    assert_eq!(html(&format!("{ITALIC}x")), "<i>x</i>");
    assert_eq!(html(&format!("a{UNDERLINE}b")), "a<u>b</u>");
}

#[test]
fn test_reset_dominates_any_nesting_order() {
    assert_eq!(html(&format!("{BOLD}{ITALIC}x{RESET}y")), "<b><i>x</i></b>y");
    assert_eq!(html(&format!("{ITALIC}{BOLD}x{RESET}y")), "<i><b>x</b></i>y");
    assert_eq!(
        html(&format!("{UNDERLINE}{COLOR}09,01{BOLD}x{RESET}y")),
        "<u><font color=\"Lime\" bgcolor=\"Black\"><b>x</b></font></u>y"
    );
}

#[test]
fn test_crossing_toggles_are_renested() {
    assert_eq!(
        html(&format!("{BOLD}one {ITALIC}two{BOLD} three{ITALIC} four")),
        "<b>one <i>two</i></b><i> three</i> four"
    );
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_color_modulo_law() {
    for code in 0..100 {
        let expected = Color::PALETTE[code % 16];
        let rendered = html(&format!("{COLOR}{code:02}x"));
        assert_eq!(
            rendered,
            format!("<font color=\"{}\">x</font>", expected.html_name()),
            "color code {code:02}"
        );
    }
    assert_eq!(html(&format!("{COLOR}16x")), html(&format!("{COLOR}00x")));
}

#[test]
fn test_color_with_background() {
    assert_eq!(
        html(&format!("{COLOR}00,01inverted")),
        "<font color=\"White\" bgcolor=\"Black\">inverted</font>"
    );
}

#[test]
fn test_bare_color_introducer_cancels_color() {
    assert_eq!(
        html(&format!("{COLOR}04red{COLOR} plain")),
        "<font color=\"Red\">red</font> plain"
    );
}

#[test]
fn test_malformed_color_does_not_abort_message() {
    assert_eq!(html(&format!("{COLOR}zz rest")), "zz rest");
    assert_eq!(
        html(&format!("{BOLD}a{COLOR}zzb{BOLD}c")),
        "<b>azzb</b>c"
    );
}

#[test]
fn test_malformed_background_keeps_foreground() {
    assert_eq!(
        html(&format!("{COLOR}04,zzx")),
        "<font color=\"Red\">,zzx</font>"
    );
}

#[test]
fn test_truncated_trailing_control_code() {
    assert_eq!(html(&format!("{BOLD}text{COLOR}")), "<b>text</b>");
    assert_eq!(html(&format!("{BOLD}text{COLOR}0")), "<b>text0</b>");
    assert_eq!(
        html(&format!("{COLOR}04text{COLOR}1")),
        "<font color=\"Red\">text</font>1"
    );
}

#[test]
fn test_hex_configuration() {
    let config = MarkupConfig::hex();
    assert_eq!(
        parse_with_config(Some(format!("{COLOR}12,08x").as_str()), &config).as_deref(),
        Some("<font color=\"#0000FC\" bgcolor=\"#FFFF00\">x</font>")
    );
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_redundant_cancel() {
    let mut builder = FormattedTextBuilder::new();
    builder.append_str("x");
    builder.cancel(StyleKind::Bold, CancelScope::Innermost);
    builder.cancel(StyleKind::Color, CancelScope::Every);
    builder.cancel_all();
    assert_eq!(builder.done(), "x");
}

#[test]
fn test_builder_background_only_color() {
    let mut builder = FormattedTextBuilder::new();
    builder.apply(Style::Color(ColorFormat::new(None, Some(Color::Teal))));
    builder.append('x');
    assert!(builder.is_active(StyleKind::Color));
    assert_eq!(builder.done(), "<font bgcolor=\"Teal\">x</font>");
}

// ============================================================================
// Stripping and Framing
// ============================================================================

#[test]
fn test_strip_matches_rendered_text() {
    let message = format!("{BOLD}hi{BOLD} {COLOR}04,01there{RESET}!");
    assert_eq!(strip_control_codes(&message), "hi there!");
}

#[test]
fn test_framing_rendered_markup() {
    let body = html(&format!("{BOLD}waves"));
    assert_eq!(format_action(&body, "carol"), "<b>*carol</b> <b>waves</b>");
    assert_eq!(format_notice(&body, "dave"), "<i>dave</i>: <b>waves</b>");
}
