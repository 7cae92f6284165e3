// Inline-style formatting, checked on the host.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use site_core::{RevealFrame, RevealTransition};
use style::*;

#[test]
fn translate_uses_two_decimals() {
    assert_eq!(translate_x(-1600.0), "translate3d(-1600.00px, 0px, 0px)");
    assert_eq!(translate_x(-412.345), "translate3d(-412.35px, 0px, 0px)");
}

#[test]
fn settled_reveal_style_is_identity() {
    assert_eq!(
        reveal_style(&RevealFrame::SETTLED),
        "opacity: 1.000; transform: translate(0.00px, 0.00px) scale(1.000);"
    );
}

#[test]
fn hidden_fade_up_starts_below_and_transparent() {
    let frame = RevealTransition::fade_up().sample(None);
    assert_eq!(
        reveal_style(&frame),
        "opacity: 0.000; transform: translate(0.00px, 30.00px) scale(1.000);"
    );
}

#[test]
fn loader_text_is_clamped() {
    assert_eq!(loader_label(42.0), "42.00% loaded");
    assert_eq!(loader_label(130.0), "100.00% loaded");
    assert_eq!(loader_label(f32::NAN), "0.00% loaded");
    assert_eq!(loader_bar_width(-5.0), "0.00%");
    assert_eq!(loader_bar_width(57.5), "57.50%");
}

#[test]
fn slide_width_never_negative() {
    assert_eq!(slide_min_width(320.0), "320.00px");
    assert_eq!(slide_min_width(-1.0), "0.00px");
}

#[test]
fn parses_reveal_presets() {
    assert_eq!(parse_reveal("fade-up"), Some(RevealTransition::fade_up()));
    assert_eq!(
        parse_reveal(" fade-up : 0.4 "),
        Some(RevealTransition::fade_up().delayed(0.4))
    );
    assert_eq!(parse_reveal("stat:2"), Some(RevealTransition::stat_card(2)));
    assert_eq!(
        parse_reveal("division:1"),
        Some(RevealTransition::division_card(1))
    );
    let grow = parse_reveal("grow:0.2").map(|t| (t.from.scale, t.delay_sec));
    assert_eq!(grow, Some((0.8, 0.2)));
}

#[test]
fn rejects_unknown_or_malformed_reveals() {
    assert_eq!(parse_reveal("spin"), None);
    assert_eq!(parse_reveal("stat"), None);
    assert_eq!(parse_reveal("stat:x"), None);
    assert_eq!(parse_reveal("fade-up:soon"), None);
    assert_eq!(parse_reveal("fade-up:inf"), None);
}
