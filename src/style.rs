// Inline-style strings written by the frame loop.
// Kept free of `web_sys` so the formatting can be tested on the host.

use site_core::{RevealFrame, RevealTransition};

#[inline]
pub fn translate_x(px: f32) -> String {
    format!("translate3d({:.2}px, 0px, 0px)", px)
}

pub fn reveal_style(frame: &RevealFrame) -> String {
    format!(
        "opacity: {:.3}; transform: translate({:.2}px, {:.2}px) scale({:.3});",
        frame.opacity, frame.translate_x, frame.translate_y, frame.scale
    )
}

#[inline]
pub fn slide_min_width(px: f32) -> String {
    format!("{:.2}px", px.max(0.0))
}

pub fn loader_bar_width(percent: f32) -> String {
    format!("{:.2}%", clamp_percent(percent))
}

pub fn loader_label(percent: f32) -> String {
    format!("{:.2}% loaded", clamp_percent(percent))
}

#[inline]
fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Parse a `data-reveal` value.
///
/// Accepted forms: `fade-up`, `fade-up:<delay>`, `grow:<delay>`, `stat:<index>`,
/// `division:<index>`.
pub fn parse_reveal(value: &str) -> Option<RevealTransition> {
    let (kind, arg) = match value.trim().split_once(':') {
        Some((k, a)) => (k.trim(), Some(a.trim())),
        None => (value.trim(), None),
    };
    let delay = || arg.map_or(Some(0.0), |a| a.parse::<f32>().ok().filter(|d| d.is_finite()));
    let index = || arg.and_then(|a| a.parse::<usize>().ok());
    match kind {
        "fade-up" => Some(RevealTransition::fade_up().delayed(delay()?)),
        "grow" => Some(RevealTransition::grow(0.8, 0.6).delayed(delay()?)),
        "stat" => Some(RevealTransition::stat_card(index()?)),
        "division" => Some(RevealTransition::division_card(index()?)),
        _ => None,
    }
}
