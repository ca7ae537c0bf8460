//! Accent Text Components
//!
//! Headline decoration: `AuroraText` runs a moving color gradient through
//! its glyphs, `SparklesText` scatters twinkling stars around its content.

use dioxus::prelude::*;
use rand::Rng;

/// Text filled with a slowly drifting accent gradient
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     h2 { class: "section__title", AuroraText { "About" } }
/// }
/// ```
#[component]
pub fn AuroraText(
    children: Element,
    /// Seconds for one pass of the gradient
    #[props(default = 8.0)]
    speed: f64,
) -> Element {
    let style = format!("animation-duration: {}s;", speed);

    rsx! {
        span { class: "aurora-text", style: "{style}", {children} }
    }
}

/// One star around a [`SparklesText`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    /// Horizontal position, percent of the text box
    pub x: f64,
    /// Vertical position, percent of the text box
    pub y: f64,
    /// Seconds before the twinkle starts
    pub delay: f64,
    pub scale: f64,
}

/// Scatter `count` sparkles over (and slightly past) the text box.
pub fn scatter_sparkles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Sparkle> {
    (0..count)
        .map(|_| Sparkle {
            x: rng.random_range(-5.0..105.0),
            y: rng.random_range(-10.0..110.0),
            delay: rng.random_range(0.0..1.5),
            scale: rng.random_range(0.4..1.0),
        })
        .collect()
}

/// Content with stars twinkling around it
#[component]
pub fn SparklesText(
    children: Element,
    #[props(default = 6)] count: usize,
    #[props(default)] class: Option<String>,
) -> Element {
    let stars: Vec<String> = use_hook(|| scatter_sparkles(count, &mut rand::rng()))
        .iter()
        .map(|s| {
            format!(
                "left: {:.1}%; top: {:.1}%; animation-delay: {:.2}s; --sparkle-scale: {:.2};",
                s.x, s.y, s.delay, s.scale
            )
        })
        .collect();
    let class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("sparkles-text {}", extra),
        _ => "sparkles-text".to_string(),
    };

    rsx! {
        span { class: "{class}",
            for (index, style) in stars.into_iter().enumerate() {
                span {
                    key: "{index}",
                    class: "sparkles-text__star",
                    "aria-hidden": "true",
                    style: "{style}",
                    "✦"
                }
            }
            span { class: "sparkles-text__content", {children} }
        }
    }
}
