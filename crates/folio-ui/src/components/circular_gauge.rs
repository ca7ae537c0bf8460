//! Circular Gauge Component
//!
//! Animated circular progress ring used for skill levels.

use dioxus::prelude::*;

const RADIUS: f64 = 45.0;

/// Fraction of the ring to fill for `value` within `[min, max]`.
///
/// Values outside the range are clamped; an empty range reads as zero.
pub fn gauge_fraction(min: f64, max: f64, value: f64) -> f64 {
    if !(max > min) {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Stroke dash values for an SVG circle of radius `RADIUS`
fn dash(fraction: f64) -> (f64, f64) {
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let filled = circumference * fraction;
    (filled, circumference - filled)
}

/// Circular progress gauge with the percentage in the middle
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CircularGauge { value: 80.0, label: "Python Programming" }
/// }
/// ```
#[component]
pub fn CircularGauge(
    value: f64,
    #[props(default = 0.0)] min: f64,
    #[props(default = 100.0)] max: f64,
    #[props(into)] label: String,
    #[props(default = "rgb(79, 70, 229)".to_string(), into)] primary_color: String,
    #[props(default = "rgba(79, 70, 229, 0.2)".to_string(), into)] secondary_color: String,
) -> Element {
    let fraction = gauge_fraction(min, max, value);
    let percent = (fraction * 100.0).round() as u32;
    let (filled, rest) = dash(fraction);

    rsx! {
        div { class: "gauge",
            svg {
                class: "gauge__ring",
                view_box: "0 0 100 100",
                role: "img",
                "aria-label": "{label}: {percent}%",
                circle {
                    cx: "50",
                    cy: "50",
                    r: "{RADIUS}",
                    fill: "none",
                    stroke: "{secondary_color}",
                    stroke_width: "10",
                }
                circle {
                    class: "gauge__value",
                    cx: "50",
                    cy: "50",
                    r: "{RADIUS}",
                    fill: "none",
                    stroke: "{primary_color}",
                    stroke_width: "10",
                    stroke_linecap: "round",
                    stroke_dasharray: "{filled:.2} {rest:.2}",
                    transform: "rotate(-90 50 50)",
                }
            }
            span { class: "gauge__percent", "{percent}" }
            p { class: "gauge__label", "{label}" }
        }
    }
}
