//! Blur Fade Component
//!
//! Content fades in from a blurred, slightly offset position. Sections of the
//! page stagger their fade-ins by multiples of [`BLUR_FADE_DELAY`].

use dioxus::prelude::*;

/// Base stagger step between page sections, in seconds
pub const BLUR_FADE_DELAY: f64 = 0.04;

/// Timing and offset of one fade-in
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FadeTiming {
    /// Extra delay on top of the base step, in seconds
    pub delay: f64,
    /// Animation length, in seconds
    pub duration: f64,
    /// Vertical travel, in pixels
    pub y_offset: f64,
    /// Initial blur radius, in pixels
    pub blur: f64,
}

impl Default for FadeTiming {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 0.4,
            y_offset: 6.0,
            blur: 6.0,
        }
    }
}

impl FadeTiming {
    /// Delay for the `step`-th stagger unit plus `index` items of `spacing` each
    pub fn staggered(step: f64, index: usize, spacing: f64) -> Self {
        Self {
            delay: BLUR_FADE_DELAY * step + index as f64 * spacing,
            ..Self::default()
        }
    }

    /// Effective start time, including the base step every fade waits for
    pub fn start(&self) -> f64 {
        BLUR_FADE_DELAY + self.delay
    }

    /// Inline style driving the `blur-fade` keyframes
    pub fn style(&self) -> String {
        format!(
            "--blur-fade-y: {}px; --blur-fade-blur: {}px; animation: blur-fade {:.2}s ease-out {:.3}s both;",
            self.y_offset,
            self.blur,
            self.duration,
            self.start()
        )
    }
}

/// Wraps children in a delayed blur-and-rise fade-in
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     BlurFade { timing: FadeTiming::staggered(3.0, 0, 0.0),
///         h2 { "About" }
///     }
/// }
/// ```
#[component]
pub fn BlurFade(
    children: Element,
    #[props(default)] timing: FadeTiming,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = class.unwrap_or_default();
    let style = timing.style();

    rsx! {
        div { class: "blur-fade {class}", style: "{style}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staggered_delay() {
        let timing = FadeTiming::staggered(6.0, 2, 0.05);
        assert!((timing.delay - (0.24 + 0.1)).abs() < 1e-9);
        assert!((timing.start() - 0.38).abs() < 1e-9);
    }

    #[test]
    fn default_timing_starts_after_base_step() {
        let timing = FadeTiming::default();
        assert!((timing.start() - BLUR_FADE_DELAY).abs() < 1e-9);
    }

    #[test]
    fn style_carries_offsets_and_timing() {
        let style = FadeTiming::default().style();
        assert!(style.contains("--blur-fade-y: 6px"));
        assert!(style.contains("--blur-fade-blur: 6px"));
        assert!(style.contains("blur-fade 0.40s ease-out 0.040s both"));
    }
}
