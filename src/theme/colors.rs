//! Colors passed to components as props rather than through CSS.
//!
//! Keep in sync with `--accent` and `--accent-soft` in the stylesheet.

pub const ACCENT: &str = "rgb(79, 70, 229)";
pub const ACCENT_SOFT: &str = "rgba(79, 70, 229, 0.2)";
