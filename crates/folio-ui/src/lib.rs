//! Folio UI Components
//!
//! Dioxus building blocks for the portfolio: loading skeletons, badges,
//! buttons, and the decorative pieces (blur fade-ins, circular gauges, the
//! animated grid background).
//!
//! Styling lives in the application's global stylesheet; components here only
//! emit class names and the inline styles that carry per-instance values such
//! as animation delays.

pub mod components;

pub use components::*;
