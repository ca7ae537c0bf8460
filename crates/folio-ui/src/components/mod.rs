//! Reusable UI components
//!
//! - Placeholders: `Skeleton`
//! - Labels and actions: `Badge`, `Button`, `LinkButton`
//! - Decoration: `BlurFade`, `CircularGauge`, `AnimatedGridPattern`
//! - Headings: `AuroraText`, `SparklesText`

mod accent_text;
mod badge;
mod blur_fade;
mod button;
mod circular_gauge;
mod grid_pattern;
mod skeleton;

pub use accent_text::*;
pub use badge::*;
pub use blur_fade::*;
pub use button::*;
pub use circular_gauge::*;
pub use grid_pattern::*;
pub use skeleton::*;
