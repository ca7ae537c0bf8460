//! Skeleton placeholder shown while content is not ready.

use dioxus::prelude::*;

/// Corner rounding for a skeleton block
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SkeletonShape {
    /// Rounded rectangle, for images and cards
    #[default]
    Block,
    /// Fully rounded ends, for lines of text and badges
    Pill,
}

impl SkeletonShape {
    pub fn class(&self) -> &'static str {
        match self {
            SkeletonShape::Block => "skeleton skeleton--block",
            SkeletonShape::Pill => "skeleton skeleton--pill",
        }
    }
}

/// Pulsing placeholder block
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Skeleton { width: "200px", height: "20px", shape: SkeletonShape::Pill }
/// }
/// ```
#[component]
pub fn Skeleton(
    /// CSS width
    #[props(default = "100%".to_string(), into)]
    width: String,
    /// CSS height
    #[props(into)]
    height: String,
    #[props(default)]
    shape: SkeletonShape,
) -> Element {
    rsx! {
        div {
            class: shape.class(),
            style: "width: {width}; height: {height};",
            "aria-hidden": "true",
        }
    }
}
