//! Badge Component
//!
//! Small tag labels for project technologies and skills.

use dioxus::prelude::*;

/// Tag-like label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Badge { "Django" }
/// }
/// ```
#[component]
pub fn Badge(children: Element, #[props(default)] class: Option<String>) -> Element {
    let class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("badge {}", extra),
        _ => "badge".to_string(),
    };

    rsx! {
        span { class: "{class}", {children} }
    }
}

/// Row of badges for a list of labels
#[component]
pub fn BadgeList(labels: Vec<String>) -> Element {
    if labels.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "badge-list",
            for (index, label) in labels.iter().enumerate() {
                Badge { key: "{index}", "{label}" }
            }
        }
    }
}
