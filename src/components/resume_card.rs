//! Resume Card Component
//!
//! One work or education entry: logo, title, subtitle, badges and period,
//! with a description that unfolds on click.

use dioxus::prelude::*;
use folio_ui::BadgeList;

/// First character of `text`, uppercased, for logo fallbacks
pub fn monogram(text: &str) -> String {
    text.chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Work or education entry
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ResumeCard {
///         title: "Freelance".to_string(),
///         subtitle: Some("Backend Developer".to_string()),
///         period: "2023 - Present".to_string(),
///     }
/// }
/// ```
#[component]
pub fn ResumeCard(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] href: Option<String>,
    #[props(default)] logo_url: Option<String>,
    #[props(default)] badges: Vec<String>,
    period: String,
    #[props(default)] description: Option<String>,
) -> Element {
    let mut expanded = use_signal(|| false);
    let initial = monogram(&title);
    let has_description = description.as_deref().is_some_and(|d| !d.trim().is_empty());

    rsx! {
        div {
            class: "resume-card",
            onclick: move |_| {
                if has_description {
                    expanded.set(!expanded());
                }
            },
            div { class: "resume-card__logo",
                if let Some(url) = logo_url {
                    img { src: "{url}", alt: "{title}" }
                } else {
                    span { "{initial}" }
                }
            }
            div { class: "resume-card__body",
                div { class: "resume-card__header",
                    h3 { class: "resume-card__title",
                        if let Some(link) = href {
                            a { href: "{link}", target: "_blank", rel: "noopener noreferrer", "{title}" }
                        } else {
                            "{title}"
                        }
                    }
                    span { class: "resume-card__period", "{period}" }
                }
                if let Some(sub) = subtitle {
                    div { class: "resume-card__subtitle", "{sub}" }
                }
                if !badges.is_empty() {
                    BadgeList { labels: badges.clone() }
                }
                if expanded() {
                    if let Some(text) = description {
                        p { class: "resume-card__description", "{text}" }
                    }
                }
            }
        }
    }
}
