//! Markdown Renderer
//!
//! Read-only markdown display for the about section and text-only projects.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render markdown to HTML with strikethrough and tables enabled.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Read-only markdown block
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     Markdown { content: "**Period**: 2024".to_string() }
/// }
/// ```
#[component]
pub fn Markdown(
    /// Markdown content to render
    content: ReadOnlySignal<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let html_content = use_memo(move || render_markdown(&content()));
    let class = class.unwrap_or_default();

    rsx! {
        div {
            class: "prose {class}",
            dangerous_inner_html: "{html_content()}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis_and_lists() {
        let html = render_markdown("**Period**: 2024\n\n- one\n- two\n");
        assert!(html.contains("<strong>Period</strong>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn renders_strikethrough() {
        assert!(render_markdown("~~old~~").contains("<del>old</del>"));
    }

    #[test]
    fn empty_source_renders_nothing() {
        assert_eq!(render_markdown(""), "");
    }
}
