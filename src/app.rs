use dioxus::prelude::*;

use crate::context::provide_launch_context;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the portfolio context.
#[component]
pub fn App() -> Element {
    provide_launch_context();

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
