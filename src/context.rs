//! Portfolio context for the Folio desktop app.
//!
//! The portfolio is fully loaded before launch and shared read-only with
//! every component through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let portfolio = use_portfolio();
//! let config = use_gallery_config();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{GalleryConfig, Portfolio};

/// Shared portfolio type for context.
pub type SharedPortfolio = Arc<Portfolio>;

/// Provide the launch options to the component tree.
///
/// Call once from the root component.
pub fn provide_launch_context() {
    let options = crate::launch_options();
    use_context_provider(|| options.portfolio.clone());
    use_context_provider(|| options.gallery);
}

/// Hook to access the loaded portfolio.
pub fn use_portfolio() -> SharedPortfolio {
    use_context::<SharedPortfolio>()
}

/// Hook to access the settle delay and other per-card settings.
pub fn use_gallery_config() -> GalleryConfig {
    use_context::<GalleryConfig>()
}
