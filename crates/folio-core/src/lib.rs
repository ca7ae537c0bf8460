//! Folio Core Library
//!
//! Portfolio data and the progressive gallery reveal behind project cards.
//!
//! ## Overview
//!
//! A portfolio is a fully loaded [`Portfolio`] (bundled or read from JSON).
//! Each rendered project gets its own [`GalleryController`], which decides
//! whether the card shows its loading skeleton, the collapsed card, or the
//! open drawer with an image gallery or markdown text.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use folio_core::{spawn_card, CardMode, FsImageLoader, GalleryConfig, Portfolio};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let portfolio = Portfolio::bundled()?;
//!     let loader = Arc::new(FsImageLoader::for_portfolio(&portfolio));
//!     let project = Arc::new(portfolio.project("neovim-config")?.clone());
//!
//!     let card = spawn_card(project, GalleryConfig::default(), loader);
//!     card.wait_for(|s| s.mode == CardMode::CardReadyCollapsed).await?;
//!     card.expand()?;
//!     let snapshot = card.wait_for(|s| s.mode != CardMode::GalleryLoading).await?;
//!     println!("{} of {} images settled", snapshot.loaded, snapshot.total);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod gallery;
pub mod loader;
pub mod logging;
pub mod portfolio;
pub mod types;

// Re-exports
pub use error::{FolioError, FolioResult};
pub use gallery::{
    spawn_card, CardEvent, CardHandle, CardMode, CardSnapshot, CardState, Effect, GalleryConfig,
    GalleryController, ImageLoader, ImageOutcome, Opening, Settlement, DEFAULT_SETTLE_DELAY,
};
pub use loader::{display_src, FsImageLoader};
pub use portfolio::{Portfolio, ValidationIssue, BUNDLED_ASSETS_DIR};
pub use types::*;
