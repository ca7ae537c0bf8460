//! Progressive gallery reveal for project cards.
//!
//! A card has two independent axes:
//!
//! ```text
//! card:     CardLoading ──(settling delay)──▶ CardReady
//! gallery:  GalleryLoading ──(every image settled)──▶ GalleryReady
//!                 ▲                                      │
//!                 └────────────(collapse + expand)───────┘
//! ```
//!
//! [`GalleryController`] is the pure reducer over [`CardEvent`]s. Hosts run
//! its [`Effect`]s: [`spawn_card`] does so on tokio, the desktop app does so
//! inside a Dioxus component.

mod controller;
mod driver;
mod events;
mod state;

pub use controller::{GalleryConfig, GalleryController, DEFAULT_SETTLE_DELAY};
pub use driver::{spawn_card, CardHandle, CardSnapshot, ImageLoader};
pub use events::{CardEvent, Effect};
pub use state::{CardMode, CardState, ImageOutcome, Opening, Settlement};
