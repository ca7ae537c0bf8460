//! Messages into a card controller and the effects it asks its host to run.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  CardEvent (inbox)                Effect (host performs)      │
//! │  ├── Mounted                      ├── StartSettleTimer        │
//! │  ├── SettleElapsed                ├── LoadImages              │
//! │  ├── ExpandRequested              ├── CancelOpening           │
//! │  ├── CollapseRequested            └── ModeChanged             │
//! │  └── ImageSettled                                             │
//! └───────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use super::state::{CardMode, ImageOutcome, Opening};
use crate::types::ImageRef;

/// Events delivered to one card's controller, one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    /// The card was rendered for the first time
    Mounted,
    /// The settling timer fired
    SettleElapsed,
    /// The user opened the detail drawer
    ExpandRequested,
    /// The user dismissed the detail drawer
    CollapseRequested,
    /// An image reached its terminal outcome
    ImageSettled {
        /// Opening the load was started for
        opening: Opening,
        /// Position in the project's image list
        index: usize,
        outcome: ImageOutcome,
    },
}

/// Side effects requested by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `SettleElapsed` after the delay
    StartSettleTimer(Duration),
    /// Load every image and report each with `ImageSettled` for `opening`
    LoadImages {
        opening: Opening,
        images: Vec<ImageRef>,
    },
    /// Drop in-flight loads belonging to `opening`
    CancelOpening(Opening),
    /// The rendered mode changed
    ModeChanged(CardMode),
}
