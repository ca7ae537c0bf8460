//! Per-card state and the pure mode derivation.

use std::fmt;

/// Generation token identifying one opening of a card's gallery.
///
/// Incremented on every expand. A settlement carrying any other token is
/// stale and must not touch the current opening's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Opening(u64);

impl Opening {
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Opening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "opening#{}", self.0)
    }
}

/// Terminal outcome reported by the image loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
}

/// What the presentation shell should show for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    /// Settling delay has not elapsed: card skeleton
    CardLoading,
    /// Preview image, title, description and badges
    CardReadyCollapsed,
    /// Drawer open, one skeleton per image while images settle
    GalleryLoading,
    /// Drawer open, every image settled
    GalleryImages,
    /// Drawer open for a project without images: long text or description
    GalleryText,
}

impl CardMode {
    pub fn label(&self) -> &'static str {
        match self {
            CardMode::CardLoading => "card loading",
            CardMode::CardReadyCollapsed => "card ready",
            CardMode::GalleryLoading => "gallery loading",
            CardMode::GalleryImages => "gallery images",
            CardMode::GalleryText => "gallery text",
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(
            self,
            CardMode::GalleryLoading | CardMode::GalleryImages | CardMode::GalleryText
        )
    }
}

impl fmt::Display for CardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a settlement notification was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// First notification for this image in the current opening
    Counted,
    /// The image already settled in this opening
    Duplicate,
    /// Belongs to an earlier opening, or the drawer is closed
    Stale,
    /// Index does not name an image of this project
    OutOfRange,
}

/// State owned by exactly one card.
///
/// Settlement is tracked per image index, so readiness is "every image
/// settled" rather than a bare count compared against the image total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    card_ready: bool,
    expanded: bool,
    gallery_ready: bool,
    opening: Opening,
    settled: Vec<bool>,
}

impl CardState {
    pub fn new(image_count: usize) -> Self {
        Self {
            card_ready: false,
            expanded: false,
            gallery_ready: image_count == 0,
            opening: Opening::default(),
            settled: vec![false; image_count],
        }
    }

    pub fn card_ready(&self) -> bool {
        self.card_ready
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn gallery_ready(&self) -> bool {
        self.gallery_ready
    }

    pub fn opening(&self) -> Opening {
        self.opening
    }

    pub fn image_count(&self) -> usize {
        self.settled.len()
    }

    /// Images settled in the current opening
    pub fn loaded_count(&self) -> usize {
        self.settled.iter().filter(|s| **s).count()
    }

    /// Returns `true` the one time the card becomes ready.
    pub fn mark_card_ready(&mut self) -> bool {
        if self.card_ready {
            return false;
        }
        self.card_ready = true;
        true
    }

    /// Start a new opening with every image unsettled.
    pub fn open(&mut self) -> Opening {
        self.opening = self.opening.next();
        self.expanded = true;
        self.settled.iter_mut().for_each(|s| *s = false);
        self.gallery_ready = self.settled.is_empty();
        self.opening
    }

    /// Returns `false` when the drawer was already closed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.expanded, false)
    }

    pub fn settle(&mut self, opening: Opening, index: usize) -> Settlement {
        if !self.expanded || opening != self.opening {
            return Settlement::Stale;
        }
        let Some(slot) = self.settled.get_mut(index) else {
            return Settlement::OutOfRange;
        };
        if *slot {
            return Settlement::Duplicate;
        }
        *slot = true;
        if self.settled.iter().all(|s| *s) {
            self.gallery_ready = true;
        }
        Settlement::Counted
    }

    pub fn mode(&self) -> CardMode {
        if !self.card_ready {
            CardMode::CardLoading
        } else if !self.expanded {
            CardMode::CardReadyCollapsed
        } else if self.settled.is_empty() {
            CardMode::GalleryText
        } else if self.gallery_ready {
            CardMode::GalleryImages
        } else {
            CardMode::GalleryLoading
        }
    }
}
