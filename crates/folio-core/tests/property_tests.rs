//! Property-based tests for the gallery controller
//!
//! Uses proptest to check that readiness depends only on every image of the
//! current opening settling, whatever the order, outcome mix, duplicates or
//! stale deliveries.

use std::sync::Arc;

use folio_core::{
    CardEvent, CardMode, GalleryConfig, GalleryController, ImageOutcome, Opening, ProjectRecord,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn outcome_strategy() -> impl Strategy<Value = ImageOutcome> {
    prop_oneof![Just(ImageOutcome::Loaded), Just(ImageOutcome::Failed)]
}

/// Image count, a delivery order over its indices, and one outcome per image
fn gallery_strategy() -> impl Strategy<Value = (usize, Vec<usize>, Vec<ImageOutcome>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            prop::collection::vec(outcome_strategy(), n),
        )
    })
}

fn open_card(images: usize) -> (GalleryController, Opening) {
    let refs: Vec<String> = (0..images).map(|i| format!("img{}.png", i)).collect();
    let project = ProjectRecord::new("Gallery", "property").with_images(refs);
    let mut controller = GalleryController::new(Arc::new(project), GalleryConfig::default());
    controller.handle(CardEvent::Mounted);
    controller.handle(CardEvent::SettleElapsed);
    controller.handle(CardEvent::ExpandRequested);
    let opening = controller.state().opening();
    (controller, opening)
}

fn settle(opening: Opening, index: usize, outcome: ImageOutcome) -> CardEvent {
    CardEvent::ImageSettled {
        opening,
        index,
        outcome,
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Ready exactly when the last distinct image settles
    #[test]
    fn ready_only_after_every_image((n, order, outcomes) in gallery_strategy()) {
        let (mut controller, opening) = open_card(n);

        for (delivered, index) in order.iter().enumerate() {
            prop_assert_eq!(controller.mode(), CardMode::GalleryLoading);
            controller.handle(settle(opening, *index, outcomes[*index]));
            prop_assert_eq!(controller.state().loaded_count(), delivered + 1);
        }
        prop_assert_eq!(controller.mode(), CardMode::GalleryImages);
    }

    /// Duplicates never advance the count or complete the gallery early
    #[test]
    fn duplicates_are_ignored(
        (n, order, outcomes) in gallery_strategy(),
        repeats in prop::collection::vec(0usize..12, 0..20),
    ) {
        let (mut controller, opening) = open_card(n);
        let (last, rest) = order.split_last().unwrap();

        for index in rest {
            controller.handle(settle(opening, *index, outcomes[*index]));
        }
        for index in repeats.iter().filter(|i| rest.contains(*i)) {
            controller.handle(settle(opening, *index, ImageOutcome::Loaded));
        }
        prop_assert_eq!(controller.state().loaded_count(), n - 1);
        prop_assert_eq!(controller.mode(), CardMode::GalleryLoading);

        controller.handle(settle(opening, *last, outcomes[*last]));
        prop_assert_eq!(controller.mode(), CardMode::GalleryImages);
    }

    /// Deliveries for an earlier opening never reach the current one
    #[test]
    fn stale_openings_are_isolated((n, order, outcomes) in gallery_strategy()) {
        let (mut controller, first) = open_card(n);
        controller.handle(CardEvent::CollapseRequested);
        controller.handle(CardEvent::ExpandRequested);

        for index in &order {
            controller.handle(settle(first, *index, outcomes[*index]));
        }
        prop_assert_eq!(controller.state().loaded_count(), 0);
        prop_assert_eq!(controller.mode(), CardMode::GalleryLoading);
    }

    /// Reopening always starts from zero, whatever the previous opening reached
    #[test]
    fn reopen_resets(
        (n, order, outcomes) in gallery_strategy(),
        delivered in 0usize..12,
    ) {
        let (mut controller, opening) = open_card(n);
        for index in order.iter().take(delivered) {
            controller.handle(settle(opening, *index, outcomes[*index]));
        }

        controller.handle(CardEvent::CollapseRequested);
        controller.handle(CardEvent::ExpandRequested);
        prop_assert_eq!(controller.state().loaded_count(), 0);
        prop_assert!(!controller.state().gallery_ready());
    }
}

#[test]
fn zero_image_card_opens_straight_to_text() {
    let project = ProjectRecord::new("Tube", "video platform").with_long_text("**Period**: 2024");
    let mut controller = GalleryController::new(Arc::new(project), GalleryConfig::default());
    controller.handle(CardEvent::Mounted);
    controller.handle(CardEvent::SettleElapsed);

    let effects = controller.handle(CardEvent::ExpandRequested);
    assert_eq!(effects.len(), 1);
    assert!(controller.state().gallery_ready());
    assert_eq!(controller.mode(), CardMode::GalleryText);
    assert_eq!(controller.project().detail_text(), "**Period**: 2024");
}
