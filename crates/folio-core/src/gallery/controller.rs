//! Gallery reveal controller: a pure reducer from [`CardEvent`] to [`Effect`]s.
//!
//! The controller never sleeps or loads anything itself. Its host (the tokio
//! [`CardDriver`](super::driver) or a Dioxus component) performs the effects
//! and feeds the results back as events, one at a time.

use std::sync::Arc;
use std::time::Duration;

use super::events::{CardEvent, Effect};
use super::state::{CardMode, CardState, ImageOutcome, Opening, Settlement};
use crate::types::ProjectRecord;

/// Delay before a freshly mounted card drops its skeleton
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Tunables shared by every card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryConfig {
    pub settle_delay: Duration,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl GalleryConfig {
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

/// Drives one project card through its loading, collapsed and drawer modes.
#[derive(Debug, Clone)]
pub struct GalleryController {
    project: Arc<ProjectRecord>,
    config: GalleryConfig,
    state: CardState,
    mounted: bool,
}

impl GalleryController {
    pub fn new(project: Arc<ProjectRecord>, config: GalleryConfig) -> Self {
        let state = CardState::new(project.images.len());
        Self {
            project,
            config,
            state,
            mounted: false,
        }
    }

    pub fn project(&self) -> &ProjectRecord {
        &self.project
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn mode(&self) -> CardMode {
        self.state.mode()
    }

    /// Apply one event and return the effects the host must perform.
    pub fn handle(&mut self, event: CardEvent) -> Vec<Effect> {
        let before = self.state.mode();
        let mut effects = Vec::new();

        match event {
            CardEvent::Mounted => {
                if !self.mounted {
                    self.mounted = true;
                    effects.push(Effect::StartSettleTimer(self.config.settle_delay));
                }
            }
            CardEvent::SettleElapsed => {
                if self.state.mark_card_ready() {
                    tracing::debug!(project = %self.project.title, "Card settled");
                }
            }
            CardEvent::ExpandRequested => self.expand(&mut effects),
            CardEvent::CollapseRequested => {
                let opening = self.state.opening();
                let in_flight = !self.state.gallery_ready();
                if self.state.close() && in_flight {
                    effects.push(Effect::CancelOpening(opening));
                }
            }
            CardEvent::ImageSettled {
                opening,
                index,
                outcome,
            } => {
                self.settle(opening, index, outcome);
            }
        }

        let after = self.state.mode();
        if before != after {
            tracing::debug!(
                project = %self.project.title,
                from = %before,
                to = %after,
                "Card mode changed"
            );
            effects.push(Effect::ModeChanged(after));
        }
        effects
    }

    fn expand(&mut self, effects: &mut Vec<Effect>) {
        if self.state.expanded() {
            tracing::trace!(project = %self.project.title, "Drawer already open");
            return;
        }

        let opening = self.state.open();
        tracing::debug!(
            project = %self.project.title,
            %opening,
            images = self.project.images.len(),
            "Drawer opened"
        );
        if !self.project.images.is_empty() {
            effects.push(Effect::LoadImages {
                opening,
                images: self.project.images.clone(),
            });
        }
    }

    fn settle(&mut self, opening: Opening, index: usize, outcome: ImageOutcome) -> Settlement {
        let settlement = self.state.settle(opening, index);
        match settlement {
            Settlement::Counted => {
                if outcome == ImageOutcome::Failed {
                    tracing::debug!(
                        project = %self.project.title,
                        index,
                        "Counting failed image as settled"
                    );
                }
            }
            Settlement::Duplicate | Settlement::Stale => {
                tracing::trace!(
                    project = %self.project.title,
                    %opening,
                    current = %self.state.opening(),
                    index,
                    ?settlement,
                    "Ignoring settlement"
                );
            }
            Settlement::OutOfRange => {
                tracing::warn!(
                    project = %self.project.title,
                    index,
                    images = self.project.images.len(),
                    "Settlement for unknown image index"
                );
            }
        }
        settlement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(images: &[&str]) -> GalleryController {
        let project = ProjectRecord::new("Eco", "shop").with_images(images.iter().copied());
        GalleryController::new(Arc::new(project), GalleryConfig::default())
    }

    fn ready(images: &[&str]) -> GalleryController {
        let mut c = controller(images);
        c.handle(CardEvent::Mounted);
        c.handle(CardEvent::SettleElapsed);
        c
    }

    fn settled(opening: Opening, index: usize, outcome: ImageOutcome) -> CardEvent {
        CardEvent::ImageSettled {
            opening,
            index,
            outcome,
        }
    }

    #[test]
    fn mount_starts_settle_timer_once() {
        let mut c = controller(&[]);
        assert_eq!(
            c.handle(CardEvent::Mounted),
            vec![Effect::StartSettleTimer(DEFAULT_SETTLE_DELAY)]
        );
        assert!(c.handle(CardEvent::Mounted).is_empty());
        assert_eq!(c.mode(), CardMode::CardLoading);
    }

    #[test]
    fn settle_elapsed_readies_card() {
        let mut c = controller(&["a.png"]);
        c.handle(CardEvent::Mounted);
        assert_eq!(
            c.handle(CardEvent::SettleElapsed),
            vec![Effect::ModeChanged(CardMode::CardReadyCollapsed)]
        );
        assert!(c.handle(CardEvent::SettleElapsed).is_empty());
    }

    #[test]
    fn custom_settle_delay() {
        let project = Arc::new(ProjectRecord::new("Eco", "shop"));
        let config = GalleryConfig::default().with_settle_delay(Duration::from_millis(10));
        let mut c = GalleryController::new(project, config);
        assert_eq!(
            c.handle(CardEvent::Mounted),
            vec![Effect::StartSettleTimer(Duration::from_millis(10))]
        );
    }

    #[test]
    fn expand_without_images_needs_no_loads() {
        let mut c = ready(&[]);
        let effects = c.handle(CardEvent::ExpandRequested);
        assert_eq!(effects, vec![Effect::ModeChanged(CardMode::GalleryText)]);
        assert!(c.state().gallery_ready());
    }

    #[test]
    fn expand_with_images_requests_loads() {
        let mut c = ready(&["a.png", "b.png"]);
        let effects = c.handle(CardEvent::ExpandRequested);
        let opening = c.state().opening();
        assert_eq!(
            effects,
            vec![
                Effect::LoadImages {
                    opening,
                    images: c.project().images.clone(),
                },
                Effect::ModeChanged(CardMode::GalleryLoading),
            ]
        );
    }

    #[test]
    fn expand_while_open_is_ignored() {
        let mut c = ready(&["a.png"]);
        c.handle(CardEvent::ExpandRequested);
        let opening = c.state().opening();
        assert!(c.handle(CardEvent::ExpandRequested).is_empty());
        assert_eq!(c.state().opening(), opening);
    }

    #[test]
    fn failed_image_still_completes_gallery() {
        let mut c = ready(&["a.png", "b.png", "c.png"]);
        c.handle(CardEvent::ExpandRequested);
        let opening = c.state().opening();

        c.handle(settled(opening, 0, ImageOutcome::Loaded));
        c.handle(settled(opening, 1, ImageOutcome::Failed));
        let effects = c.handle(settled(opening, 2, ImageOutcome::Loaded));
        assert_eq!(effects, vec![Effect::ModeChanged(CardMode::GalleryImages)]);
    }

    #[test]
    fn collapse_cancels_in_flight_opening() {
        let mut c = ready(&["a.png"]);
        c.handle(CardEvent::ExpandRequested);
        let opening = c.state().opening();

        let effects = c.handle(CardEvent::CollapseRequested);
        assert_eq!(
            effects,
            vec![
                Effect::CancelOpening(opening),
                Effect::ModeChanged(CardMode::CardReadyCollapsed),
            ]
        );
    }

    #[test]
    fn collapse_after_ready_has_nothing_to_cancel() {
        let mut c = ready(&["a.png"]);
        c.handle(CardEvent::ExpandRequested);
        let opening = c.state().opening();
        c.handle(settled(opening, 0, ImageOutcome::Loaded));

        assert_eq!(
            c.handle(CardEvent::CollapseRequested),
            vec![Effect::ModeChanged(CardMode::CardReadyCollapsed)]
        );
        assert!(c.handle(CardEvent::CollapseRequested).is_empty());
    }

    #[test]
    fn stale_settlement_after_reopen_is_ignored() {
        let mut c = ready(&["a.png", "b.png"]);
        c.handle(CardEvent::ExpandRequested);
        let first = c.state().opening();
        c.handle(CardEvent::CollapseRequested);
        c.handle(CardEvent::ExpandRequested);

        let effects = c.handle(settled(first, 0, ImageOutcome::Loaded));
        assert!(effects.is_empty());
        assert_eq!(c.state().loaded_count(), 0);
        assert_eq!(c.mode(), CardMode::GalleryLoading);
    }

    #[test]
    fn drawer_can_open_before_card_settles() {
        let mut c = controller(&["a.png"]);
        c.handle(CardEvent::Mounted);
        c.handle(CardEvent::ExpandRequested);
        let opening = c.state().opening();
        c.handle(settled(opening, 0, ImageOutcome::Loaded));
        assert_eq!(c.mode(), CardMode::CardLoading);

        c.handle(CardEvent::SettleElapsed);
        assert_eq!(c.mode(), CardMode::GalleryImages);
    }
}
