//! Async host for a [`GalleryController`].
//!
//! Each card runs as its own tokio task with an unbounded inbox. Timers and
//! image loads are spawned as child tasks that post their results back into
//! that inbox, so every state transition happens on the card's task.
//!
//! Cancellation is tree-shaped:
//!
//! ```text
//! card token (dropped handle / shutdown)
//! ├── settle timer
//! └── opening token (one per expand, cancelled on collapse)
//!     ├── image load 0
//!     └── image load n
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::controller::{GalleryConfig, GalleryController};
use super::events::{CardEvent, Effect};
use super::state::{CardMode, ImageOutcome, Opening};
use crate::error::{FolioError, FolioResult};
use crate::types::{ImageRef, ProjectRecord};

/// Resolves an image reference to exactly one terminal outcome.
///
/// An `Err` is logged and counted as a settled image.
pub trait ImageLoader: Send + Sync + 'static {
    fn load(&self, image: ImageRef) -> BoxFuture<'static, FolioResult<()>>;
}

/// Observable state of a running card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSnapshot {
    pub mode: CardMode,
    pub opening: Opening,
    /// Images settled in the current opening
    pub loaded: usize,
    pub total: usize,
}

impl CardSnapshot {
    fn of(controller: &GalleryController) -> Self {
        let state = controller.state();
        Self {
            mode: state.mode(),
            opening: state.opening(),
            loaded: state.loaded_count(),
            total: state.image_count(),
        }
    }
}

/// Handle to a running card. Dropping it tears the card down.
pub struct CardHandle {
    inbox: mpsc::UnboundedSender<CardEvent>,
    snapshot: watch::Receiver<CardSnapshot>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl CardHandle {
    pub fn expand(&self) -> FolioResult<()> {
        self.send(CardEvent::ExpandRequested)
    }

    pub fn collapse(&self) -> FolioResult<()> {
        self.send(CardEvent::CollapseRequested)
    }

    pub fn snapshot(&self) -> CardSnapshot {
        *self.snapshot.borrow()
    }

    pub fn mode(&self) -> CardMode {
        self.snapshot().mode
    }

    /// Receiver notified on every snapshot change
    pub fn subscribe(&self) -> watch::Receiver<CardSnapshot> {
        self.snapshot.clone()
    }

    /// Wait until the snapshot satisfies `predicate`.
    pub async fn wait_for(
        &self,
        mut predicate: impl FnMut(&CardSnapshot) -> bool,
    ) -> FolioResult<CardSnapshot> {
        let mut rx = self.snapshot.clone();
        let snapshot = rx
            .wait_for(|s| predicate(s))
            .await
            .map_err(|_| FolioError::CardClosed)?;
        Ok(*snapshot)
    }

    /// Tear the card down and wait for its task to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    fn send(&self, event: CardEvent) -> FolioResult<()> {
        self.inbox.send(event).map_err(|_| FolioError::CardClosed)
    }
}

impl Drop for CardHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawn a card for `project` on the current tokio runtime.
///
/// The card is mounted immediately, which starts its settling timer.
pub fn spawn_card(
    project: Arc<ProjectRecord>,
    config: GalleryConfig,
    loader: Arc<dyn ImageLoader>,
) -> CardHandle {
    let controller = GalleryController::new(project, config);
    let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(CardSnapshot::of(&controller));
    let cancel = CancellationToken::new();

    let driver = CardDriver {
        controller,
        inbox_tx: inbox_tx.clone(),
        snapshot_tx,
        loader,
        cancel: cancel.clone(),
        openings: HashMap::new(),
    };
    let task = tokio::spawn(driver.run(inbox_rx));

    CardHandle {
        inbox: inbox_tx,
        snapshot: snapshot_rx,
        cancel,
        task: Some(task),
    }
}

struct CardDriver {
    controller: GalleryController,
    inbox_tx: mpsc::UnboundedSender<CardEvent>,
    snapshot_tx: watch::Sender<CardSnapshot>,
    loader: Arc<dyn ImageLoader>,
    cancel: CancellationToken,
    openings: HashMap<Opening, CancellationToken>,
}

impl CardDriver {
    async fn run(mut self, mut inbox: mpsc::UnboundedReceiver<CardEvent>) {
        let title = self.controller.project().title.clone();
        tracing::debug!(project = %title, "Card mounted");

        self.dispatch(CardEvent::Mounted);
        loop {
            let event = tokio::select! {
                _ = self.cancel.cancelled() => break,
                event = inbox.recv() => match event {
                    Some(event) => event,
                    None => break,
                },
            };
            self.dispatch(event);
        }

        // Children of the card token stop with it.
        self.cancel.cancel();
        tracing::debug!(project = %title, "Card torn down");
    }

    fn dispatch(&mut self, event: CardEvent) {
        for effect in self.controller.handle(event) {
            self.perform(effect);
        }
        self.snapshot_tx
            .send_replace(CardSnapshot::of(&self.controller));
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::StartSettleTimer(delay) => {
                let token = self.cancel.child_token();
                let inbox = self.inbox_tx.clone();
                tokio::spawn(async move {
                    tokio::select! {
                        _ = token.cancelled() => {}
                        _ = tokio::time::sleep(delay) => {
                            let _ = inbox.send(CardEvent::SettleElapsed);
                        }
                    }
                });
            }
            Effect::LoadImages { opening, images } => {
                // A new opening supersedes every earlier one.
                for (_, stale) in self.openings.drain() {
                    stale.cancel();
                }
                let token = self.cancel.child_token();
                for (index, image) in images.into_iter().enumerate() {
                    self.spawn_load(opening, index, image, token.clone());
                }
                self.openings.insert(opening, token);
            }
            Effect::CancelOpening(opening) => {
                if let Some(token) = self.openings.remove(&opening) {
                    token.cancel();
                }
            }
            Effect::ModeChanged(mode) => {
                tracing::trace!(project = %self.controller.project().title, %mode, "Published mode");
            }
        }
    }

    fn spawn_load(&self, opening: Opening, index: usize, image: ImageRef, token: CancellationToken) {
        let load = self.loader.load(image.clone());
        let inbox = self.inbox_tx.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => return,
                result = load => match result {
                    Ok(()) => ImageOutcome::Loaded,
                    Err(e) => {
                        tracing::warn!(%image, error = %e, "Image failed to load");
                        ImageOutcome::Failed
                    }
                },
            };
            let _ = inbox.send(CardEvent::ImageSettled {
                opening,
                index,
                outcome,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct InstantLoader;

    impl ImageLoader for InstantLoader {
        fn load(&self, _image: ImageRef) -> BoxFuture<'static, FolioResult<()>> {
            Box::pin(async { Ok(()) })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn card_becomes_ready_after_settle_delay() {
        let project = Arc::new(ProjectRecord::new("Eco", "shop"));
        let card = spawn_card(project, GalleryConfig::default(), Arc::new(InstantLoader));
        assert_eq!(card.mode(), CardMode::CardLoading);

        let snapshot = card
            .wait_for(|s| s.mode == CardMode::CardReadyCollapsed)
            .await
            .unwrap();
        assert_eq!(snapshot.total, 0);
        card.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn snapshot_channel_closes_on_shutdown() {
        let project = Arc::new(ProjectRecord::new("Eco", "shop"));
        let card = spawn_card(project, GalleryConfig::default(), Arc::new(InstantLoader));
        let rx = card.subscribe();
        card.shutdown().await;
        assert!(rx.has_changed().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn instant_loads_complete_gallery() {
        let project = Arc::new(ProjectRecord::new("Eco", "shop").with_images(["a.png", "b.png"]));
        let config = GalleryConfig::default().with_settle_delay(Duration::from_millis(5));
        let card = spawn_card(project, config, Arc::new(InstantLoader));

        card.wait_for(|s| s.mode == CardMode::CardReadyCollapsed).await.unwrap();
        card.expand().unwrap();
        let snapshot = card
            .wait_for(|s| s.mode == CardMode::GalleryImages)
            .await
            .unwrap();
        assert_eq!(snapshot.loaded, 2);
        card.shutdown().await;
    }
}
