//! Project Card Component
//!
//! A portfolio project as a card that settles from a skeleton into its
//! preview, and opens a detail drawer with a progressively revealed gallery.
//!
//! Each card owns a [`GalleryController`]. The Dioxus event loop is the
//! card's only queue: the settle timer, clicks and `<img>` load events all
//! arrive through [`dispatch`], one at a time.

use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{CardEvent, CardMode, Effect, GalleryController, ProjectRecord};
use folio_ui::{AuroraText, BadgeList, BlurFade, FadeTiming, Skeleton, SkeletonShape};

use super::{GalleryImage, ProjectDrawer};
use crate::context::{use_gallery_config, use_portfolio};

/// Feed one event to the card's controller and carry out its effects.
///
/// Timers are spawned in the current scope, so they die with the card.
pub(crate) fn dispatch(mut controller: Signal<GalleryController>, event: CardEvent) {
    let effects = controller.write().handle(event);

    for effect in effects {
        match effect {
            Effect::StartSettleTimer(delay) => {
                spawn(async move {
                    tokio::time::sleep(delay).await;
                    dispatch(controller, CardEvent::SettleElapsed);
                });
            }
            Effect::LoadImages { opening, images } => {
                // The drawer mounts one <img> per entry; each reports back itself.
                tracing::debug!(%opening, images = images.len(), "Gallery images requested");
            }
            Effect::CancelOpening(opening) => {
                tracing::debug!(%opening, "Drawer closed before every image settled");
            }
            Effect::ModeChanged(_) => {}
        }
    }
}

/// Project card with skeleton, preview and detail drawer
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         project: Arc::new(project),
///         timing: FadeTiming::staggered(12.0, 0, 0.05),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(project: Arc<ProjectRecord>, #[props(default)] timing: FadeTiming) -> Element {
    let config = use_gallery_config();
    let portfolio = use_portfolio();
    let base_dir = portfolio.base_dir().map(Path::to_path_buf);
    let controller = use_signal({
        let project = project.clone();
        move || GalleryController::new(project, config)
    });

    let mode = controller.read().mode();
    let tag_count = project.tags.len();

    rsx! {
        BlurFade { timing: timing,
            div {
                class: "project-card",
                onmounted: move |_| dispatch(controller, CardEvent::Mounted),
                onclick: move |_| dispatch(controller, CardEvent::ExpandRequested),

                if mode == CardMode::CardLoading {
                    div { class: "project-card__skeleton",
                        Skeleton { height: "125px" }
                        Skeleton { width: "200px", height: "20px", shape: SkeletonShape::Pill }
                        Skeleton { width: "150px", height: "15px", shape: SkeletonShape::Pill }
                        div { class: "badge-list",
                            for index in 0..tag_count {
                                Skeleton {
                                    key: "{index}",
                                    width: "60px",
                                    height: "20px",
                                    shape: SkeletonShape::Pill,
                                }
                            }
                        }
                    }
                } else {
                    if let Some(preview) = project.preview().cloned() {
                        div { class: "project-card__preview",
                            GalleryImage {
                                image: preview,
                                alt: format!("{} preview", project.title),
                                base_dir: base_dir.clone(),
                                on_settled: move |_| {},
                            }
                        }
                    }
                    h3 { class: "project-card__title", AuroraText { "{project.title}" } }
                    p { class: "project-card__description", "{project.description}" }
                    BadgeList { labels: project.tags.clone() }
                }
            }
        }

        if mode.is_expanded() {
            ProjectDrawer { project: project.clone(), controller: controller }
        }
    }
}
