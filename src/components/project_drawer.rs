//! Project Drawer
//!
//! Detail view of an open project card. Projects with images show one
//! skeleton per image until every image has settled; the images themselves
//! stay mounted (hidden) meanwhile so their loads can complete. Projects
//! without images show their markdown text straight away.

use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{CardEvent, CardMode, GalleryController, ProjectRecord};
use folio_ui::{AuroraText, Button, ButtonVariant, LinkButton, Skeleton};

use super::project_card::dispatch;
use super::{GalleryImage, Markdown};
use crate::context::use_portfolio;

#[component]
pub fn ProjectDrawer(project: Arc<ProjectRecord>, controller: Signal<GalleryController>) -> Element {
    let portfolio = use_portfolio();
    let base_dir = portfolio.base_dir().map(Path::to_path_buf);

    let (mode, opening) = {
        let controller = controller.read();
        (controller.mode(), controller.state().opening())
    };
    let ready = mode == CardMode::GalleryImages;
    let link_label = project.link_label().to_string();
    let images_class = if ready {
        "drawer__images"
    } else {
        "drawer__images drawer__images--hidden"
    };

    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| dispatch(controller, CardEvent::CollapseRequested),

            div {
                class: "drawer",
                role: "dialog",
                "aria-label": "{project.title}",
                onclick: move |e: MouseEvent| e.stop_propagation(),

                header { class: "drawer__header",
                    h2 { class: "drawer__title", AuroraText { "{project.title}" } }
                    p { class: "drawer__description", "{project.description}" }
                }

                div { class: "drawer__body",
                    if project.images.is_empty() {
                        Markdown { content: project.detail_text().to_string() }
                    } else {
                        if !ready {
                            div { class: "drawer__skeletons",
                                for index in 0..project.images.len() {
                                    Skeleton { key: "{index}", height: "12rem" }
                                }
                            }
                        }
                        div { class: images_class,
                            for (index, image) in project.images.iter().cloned().enumerate() {
                                GalleryImage {
                                    key: "{opening}-{index}",
                                    image: image,
                                    alt: format!("{} image {}", project.title, index + 1),
                                    base_dir: base_dir.clone(),
                                    on_settled: move |outcome| {
                                        dispatch(
                                            controller,
                                            CardEvent::ImageSettled { opening, index, outcome },
                                        )
                                    },
                                }
                            }
                        }
                    }
                }

                footer { class: "drawer__footer",
                    if let Some(link) = project.link.clone() {
                        LinkButton { href: link, "{link_label}" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| dispatch(controller, CardEvent::CollapseRequested),
                        "Close"
                    }
                }
            }
        }
    }
}
