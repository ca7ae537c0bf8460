//! Gallery Image
//!
//! Resolves an image reference to a displayable `src` off the UI thread and
//! reports exactly when the webview finished with it, successfully or not.

use std::path::PathBuf;

use dioxus::prelude::*;
use folio_core::{display_src, FolioError, FolioResult, ImageOutcome, ImageRef};

async fn resolve_src(image: ImageRef, base_dir: Option<PathBuf>) -> FolioResult<String> {
    tokio::task::spawn_blocking(move || display_src(&image, base_dir.as_deref()))
        .await
        .map_err(|e| FolioError::Io(std::io::Error::other(e)))?
}

/// One gallery image that reports its terminal outcome
///
/// `on_settled` fires once with `Loaded` from the image's `onload`, or with
/// `Failed` when the source cannot be resolved or the webview rejects it.
#[component]
pub fn GalleryImage(
    image: ImageRef,
    alt: String,
    #[props(default)] base_dir: Option<PathBuf>,
    on_settled: EventHandler<ImageOutcome>,
) -> Element {
    let src = use_resource({
        let image = image.clone();
        move || {
            let image = image.clone();
            let base_dir = base_dir.clone();
            async move {
                match resolve_src(image.clone(), base_dir).await {
                    Ok(src) => Some(src),
                    Err(e) => {
                        tracing::warn!("Error loading image {}: {}", image, e);
                        on_settled.call(ImageOutcome::Failed);
                        None
                    }
                }
            }
        }
    });

    let resolved = src.read().clone().flatten();

    rsx! {
        div { class: "gallery-image",
            if let Some(src) = resolved {
                img {
                    class: "gallery-image__img",
                    src: "{src}",
                    alt: "{alt}",
                    onload: move |_| on_settled.call(ImageOutcome::Loaded),
                    onerror: {
                        let image = image.clone();
                        move |_| {
                            tracing::warn!("Error loading image: {}", image);
                            on_settled.call(ImageOutcome::Failed);
                        }
                    },
                }
            }
        }
    }
}
