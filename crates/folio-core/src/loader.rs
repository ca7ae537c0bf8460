//! Image loading from disk and inline data URIs.

use std::path::{Path, PathBuf};

use base64::Engine;
use futures::future::BoxFuture;

use crate::error::{FolioError, FolioResult};
use crate::gallery::ImageLoader;
use crate::portfolio::Portfolio;
use crate::types::{ImageRef, ImageSource};

/// Loads project images by decoding them with the `image` crate.
///
/// Remote URLs are not fetched; they count as loaded and are left to the
/// renderer.
#[derive(Debug, Clone, Default)]
pub struct FsImageLoader {
    base_dir: Option<PathBuf>,
}

impl FsImageLoader {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    pub fn for_portfolio(portfolio: &Portfolio) -> Self {
        Self::new(portfolio.base_dir().map(Path::to_path_buf))
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, image: ImageRef) -> BoxFuture<'static, FolioResult<()>> {
        let source = image.resolve(self.base_dir.as_deref());
        Box::pin(async move {
            check_source(source).await.map_err(|e| {
                tracing::debug!(%image, error = %e, "Image check failed");
                FolioError::ImageLoadFailed(image)
            })
        })
    }
}

async fn check_source(source: FolioResult<ImageSource>) -> FolioResult<()> {
    match source? {
        ImageSource::Remote(url) => {
            tracing::debug!(%url, "Not fetching remote image");
            Ok(())
        }
        ImageSource::Inline(uri) => {
            let bytes = decode_data_uri(&uri)?;
            image::load_from_memory(&bytes)?;
            Ok(())
        }
        ImageSource::Local(path) => {
            tokio::task::spawn_blocking(move || image::open(&path).map(|_| ()))
                .await
                .map_err(|e| FolioError::Io(std::io::Error::other(e)))??;
            Ok(())
        }
    }
}

/// Payload of a base64 `data:` URI
fn decode_data_uri(uri: &str) -> FolioResult<Vec<u8>> {
    let invalid = || FolioError::InvalidImageRef(uri.chars().take(32).collect());

    let rest = uri.strip_prefix("data:").ok_or_else(invalid)?;
    let (header, payload) = rest.split_once(',').ok_or_else(invalid)?;
    if !header.ends_with(";base64") {
        return Err(invalid());
    }
    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|_| invalid())
}

/// `src` attribute for an image: URLs pass through, local files are inlined.
pub fn display_src(image: &ImageRef, base_dir: Option<&Path>) -> FolioResult<String> {
    match image.resolve(base_dir)? {
        ImageSource::Remote(url) => Ok(url),
        ImageSource::Inline(uri) => Ok(uri),
        ImageSource::Local(path) => {
            let bytes = std::fs::read(&path)?;
            let mime = image::ImageFormat::from_path(&path)
                .map(|format| format.to_mime_type())
                .unwrap_or("application/octet-stream");
            let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
            Ok(format!("data:{};base64,{}", mime, encoded))
        }
    }
}
