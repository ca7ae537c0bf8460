//! Error types for Folio

use thiserror::Error;

use crate::types::ImageRef;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// An image reference could not be loaded or decoded.
    ///
    /// Inside a gallery this is absorbed: the image still counts as settled.
    #[error("Image failed to load: {0}")]
    ImageLoadFailed(ImageRef),

    /// An image reference is blank or cannot be interpreted
    #[error("Invalid image reference: {0}")]
    InvalidImageRef(String),

    /// No project matches the given slug
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// The card driver has been torn down
    #[error("Card closed")]
    CardClosed,

    /// Error parsing portfolio JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image decoding error
    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::ProjectNotFound("eco-shop".to_string());
        assert_eq!(format!("{}", err), "Project not found: eco-shop");

        let err = FolioError::ImageLoadFailed(ImageRef::new("blog/nvim1.png"));
        assert_eq!(format!("{}", err), "Image failed to load: blog/nvim1.png");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Json(_)));
    }
}
