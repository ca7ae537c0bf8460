//! Core types for Folio

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Label used for a project link when no explicit label is given
pub const DEFAULT_LINK_LABEL: &str = "View Project";

/// Reference to a project image as written in the portfolio data.
///
/// May be a remote URL, an inline `data:` URI, or a path relative to the
/// portfolio file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the reference, joining local paths onto `base_dir`.
    pub fn resolve(&self, base_dir: Option<&Path>) -> FolioResult<ImageSource> {
        let reference = self.0.trim();
        if reference.is_empty() {
            return Err(FolioError::InvalidImageRef(self.0.clone()));
        }

        if reference.starts_with("data:") {
            return Ok(ImageSource::Inline(reference.to_string()));
        }
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return Ok(ImageSource::Remote(reference.to_string()));
        }

        let path = Path::new(reference);
        let path = match base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        };
        Ok(ImageSource::Local(path))
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an image's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// http(s) URL, handed to the renderer as-is
    Remote(String),
    /// `data:` URI with the payload inline
    Inline(String),
    /// File on disk
    Local(PathBuf),
}

/// One project shown as a card with a detail drawer.
///
/// Immutable once loaded. `images` order defines the preview (first image)
/// and the gallery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_text: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Markdown shown in the drawer when there are no images
    #[serde(default)]
    pub long_text: Option<String>,
}

impl ProjectRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            link: None,
            link_text: None,
            images: Vec::new(),
            long_text: None,
        }
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(ImageRef::new).collect();
        self
    }

    pub fn with_long_text(mut self, text: impl Into<String>) -> Self {
        self.long_text = Some(text.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>, label: Option<&str>) -> Self {
        self.link = Some(link.into());
        self.link_text = label.map(str::to_string);
        self
    }

    /// Preview image shown on the collapsed card
    pub fn preview(&self) -> Option<&ImageRef> {
        self.images.first()
    }

    /// Text for the drawer of a project without images
    pub fn detail_text(&self) -> &str {
        match self.long_text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => &self.description,
        }
    }

    pub fn link_label(&self) -> &str {
        self.link_text.as_deref().unwrap_or(DEFAULT_LINK_LABEL)
    }

    /// Stable, lowercase, dash-separated key derived from the title
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        let mut pending_dash = false;
        for ch in self.title.chars() {
            if ch.is_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.extend(ch.to_lowercase());
            } else {
                pending_dash = true;
            }
        }
        slug
    }
}

/// A position held, rendered as a resume card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    pub start: String,
    /// `None` while the position is current
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl WorkEntry {
    pub fn period(&self) -> String {
        format_period(&self.start, self.end.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

impl EducationEntry {
    pub fn period(&self) -> String {
        format_period(&self.start, self.end.as_deref())
    }
}

fn format_period(start: &str, end: Option<&str>) -> String {
    format!("{} - {}", start, end.unwrap_or("Present"))
}

/// Proficiency shown as a circular gauge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default = "default_skill_max")]
    pub max: f64,
}

fn default_skill_max() -> f64 {
    100.0
}

impl SkillLevel {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            min: 0.0,
            max: default_skill_max(),
        }
    }

    pub fn in_range(&self) -> bool {
        self.min < self.max && (self.min..=self.max).contains(&self.value)
    }
}

/// Kind of contact link, used to pick its styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Telegram,
    Phone,
    #[default]
    Web,
}

impl ContactKind {
    /// Whether the link should open outside the app window
    pub fn is_external(&self) -> bool {
        matches!(self, ContactKind::Telegram | ContactKind::Web)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub kind: ContactKind,
}
