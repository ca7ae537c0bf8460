//! Portfolio data: loading, lookup and validation.
//!
//! The portfolio is fully materialized before any card is rendered. It is
//! either the bundled resume compiled into the binary, or a JSON file whose
//! directory becomes the base for relative image paths. The bundled resume's
//! images live next to it in `data/blog/`.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::types::{ContactLink, EducationEntry, ProjectRecord, SkillLevel, WorkEntry};

const BUNDLED_RESUME: &str = include_str!("../data/resume.json");

/// Base directory for the bundled resume's relative image paths
pub const BUNDLED_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Everything the site renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Markdown for the about section
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub work: Vec<WorkEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub skill_levels: Vec<SkillLevel>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub contact: Vec<ContactLink>,

    /// Directory relative image paths are resolved against
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Portfolio {
    /// The resume compiled into the binary
    pub fn bundled() -> FolioResult<Self> {
        let mut portfolio = Self::from_json(BUNDLED_RESUME)?;
        portfolio.base_dir = Some(PathBuf::from(BUNDLED_ASSETS_DIR));
        Ok(portfolio)
    }

    pub fn from_json(json: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a portfolio file. Its parent directory becomes the image base.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let mut portfolio = Self::from_json(&json)?;
        portfolio.base_dir = path.parent().map(Path::to_path_buf);
        tracing::info!(
            "Loaded portfolio '{}' from {:?} ({} projects)",
            portfolio.name,
            path,
            portfolio.projects.len()
        );
        Ok(portfolio)
    }

    /// Load `path` when given, otherwise the bundled resume.
    pub fn load_or_bundled(path: Option<&Path>) -> FolioResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// First word of the name, used by the hero greeting
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Find a project by its slug
    pub fn project(&self, slug: &str) -> FolioResult<&ProjectRecord> {
        self.projects
            .iter()
            .find(|p| p.slug() == slug)
            .ok_or_else(|| FolioError::ProjectNotFound(slug.to_string()))
    }

    /// Check the data for problems worth warning about.
    ///
    /// Problems never prevent rendering; an empty list means clean data.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                issues.push(ValidationIssue::EmptyTitle { index });
                continue;
            }
            let slug = project.slug();
            if !seen.insert(slug.clone()) {
                issues.push(ValidationIssue::DuplicateProject { slug: slug.clone() });
            }
            let mut references = HashSet::new();
            for (image, reference) in project.images.iter().enumerate() {
                if reference.as_str().trim().is_empty() {
                    issues.push(ValidationIssue::BlankImage {
                        project: slug.clone(),
                        image,
                    });
                } else if !references.insert(reference) {
                    issues.push(ValidationIssue::DuplicateImage {
                        project: slug.clone(),
                        image,
                    });
                }
            }
        }

        for level in &self.skill_levels {
            if !level.in_range() {
                issues.push(ValidationIssue::SkillOutOfRange {
                    name: level.name.clone(),
                    value: level.value,
                });
            }
        }

        issues
    }
}

/// A data problem found by [`Portfolio::validate`]
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    EmptyTitle { index: usize },
    DuplicateProject { slug: String },
    BlankImage { project: String, image: usize },
    /// Same reference listed earlier in the project's gallery
    DuplicateImage { project: String, image: usize },
    SkillOutOfRange { name: String, value: f64 },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyTitle { index } => write!(f, "project #{} has an empty title", index),
            ValidationIssue::DuplicateProject { slug } => write!(f, "duplicate project '{}'", slug),
            ValidationIssue::BlankImage { project, image } => {
                write!(f, "project '{}' image #{} is blank", project, image)
            }
            ValidationIssue::DuplicateImage { project, image } => {
                write!(f, "project '{}' image #{} repeats an earlier image", project, image)
            }
            ValidationIssue::SkillOutOfRange { name, value } => {
                write!(f, "skill '{}' value {} is outside its range", name, value)
            }
        }
    }
}
