//! UI Components for the Folio desktop app.

mod gallery_image;
mod markdown;
mod project_card;
mod project_drawer;
mod resume_card;

pub use gallery_image::GalleryImage;
pub use markdown::{render_markdown, Markdown};
pub use project_card::ProjectCard;
pub use project_drawer::ProjectDrawer;
pub use resume_card::{monogram, ResumeCard};
