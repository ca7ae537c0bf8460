//! Portfolio file loading tests
//!
//! Load portfolio JSON from disk and run its galleries against real image
//! files through the filesystem loader.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use folio_core::{
    display_src, spawn_card, CardMode, FolioError, FsImageLoader, GalleryConfig, ImageLoader,
    ImageSource, Portfolio,
};
use tempfile::TempDir;

const PORTFOLIO_JSON: &str = r#"{
    "name": "Ada Lovelace",
    "initials": "AL",
    "description": "Analyst",
    "summary": "Writes **programs** for engines.",
    "skills": ["Math"],
    "skill_levels": [{"name": "Math", "value": 95}],
    "projects": [
        {
            "title": "Note G",
            "description": "Bernoulli numbers",
            "tags": ["Math"],
            "images": ["shots/one.png", "shots/two.png", "shots/missing.png"]
        },
        {
            "title": "Letters",
            "description": "Correspondence",
            "long_text": "Dear **Charles**"
        }
    ],
    "contact": [{"label": "Mail", "href": "mailto:ada@example.com", "kind": "email"}]
}"#;

fn write_portfolio(dir: &Path) -> std::path::PathBuf {
    std::fs::create_dir_all(dir.join("shots")).unwrap();
    image::RgbImage::new(4, 3).save(dir.join("shots/one.png")).unwrap();
    image::RgbImage::new(3, 4).save(dir.join("shots/two.png")).unwrap();

    let path = dir.join("portfolio.json");
    std::fs::write(&path, PORTFOLIO_JSON).unwrap();
    path
}

#[test]
fn test_load_sets_base_dir() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(dir.path());

    let portfolio = Portfolio::load(&path).unwrap();
    assert_eq!(portfolio.base_dir(), Some(dir.path()));
    assert_eq!(portfolio.first_name(), "Ada");
    assert_eq!(portfolio.projects.len(), 2);
    assert!(portfolio.validate().is_empty());

    let image = &portfolio.project("note-g").unwrap().images[0];
    assert_eq!(
        image.resolve(portfolio.base_dir()).unwrap(),
        ImageSource::Local(dir.path().join("shots/one.png"))
    );
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Portfolio::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, FolioError::Io(_)));
}

#[test]
fn test_load_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"name\": ").unwrap();

    let err = Portfolio::load(&path).unwrap_err();
    assert!(matches!(err, FolioError::Json(_)));
}

#[test]
fn test_load_or_bundled_without_path() {
    let portfolio = Portfolio::load_or_bundled(None).unwrap();
    assert_eq!(portfolio, Portfolio::bundled().unwrap());
}

#[test]
fn test_display_src_inlines_local_files() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(dir.path());
    let portfolio = Portfolio::load(&path).unwrap();
    let project = portfolio.project("note-g").unwrap();

    let src = display_src(&project.images[0], portfolio.base_dir()).unwrap();
    assert!(src.starts_with("data:image/png;base64,"));

    let err = display_src(&project.images[2], portfolio.base_dir()).unwrap_err();
    assert!(matches!(err, FolioError::Io(_)));
}

#[tokio::test]
async fn test_gallery_with_missing_image_still_completes() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(dir.path());
    let portfolio = Portfolio::load(&path).unwrap();

    let loader = Arc::new(FsImageLoader::for_portfolio(&portfolio));
    let project = Arc::new(portfolio.project("note-g").unwrap().clone());
    let config = GalleryConfig::default().with_settle_delay(Duration::from_millis(1));
    let card = spawn_card(project, config, loader);

    card.expand().unwrap();
    let snapshot = tokio::time::timeout(
        Duration::from_secs(10),
        card.wait_for(|s| s.mode == CardMode::GalleryImages),
    )
    .await
    .expect("gallery settles")
    .unwrap();

    assert_eq!(snapshot.loaded, 3);
    assert_eq!(snapshot.total, 3);
    card.shutdown().await;
}

#[tokio::test]
async fn test_bundled_images_all_load() {
    let portfolio = Portfolio::bundled().unwrap();
    let loader = FsImageLoader::for_portfolio(&portfolio);

    let images: Vec<_> = portfolio
        .projects
        .iter()
        .flat_map(|p| p.images.iter().cloned())
        .collect();
    assert_eq!(images.len(), 14);

    for image in images {
        let name = image.to_string();
        loader
            .load(image)
            .await
            .unwrap_or_else(|e| panic!("{} failed to load: {}", name, e));
    }
}

#[tokio::test]
async fn test_bundled_gallery_settles_without_failures() {
    let portfolio = Portfolio::bundled().unwrap();
    let project = Arc::new(portfolio.project("market-shop").unwrap().clone());

    // Failures also settle a gallery, so check the display sources first.
    for image in &project.images {
        let src = display_src(image, portfolio.base_dir()).unwrap();
        assert!(src.starts_with("data:image/png;base64,"));
    }

    let loader = Arc::new(FsImageLoader::for_portfolio(&portfolio));
    let config = GalleryConfig::default().with_settle_delay(Duration::ZERO);
    let card = spawn_card(project, config, loader);
    card.expand().unwrap();
    let snapshot = tokio::time::timeout(
        Duration::from_secs(10),
        card.wait_for(|s| s.mode == CardMode::GalleryImages),
    )
    .await
    .expect("gallery settles")
    .unwrap();

    assert_eq!(snapshot.loaded, 6);
    assert_eq!(snapshot.total, 6);
    card.shutdown().await;
}
