#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{GalleryConfig, Portfolio};

/// Portfolio and card settings, set once from the command line
static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Everything the app needs before the first render
#[derive(Clone, Debug)]
pub struct LaunchOptions {
    pub portfolio: Arc<Portfolio>,
    pub gallery: GalleryConfig,
}

/// Launch options from the command line, or the bundled resume with defaults
/// when `main` has not stored any (component previews).
pub fn launch_options() -> LaunchOptions {
    LAUNCH.get().cloned().unwrap_or_else(|| LaunchOptions {
        portfolio: Arc::new(Portfolio::bundled().unwrap_or_else(|e| {
            tracing::error!("Bundled portfolio is unreadable: {}", e);
            Portfolio::default()
        })),
        gallery: GalleryConfig::default(),
    })
}

/// Folio - personal portfolio viewer
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio with progressive project galleries")]
struct Args {
    /// Portfolio JSON file (defaults to the bundled resume)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Milliseconds a project card shows its skeleton before settling
    #[arg(long, default_value_t = 1000)]
    settle_ms: u64,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    folio_core::logging::init(args.verbose);

    let portfolio = Portfolio::load_or_bundled(args.data.as_deref())
        .with_context(|| match &args.data {
            Some(path) => format!("loading portfolio from {}", path.display()),
            None => "loading bundled portfolio".to_string(),
        })?;

    for issue in portfolio.validate() {
        tracing::warn!("Portfolio issue: {}", issue);
    }

    let gallery = GalleryConfig::default().with_settle_delay(Duration::from_millis(args.settle_ms));
    let title = if portfolio.name.is_empty() {
        "Folio".to_string()
    } else {
        format!("Folio - {}", portfolio.name)
    };

    tracing::info!(
        "Starting '{}' with {} projects (settle delay {:?})",
        portfolio.name,
        portfolio.projects.len(),
        gallery.settle_delay
    );

    let _ = LAUNCH.set(LaunchOptions {
        portfolio: Arc::new(portfolio),
        gallery,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
