//! Folio CLI
//!
//! Inspect portfolio data and run project galleries without the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize the bundled portfolio
//! folio info
//!
//! # List projects with their image counts
//! folio projects
//!
//! # Validate a portfolio file and load every image it references
//! folio --data ./portfolio.json check --strict
//!
//! # Watch a card open with simulated image latency and failures
//! folio simulate market-shop --latency-ms 150 --fail 2 --reopen
//! ```

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{
    spawn_card, CardMode, CardSnapshot, FolioError, FolioResult, FsImageLoader, GalleryConfig,
    ImageLoader, ImageRef, Portfolio, ProjectRecord, ValidationIssue,
};
use futures::future::BoxFuture;
use tokio::time::Instant;

/// Longest a single gallery may take to settle during `check`
const CHECK_TIMEOUT: Duration = Duration::from_secs(30);

/// Folio - personal portfolio tooling
#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Folio - inspect portfolio data and exercise project galleries")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Portfolio JSON file (default: the bundled resume)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Card settling delay in milliseconds
    #[arg(long, default_value_t = 1000, global = true)]
    settle_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show portfolio summary
    Info,

    /// List projects
    Projects,

    /// Validate the portfolio and load every project image
    Check {
        /// Exit with an error when any problem is found
        #[arg(long)]
        strict: bool,
    },

    /// Open one project card against a simulated image loader
    Simulate {
        /// Project slug (see `folio projects`)
        slug: String,

        /// Base latency per image; image N settles after N+1 multiples of it
        #[arg(long, default_value_t = 200)]
        latency_ms: u64,

        /// Image index that fails to load (repeatable)
        #[arg(long = "fail", value_name = "INDEX")]
        fail: Vec<usize>,

        /// Close and reopen the drawer before the first opening finishes
        #[arg(long)]
        reopen: bool,
    },
}

// ============================================================================
// Loaders
// ============================================================================

/// Wraps another loader and counts failed loads
struct TallyLoader {
    inner: Arc<dyn ImageLoader>,
    failed: Arc<AtomicUsize>,
}

impl ImageLoader for TallyLoader {
    fn load(&self, image: ImageRef) -> BoxFuture<'static, FolioResult<()>> {
        let load = self.inner.load(image);
        let failed = self.failed.clone();
        Box::pin(async move {
            let result = load.await;
            if result.is_err() {
                failed.fetch_add(1, Ordering::SeqCst);
            }
            result
        })
    }
}

/// Settles image N after `(N + 1) * latency`, failing the chosen indices
///
/// Loads only see the reference, so a repeated reference follows the
/// schedule of its first position.
struct SimulatedLoader {
    positions: HashMap<ImageRef, usize>,
    failing: HashSet<usize>,
    latency: Duration,
}

impl SimulatedLoader {
    fn new(project: &ProjectRecord, failing: &[usize], latency: Duration) -> Self {
        let mut positions = HashMap::new();
        for (index, image) in project.images.iter().enumerate() {
            positions.entry(image.clone()).or_insert(index);
        }
        Self {
            positions,
            failing: failing.iter().copied().collect(),
            latency,
        }
    }
}

impl ImageLoader for SimulatedLoader {
    fn load(&self, image: ImageRef) -> BoxFuture<'static, FolioResult<()>> {
        let Some(index) = self.positions.get(&image).copied() else {
            tracing::warn!(%image, "Image is not part of the simulated project");
            return Box::pin(async move { Err(FolioError::ImageLoadFailed(image)) });
        };
        let fails = self.failing.contains(&index);
        let latency = self.latency * (index as u32 + 1);
        tracing::debug!(%image, index, fails, "Simulated load scheduled");
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            if fails {
                Err(FolioError::ImageLoadFailed(image))
            } else {
                Ok(())
            }
        })
    }
}

// ============================================================================
// Commands
// ============================================================================

fn print_info(portfolio: &Portfolio, data: Option<&PathBuf>) {
    println!("Folio v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Portfolio:");
    println!("  Name: {}", portfolio.name);
    if !portfolio.description.is_empty() {
        println!("  Description: {}", portfolio.description);
    }
    match data {
        Some(path) => println!("  Source: {}", path.display()),
        None => println!("  Source: bundled"),
    }
    println!();
    println!("Contents:");
    println!("  Work entries: {}", portfolio.work.len());
    println!("  Education entries: {}", portfolio.education.len());
    println!("  Projects: {}", portfolio.projects.len());
    println!("  Skills: {}", portfolio.skills.len());
}

fn print_projects(portfolio: &Portfolio) {
    if portfolio.projects.is_empty() {
        println!("No projects.");
        return;
    }
    println!("Projects ({}):", portfolio.projects.len());
    for project in &portfolio.projects {
        let images = match project.images.len() {
            0 => "text only".to_string(),
            1 => "1 image".to_string(),
            n => format!("{} images", n),
        };
        println!("  {:<28} {:<12} [{}]", project.slug(), images, project.tags.join(", "));
    }
}

async fn check(portfolio: &Portfolio, config: GalleryConfig, strict: bool) -> Result<()> {
    let issues = portfolio.validate();
    if issues.is_empty() {
        println!("Data: ok");
    } else {
        println!("Data: {} issue(s)", issues.len());
        for issue in &issues {
            println!("  - {}", issue);
        }
    }

    // Only the images matter here.
    let config = config.with_settle_delay(Duration::ZERO);
    let fs_loader: Arc<dyn ImageLoader> = Arc::new(FsImageLoader::for_portfolio(portfolio));
    let mut failed_images = 0;

    println!("Images:");
    for project in portfolio.projects.iter().filter(|p| !p.images.is_empty()) {
        let failed = Arc::new(AtomicUsize::new(0));
        let loader = Arc::new(TallyLoader {
            inner: fs_loader.clone(),
            failed: failed.clone(),
        });
        tracing::info!("Checking {} images of '{}'", project.images.len(), project.title);
        let card = spawn_card(Arc::new(project.clone()), config, loader);
        card.expand()?;

        let snapshot = tokio::time::timeout(
            CHECK_TIMEOUT,
            card.wait_for(|s| s.mode == CardMode::GalleryImages),
        )
        .await
        .with_context(|| format!("gallery for '{}' did not settle", project.title))??;
        card.shutdown().await;

        let failed = failed.load(Ordering::SeqCst);
        failed_images += failed;
        if failed > 0 {
            tracing::warn!("{} of {} images failed for '{}'", failed, snapshot.total, project.title);
        }
        println!(
            "  {:<28} {}/{} settled, {} failed",
            project.slug(),
            snapshot.loaded,
            snapshot.total,
            failed
        );
    }

    let problems = issues.len() + failed_images;
    if strict && problems > 0 {
        bail!("{} problem(s) found", problems);
    }
    Ok(())
}

fn print_snapshot(start: Instant, snapshot: &CardSnapshot) {
    println!(
        "[{:>6}ms] {:<16} {}  {}/{}",
        start.elapsed().as_millis(),
        snapshot.mode,
        snapshot.opening,
        snapshot.loaded,
        snapshot.total
    );
}

async fn simulate(
    portfolio: &Portfolio,
    config: GalleryConfig,
    slug: &str,
    latency: Duration,
    failing: &[usize],
    reopen: bool,
) -> Result<()> {
    let project = portfolio.project(slug)?.clone();
    for issue in portfolio.validate() {
        if let ValidationIssue::DuplicateImage { project, image } = &issue {
            if project == slug {
                tracing::warn!("{}; image #{} follows the first copy's timing", issue, image);
            }
        }
    }
    let loader = Arc::new(SimulatedLoader::new(&project, failing, latency));
    let total = project.images.len();
    let card = spawn_card(Arc::new(project), config, loader);

    let start = Instant::now();
    let mut rx = card.subscribe();
    print_snapshot(start, &rx.borrow_and_update());
    let printer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let snapshot = *rx.borrow_and_update();
            print_snapshot(start, &snapshot);
        }
    });

    let settled = |s: &CardSnapshot| matches!(s.mode, CardMode::GalleryImages | CardMode::GalleryText);

    card.wait_for(|s| s.mode == CardMode::CardReadyCollapsed).await?;
    card.expand()?;
    if reopen {
        tracing::debug!("Reopening '{}' before it settles", slug);
        tokio::time::sleep(latency / 2).await;
        card.collapse()?;
        card.wait_for(|s| s.mode == CardMode::CardReadyCollapsed).await?;
        card.expand()?;
    }
    let snapshot = card.wait_for(settled).await?;
    card.shutdown().await;
    let _ = printer.await;

    let failed = failing
        .iter()
        .filter(|index| **index < total)
        .collect::<HashSet<_>>()
        .len();
    println!();
    println!(
        "Settled {} of {} images ({} failed) as {}",
        snapshot.loaded, snapshot.total, failed, snapshot.mode
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    folio_core::logging::init(cli.verbose);

    let portfolio = Portfolio::load_or_bundled(cli.data.as_deref())
        .context("Failed to load portfolio")?;
    let config = GalleryConfig::default().with_settle_delay(Duration::from_millis(cli.settle_ms));

    match cli.command {
        Commands::Info => print_info(&portfolio, cli.data.as_ref()),
        Commands::Projects => print_projects(&portfolio),
        Commands::Check { strict } => check(&portfolio, config, strict).await?,
        Commands::Simulate {
            slug,
            latency_ms,
            fail,
            reopen,
        } => {
            simulate(
                &portfolio,
                config,
                &slug,
                Duration::from_millis(latency_ms),
                &fail,
                reopen,
            )
            .await?
        }
    }

    Ok(())
}
