//! lazy-router demo application.
//!
//! # Architecture Overview
//!
//! ```text
//!   config (TOML or built-in) ──▶ RouteTable ──▶ Navigator ──▶ RouteSnapshot ──▶ component
//!                                     │              │   ▲
//!                                     │              │   └── resolve (DataResolver)
//!                                     ▼              ▼
//!                                 Preloader ───▶ ModuleCache ◀── ModuleLoader
//!                                (strategy)
//! ```
//!
//! Bootstraps the application, performs the requested navigations in order,
//! prints each committed snapshot as JSON, then waits for preloads.

use std::path::PathBuf;

use clap::Parser;

use lazy_router::app::{self, AppServices};
use lazy_router::config::load_config;
use lazy_router::observability::logging::init_logging;
use lazy_router::preloading::PreloadOutcome;
use lazy_router::Application;

#[derive(Parser)]
#[command(name = "lazy-router")]
#[command(about = "Client-side router with lazy modules, preloading and resolvers", long_about = None)]
struct Cli {
    /// Route configuration file (TOML). Uses the built-in routes when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URL to navigate to after bootstrap; may be repeated.
    #[arg(short, long = "navigate")]
    navigate: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => app::default_config(),
    };
    init_logging(&config.observability);

    tracing::info!("lazy-router v0.1.0 starting");

    let services = AppServices::new(&config.simulation);
    let mut application = Application::bootstrap(&config, &services.modules, &services.resolvers).await?;

    for url in &cli.navigate {
        match application.navigate(url).await {
            Ok(snapshot) => println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?),
            Err(e) => eprintln!("navigation to {} failed: {}", url, e),
        }
    }

    if let Some(preload) = application.take_preload() {
        for report in preload.join().await {
            match report.outcome {
                PreloadOutcome::Failed(e) => tracing::warn!(path = %report.path, error = %e, "Preload failed"),
                outcome => tracing::info!(path = %report.path, outcome = ?outcome, "Preload settled"),
            }
        }
    }

    application.shutdown();
    tracing::info!("Shutdown complete");
    Ok(())
}
