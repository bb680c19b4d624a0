//! Main application entry point

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ad_data::DashboardConfig;

mod app;

use app::DashboardApp;

/// Interactive alumni dashboard
#[derive(Parser, Debug)]
#[command(name = "alumni-dashboard", version, about)]
struct Args {
    /// JSON config file (defaults to ./alumni-dashboard.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Payload URL or local JSON file; overrides the config and environment
    #[arg(short, long)]
    source: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = DashboardConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(source) = &args.source {
        config.apply_source_override(source);
    }

    info!("Starting alumni dashboard, source {:?}", config.source);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Alumni Dashboard",
        options,
        Box::new(move |cc| Box::new(DashboardApp::new(cc, config, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
