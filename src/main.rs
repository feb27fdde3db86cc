//! Dashboard Financeiro - regional economic indicators
//!
//! Loads the EDB export once, reshapes it to one row per location and year, and lets the
//! user explore it by year, region and metric.

mod analysis;
mod charts;
mod config;
mod data;
mod gui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use config::DashboardArgs;
use data::Dataset;
use eframe::egui;
use gui::DashboardApp;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = DashboardArgs::parse();
    info!(path = %args.data.display(), "startup");

    // The dashboard has no use without its data source.
    let dataset = Dataset::load(&args.data)
        .with_context(|| format!("loading {}", args.data.display()))?;
    info!(records = dataset.len(), source = ?dataset.source(), "data loaded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::MIN_WINDOW_SIZE)
            .with_title(config::APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        config::APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, dataset)))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
