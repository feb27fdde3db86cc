//! Command line and window configuration.

use clap::Parser;
use std::path::PathBuf;

pub const APP_NAME: &str = "Dashboard Financeiro";
pub const WINDOW_SIZE: [f32; 2] = [1400.0, 900.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [1000.0, 700.0];

/// Interactive dashboard for regional economic indicators.
#[derive(Parser, Debug)]
#[command(name = "edb_dashboard", version, about, long_about = None)]
pub struct DashboardArgs {
    /// CSV export with one column per year. Defaults to EDB.csv in the
    /// working directory; log verbosity follows RUST_LOG.
    #[arg(long, default_value = "EDB.csv")]
    pub data: PathBuf,
}
