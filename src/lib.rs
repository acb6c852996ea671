#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{SmaSeries, sma};
pub use app::{App, DashboardLoad};
pub use config::{BinanceApiConfig, DashboardConfig, ViewConfig, ViewKind};
pub use data::{BinanceProvider, MarketDataProvider};
pub use domain::{Candle, CandleSeries, Granularity, KlineError};
pub use engine::{ChartCollector, ChartRenderer, JsonChartWriter, RunReport, ViewOutcome, run};
pub use models::ChartSpec;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Trading pair to load on start-up (defaults to the last used symbol, else BTCUSDT)
    #[arg(long)]
    pub symbol: Option<String>,

    /// Run once without a window and write one JSON chart per view into DIR
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// JSON file replacing the built-in weekly/daily/hourly view settings
    #[arg(long, value_name = "FILE")]
    pub views: Option<PathBuf>,

    /// Upper bound for each klines request in milliseconds (default 15000)
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

impl Cli {
    pub fn dashboard_config(&self) -> anyhow::Result<DashboardConfig> {
        match &self.views {
            Some(path) => DashboardConfig::from_json_file(path),
            None => Ok(DashboardConfig::default()),
        }
    }

    /// Client settings; `--timeout-ms` caps both the HTTP timeout and the outer deadline.
    pub fn api_config(&self) -> BinanceApiConfig {
        let mut api = BinanceApiConfig::default();
        if let Some(ms) = self.timeout_ms {
            api.request_deadline_ms = ms;
            api.timeout_ms = api.timeout_ms.min(ms);
        }
        api
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli, config: DashboardConfig) -> App {
    App::new(cc, args, config)
}

/// Headless run: every view is written as a JSON chart artifact instead of displayed.
pub async fn export_charts(
    symbol: &str,
    out_dir: &std::path::Path,
    config: &DashboardConfig,
    api: BinanceApiConfig,
) -> anyhow::Result<RunReport> {
    let provider = BinanceProvider::new(api);
    let mut writer = JsonChartWriter::new(out_dir)?;
    run(&provider, &mut writer, symbol, config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_flag_caps_both_client_timeouts() {
        let args = Cli::try_parse_from(["sma-dashboard", "--timeout-ms", "500"]).unwrap();
        let api = args.api_config();
        assert_eq!(api.request_deadline_ms, 500);
        assert_eq!(api.timeout_ms, 500);
    }

    #[test]
    fn no_flags_keeps_default_client() {
        let args = Cli::try_parse_from(["sma-dashboard"]).unwrap();
        assert_eq!(args.api_config(), BinanceApiConfig::default());
        assert!(args.export.is_none());
        assert_eq!(args.dashboard_config().unwrap(), DashboardConfig::default());
    }
}
