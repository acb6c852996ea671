//! Configuration module for the dashboard.

mod binance;
mod debug;
mod persistence;
mod views;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use binance::{BINANCE, BinanceApiConfig};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
pub use views::{DashboardConfig, ViewConfig, ViewKind};
