// src/app/state.rs

use crate::{
    config::ViewKind,
    engine::{RunReport, ViewOutcome},
    models::ChartSpec,
};

#[derive(Clone)]
pub(crate) struct ReadyState;

#[derive(Clone, Default)]
pub(crate) struct LoadingState {
    pub(crate) symbol: String,
}

pub(crate) enum AppState {
    Loading(LoadingState),
    Ready(ReadyState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState::default())
    }
}

#[derive(Debug, Clone)]
pub struct ViewFailure {
    pub kind: ViewKind,
    pub title: String,
    pub message: String,
}

/// Result of one orchestration run, handed from the loader thread to the UI.
#[derive(Debug, Clone, Default)]
pub struct DashboardLoad {
    pub symbol: String,
    pub charts: Vec<ChartSpec>,
    pub failures: Vec<ViewFailure>,
    /// Set when the whole run was rejected (e.g. an empty symbol).
    pub fatal: Option<String>,
}

impl DashboardLoad {
    pub fn from_report(report: RunReport, charts: Vec<ChartSpec>) -> Self {
        let failures = report
            .outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                ViewOutcome::Failed { kind, title, error } => Some(ViewFailure {
                    kind,
                    title,
                    message: format!("{:#}", error),
                }),
                ViewOutcome::Rendered { .. } => None,
            })
            .collect();
        Self {
            symbol: report.symbol,
            charts,
            failures,
            fatal: None,
        }
    }

    pub fn fatal(symbol: &str, message: String) -> Self {
        Self {
            symbol: symbol.to_string(),
            fatal: Some(message),
            ..Default::default()
        }
    }

    pub fn chart(&self, kind: ViewKind) -> Option<&ChartSpec> {
        self.charts.iter().find(|c| c.kind == kind)
    }

    pub fn failure(&self, kind: ViewKind) -> Option<&ViewFailure> {
        self.failures.iter().find(|f| f.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Granularity, KlineError};

    #[test]
    fn failed_views_become_messages() {
        let report = RunReport {
            symbol: "BTCUSDT".to_string(),
            outcomes: vec![
                ViewOutcome::Rendered {
                    kind: ViewKind::Weekly,
                    title: "W".to_string(),
                },
                ViewOutcome::Failed {
                    kind: ViewKind::Daily,
                    title: "D".to_string(),
                    error: anyhow::Error::new(KlineError::EmptySeries {
                        symbol: "BTCUSDT".to_string(),
                        granularity: Granularity::Day1,
                    }),
                },
            ],
        };

        let load = DashboardLoad::from_report(report, Vec::new());
        assert_eq!(load.symbol, "BTCUSDT");
        assert!(load.fatal.is_none());
        assert!(load.failure(ViewKind::Weekly).is_none());
        let daily = load.failure(ViewKind::Daily).unwrap();
        assert_eq!(daily.message, "No candles returned for BTCUSDT at 1d");
    }

    #[test]
    fn fatal_load_has_no_charts() {
        let load = DashboardLoad::fatal("", "symbol is empty".to_string());
        assert_eq!(load.fatal.as_deref(), Some("symbol is empty"));
        assert!(load.charts.is_empty());
        assert!(load.chart(ViewKind::Hourly).is_none());
    }
}
