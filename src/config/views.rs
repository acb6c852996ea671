//! Per-view fetch / indicator / display settings for the dashboard.

use {
    anyhow::{Context, Result, bail},
    serde::{Deserialize, Serialize},
    std::{collections::BTreeSet, path::Path},
    strum_macros::Display,
};

use crate::{config::BINANCE, domain::Granularity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ViewKind {
    Weekly,
    Daily,
    Hourly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub kind: ViewKind,
    pub granularity: Granularity,
    /// Candles requested from the API. SMAs are computed over all of them.
    pub limit: usize,
    pub sma_windows: Vec<usize>,
    /// Trailing candles kept for display.
    pub slice_len: usize,
    pub title: String,
}

impl ViewConfig {
    /// Windows deduplicated and ascending: the order SMA traces are drawn in.
    pub fn sorted_windows(&self) -> Vec<usize> {
        self.sma_windows
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn validate(&self) -> Result<()> {
        let max = BINANCE.limits.klines_limit_max as usize;
        if self.limit == 0 || self.limit > max {
            bail!("{} view: limit {} outside 1..={}", self.kind, self.limit, max);
        }
        if self.sma_windows.is_empty() {
            bail!("{} view: no SMA windows configured", self.kind);
        }
        if self.sma_windows.contains(&0) {
            bail!("{} view: SMA window of 0", self.kind);
        }
        if self.slice_len == 0 {
            bail!("{} view: slice_len must be at least 1", self.kind);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub weekly: ViewConfig,
    pub daily: ViewConfig,
    pub hourly: ViewConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            weekly: ViewConfig {
                kind: ViewKind::Weekly,
                granularity: Granularity::Week1,
                limit: 100,
                sma_windows: vec![5, 10, 20],
                slice_len: 52,
                title: "Weekly Klines with SMA (1 Year)".to_string(),
            },
            daily: ViewConfig {
                kind: ViewKind::Daily,
                granularity: Granularity::Day1,
                limit: 365,
                sma_windows: vec![50, 200],
                slice_len: 90,
                title: "Daily Klines with SMA (3 Months)".to_string(),
            },
            hourly: ViewConfig {
                kind: ViewKind::Hourly,
                granularity: Granularity::Hour1,
                limit: 1000,
                sma_windows: vec![20, 50, 100],
                slice_len: 168,
                title: "Hourly Klines with SMA (1 Week)".to_string(),
            },
        }
    }
}

impl DashboardConfig {
    /// Views in page order: weekly, daily, hourly.
    pub fn views(&self) -> [&ViewConfig; 3] {
        [&self.weekly, &self.daily, &self.hourly]
    }

    /// Each slot must carry its own kind: charts and exported files are keyed by it.
    pub fn validate(&self) -> Result<()> {
        let expected = [ViewKind::Weekly, ViewKind::Daily, ViewKind::Hourly];
        for (view, kind) in self.views().into_iter().zip(expected) {
            if view.kind != kind {
                bail!("{} slot holds a {} view", kind, view.kind);
            }
            view.validate()?;
        }
        Ok(())
    }

    /// Loads a JSON replacement for the built-in views.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading view config {}", path.display()))?;
        let config: DashboardConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing view config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_three_views() {
        let config = DashboardConfig::default();
        config.validate().unwrap();

        let [w, d, h] = config.views();
        assert_eq!(
            (w.granularity, w.limit, w.slice_len),
            (Granularity::Week1, 100, 52)
        );
        assert_eq!(
            (d.granularity, d.limit, d.slice_len),
            (Granularity::Day1, 365, 90)
        );
        assert_eq!(
            (h.granularity, h.limit, h.slice_len),
            (Granularity::Hour1, 1000, 168)
        );
        assert_eq!(w.sma_windows, vec![5, 10, 20]);
        assert_eq!(d.sma_windows, vec![50, 200]);
        assert_eq!(h.sma_windows, vec![20, 50, 100]);
    }

    #[test]
    fn sorted_windows_dedups_and_sorts() {
        let mut view = DashboardConfig::default().weekly;
        view.sma_windows = vec![20, 5, 10, 5];
        assert_eq!(view.sorted_windows(), vec![5, 10, 20]);
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = DashboardConfig::default();
        config.hourly.limit = 1500;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.daily.sma_windows = vec![0, 50];
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.weekly.slice_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_kind_in_wrong_slot() {
        let mut config = DashboardConfig::default();
        config.hourly.kind = ViewKind::Daily;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Hourly slot"));
    }

    #[test]
    fn views_file_with_duplicate_kind_is_rejected() {
        let mut config = DashboardConfig::default();
        config.hourly.kind = ViewKind::Daily;
        let path = std::env::temp_dir().join(format!("sma_views_dup_{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = DashboardConfig::from_json_file(&path);
        let _ = std::fs::remove_file(&path);
        assert!(loaded.is_err());
    }

    #[test]
    fn json_round_trip_uses_interval_codes() {
        let json = serde_json::to_string(&DashboardConfig::default()).unwrap();
        assert!(json.contains("\"granularity\":\"1w\""));
        let back: DashboardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DashboardConfig::default());
    }
}
