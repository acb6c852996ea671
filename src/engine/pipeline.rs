use crate::{
    analysis::{SmaSeries, sma},
    config::{DF, ViewConfig},
    data::MarketDataProvider,
    domain::{CandleSeries, KlineError},
    models::ChartSpec,
    utils::trailing,
};

/// One SMA per configured window, each over the *full* fetched series so the
/// first displayed candles are already backed by history.
pub fn compute_smas(series: &CandleSeries, windows: &[usize]) -> Result<Vec<SmaSeries>, KlineError> {
    let closes = series.closes();
    windows.iter().map(|&window| sma(&closes, window)).collect()
}

/// Co-slices candles and SMAs to the trailing `slice_len` positions.
pub fn build_chart_spec(view: &ViewConfig, series: &CandleSeries, smas: &[SmaSeries]) -> ChartSpec {
    let candles = trailing(series.candles(), view.slice_len).to_vec();
    let smas = smas
        .iter()
        .map(|s| (s.window, s.trailing(view.slice_len)))
        .collect();

    ChartSpec {
        kind: view.kind,
        symbol: series.symbol().to_string(),
        granularity: series.granularity(),
        title: view.title.clone(),
        candles,
        smas,
    }
}

/// fetch -> compute -> slice for a single view.
pub async fn run_view(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    view: &ViewConfig,
) -> Result<ChartSpec, KlineError> {
    let series = provider
        .fetch_candles(symbol, view.granularity, view.limit)
        .await?;
    let windows = view.sorted_windows();
    let smas = compute_smas(&series, &windows)?;
    let spec = build_chart_spec(view, &series, &smas);

    if DF.log_pipeline {
        log::info!(
            "{} {}: fetched {}, windows {:?}, displaying {}",
            symbol,
            view.kind,
            series.len(),
            windows,
            spec.candles.len()
        );
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DashboardConfig,
        domain::{Candle, Granularity},
    };
    use chrono::DateTime;

    fn series(closes: &[f64]) -> CandleSeries {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let t = DateTime::from_timestamp_millis(i as i64 * 3_600_000).unwrap();
                Candle::new(t, c, c, c, 1.0)
            })
            .collect();
        CandleSeries::new("BTCUSDT", Granularity::Hour1, candles).unwrap()
    }

    #[test]
    fn smas_use_full_history_before_slicing() {
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let mut view = DashboardConfig::default().hourly;
        view.sma_windows = vec![3];
        view.slice_len = 4;

        let s = series(&closes);
        let smas = compute_smas(&s, &view.sorted_windows()).unwrap();
        let spec = build_chart_spec(&view, &s, &smas);

        assert_eq!(spec.candles.len(), 4);
        assert_eq!(spec.candles[0].close, 7.0);
        // First displayed position already has a value thanks to earlier closes
        assert_eq!(
            spec.smas[&3].values,
            vec![Some(6.0), Some(7.0), Some(8.0), Some(9.0)]
        );
    }

    #[test]
    fn short_series_displays_everything_available() {
        let closes = vec![5.0; 30];
        let view = DashboardConfig::default().daily; // slice 90, windows 50/200
        let s = series(&closes);
        let smas = compute_smas(&s, &view.sorted_windows()).unwrap();
        let spec = build_chart_spec(&view, &s, &smas);

        assert_eq!(spec.candles.len(), 30);
        for sma in spec.smas.values() {
            assert_eq!(sma.len(), 30);
            assert_eq!(sma.defined_count(), 0);
        }
        assert_eq!(spec.trace_count(), 3);
    }

    #[test]
    fn every_sma_is_aligned_with_the_candle_slice() {
        let closes: Vec<f64> = (0..1000).map(|x| 100.0 + (x % 17) as f64).collect();
        let view = DashboardConfig::default().hourly;
        let s = series(&closes);
        let smas = compute_smas(&s, &view.sorted_windows()).unwrap();
        let spec = build_chart_spec(&view, &s, &smas);

        assert_eq!(spec.candles.len(), 168);
        assert_eq!(spec.smas.keys().copied().collect::<Vec<_>>(), vec![20, 50, 100]);
        for sma in spec.smas.values() {
            assert_eq!(sma.len(), spec.candles.len());
            assert!(sma.values.iter().all(Option::is_some));
        }
    }
}
