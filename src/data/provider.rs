use async_trait::async_trait;

use crate::{
    config::{BINANCE, BinanceApiConfig},
    data::load_klines,
    domain::{CandleSeries, Granularity, KlineError},
};

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch up to `limit` most recent candles for `symbol`, oldest first.
    async fn fetch_candles(
        &self,
        symbol: &str,
        granularity: Granularity,
        limit: usize,
    ) -> Result<CandleSeries, KlineError>;
}

/// Trims and upper-cases a user supplied symbol. No known-symbol list is consulted;
/// the exchange decides whether the pair exists.
pub fn normalize_symbol(raw: &str) -> Result<String, KlineError> {
    let symbol = raw.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(KlineError::InvalidRequest("symbol is empty".to_string()));
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(KlineError::InvalidRequest(format!(
            "symbol {:?} contains characters other than letters and digits",
            symbol
        )));
    }
    Ok(symbol)
}

pub fn check_limit(limit: usize) -> Result<(), KlineError> {
    let max = BINANCE.limits.klines_limit_max as usize;
    if limit == 0 || limit > max {
        return Err(KlineError::InvalidRequest(format!(
            "limit {} outside 1..={}",
            limit, max
        )));
    }
    Ok(())
}

#[derive(Default)]
pub struct BinanceProvider {
    config: BinanceApiConfig,
}

impl BinanceProvider {
    pub fn new(config: BinanceApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MarketDataProvider for BinanceProvider {
    async fn fetch_candles(
        &self,
        symbol: &str,
        granularity: Granularity,
        limit: usize,
    ) -> Result<CandleSeries, KlineError> {
        check_limit(limit)?;
        let symbol = normalize_symbol(symbol)?;
        load_klines(&self.config, &symbol, granularity, limit).await
    }
}
