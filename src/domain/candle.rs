use {
    crate::{
        domain::{Granularity, KlineError},
        utils::is_strictly_increasing,
    },
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
};

/// One kline projected down to the fields the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open_time: DateTime<Utc>,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(open_time: DateTime<Utc>, close: f64, high: f64, low: f64, volume: f64) -> Self {
        Candle {
            open_time,
            close,
            high,
            low,
            volume,
        }
    }

    pub fn open_time_ms(&self) -> i64 {
        self.open_time.timestamp_millis()
    }
}

/// Candles for one (symbol, granularity), oldest first.
///
/// Only built through [`CandleSeries::new`], which guarantees the series is
/// non-empty and open times are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleSeries {
    symbol: String,
    granularity: Granularity,
    candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn new(
        symbol: impl Into<String>,
        granularity: Granularity,
        candles: Vec<Candle>,
    ) -> Result<Self, KlineError> {
        let symbol = symbol.into();
        if candles.is_empty() {
            return Err(KlineError::EmptySeries {
                symbol,
                granularity,
            });
        }
        let open_times: Vec<DateTime<Utc>> = candles.iter().map(|c| c.open_time).collect();
        if !is_strictly_increasing(&open_times) {
            return Err(KlineError::Parse(format!(
                "{} {}: open times are duplicated or out of order",
                symbol, granularity
            )));
        }
        Ok(CandleSeries {
            symbol,
            granularity,
            candles,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }
}
