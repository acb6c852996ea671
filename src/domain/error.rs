use {
    crate::domain::Granularity,
    std::{error::Error, fmt},
};

#[derive(Debug, Clone, PartialEq)]
pub enum KlineError {
    /// Network failure, timeout, or non-2xx response from the klines endpoint.
    Fetch(String),
    /// Response did not match the kline row schema.
    Parse(String),
    /// The endpoint answered with zero candles.
    EmptySeries {
        symbol: String,
        granularity: Granularity,
    },
    /// Rejected locally before any request was issued.
    InvalidRequest(String),
}

impl fmt::Display for KlineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            KlineError::Fetch(msg) => write!(f, "Binance API fetch failed: {}", msg),
            KlineError::Parse(msg) => write!(f, "Malformed klines response: {}", msg),
            KlineError::EmptySeries {
                symbol,
                granularity,
            } => write!(f, "No candles returned for {} at {}", symbol, granularity),
            KlineError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl Error for KlineError {}
