#[derive(Debug, Clone, PartialEq)]
pub struct BinanceApiConfig {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
    /// Outer guard around the whole request + body read.
    pub request_deadline_ms: u64,
}

impl Default for BinanceApiConfig {
    fn default() -> Self {
        Self {
            timeout_ms: BINANCE.client.timeout_ms,
            retries: BINANCE.client.retries,
            backoff_ms: BINANCE.client.backoff_ms,
            request_deadline_ms: BINANCE.client.request_deadline_ms,
        }
    }
}

/// REST constraints for the klines endpoint.
pub struct RestLimits {
    pub klines_limit_max: i32,
    /// Field count of one kline row in the REST response.
    pub kline_row_len: usize,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
    /// Outer guard around the whole request + body read.
    pub request_deadline_ms: u64,
}

pub struct BinanceConfig {
    pub klines_url: &'static str,
    pub limits: RestLimits,
    pub client: ClientDefaults,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    klines_url: "https://api.binance.com/api/v3/klines",
    limits: RestLimits {
        klines_limit_max: 1000,
        kline_row_len: 12,
    },
    // Failures surface to the caller, never retried
    client: ClientDefaults {
        timeout_ms: 10_000,
        retries: 0,
        backoff_ms: 0,
        request_deadline_ms: 15_000,
    },
};
