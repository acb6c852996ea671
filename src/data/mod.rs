mod bn_kline;
mod provider;

pub use {
    bn_kline::{parse_kline_row, parse_klines},
    provider::{BinanceProvider, MarketDataProvider, check_limit, normalize_symbol},
};

pub(crate) use bn_kline::load_klines;
