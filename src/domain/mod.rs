// Domain types and value objects
mod candle;
mod error;
mod granularity;

pub use candle::{Candle, CandleSeries};
pub use error::KlineError;
pub use granularity::Granularity;
