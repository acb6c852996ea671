mod sma;

pub use sma::{SmaSeries, sma};
