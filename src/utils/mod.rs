mod time_utils;
mod vec_utils;

pub use time_utils::{TimeUtils, epoch_ms_to_utc};
pub use vec_utils::{is_strictly_increasing, trailing};
