use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const HOURLY_TIME_FORMAT: &str = "%m-%d %H:%M";

    /// Axis label for a timestamp. Sub-daily spacing gets the hour as well.
    pub fn format_axis_label(epoch_ms: i64, spacing_ms: i64) -> String {
        let format = if spacing_ms < Self::MS_IN_D {
            Self::HOURLY_TIME_FORMAT
        } else {
            Self::STANDARD_TIME_FORMAT
        };
        match epoch_ms_to_utc(epoch_ms) {
            Some(dt) => dt.format(format).to_string(),
            None => String::new(),
        }
    }
}

/// `None` when the value is outside chrono's representable range.
pub fn epoch_ms_to_utc(epoch_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(epoch_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_binance_open_time() {
        let dt = epoch_ms_to_utc(1_499_040_000_000).unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2017-07-03 00:00");
    }

    #[test]
    fn out_of_range_timestamp_is_none() {
        assert!(epoch_ms_to_utc(i64::MAX).is_none());
    }

    #[test]
    fn axis_label_depends_on_spacing() {
        let ms = 1_499_040_000_000;
        assert_eq!(TimeUtils::format_axis_label(ms, TimeUtils::MS_IN_W), "2017-07-03");
        assert_eq!(TimeUtils::format_axis_label(ms, TimeUtils::MS_IN_H), "07-03 00:00");
    }
}
