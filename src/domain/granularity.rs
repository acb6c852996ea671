use {
    crate::utils::TimeUtils,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// Candle interval, spelled the way the klines endpoint expects it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum Granularity {
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    Minute1,
    #[strum(serialize = "5m")]
    #[serde(rename = "5m")]
    Minute5,
    #[strum(serialize = "15m")]
    #[serde(rename = "15m")]
    Minute15,
    #[strum(serialize = "30m")]
    #[serde(rename = "30m")]
    Minute30,
    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    Hour1,
    #[strum(serialize = "4h")]
    #[serde(rename = "4h")]
    Hour4,
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    Day1,
    #[strum(serialize = "1w")]
    #[serde(rename = "1w")]
    Week1,
}

impl Granularity {
    pub fn interval_ms(&self) -> i64 {
        use TimeUtils as T;
        match self {
            Self::Minute1 => T::MS_IN_MIN,
            Self::Minute5 => T::MS_IN_MIN * 5,
            Self::Minute15 => T::MS_IN_MIN * 15,
            Self::Minute30 => T::MS_IN_MIN * 30,
            Self::Hour1 => T::MS_IN_H,
            Self::Hour4 => T::MS_IN_H * 4,
            Self::Day1 => T::MS_IN_D,
            Self::Week1 => T::MS_IN_W,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn display_matches_api_interval_codes() {
        assert_eq!(Granularity::Week1.to_string(), "1w");
        assert_eq!(Granularity::Day1.to_string(), "1d");
        assert_eq!(Granularity::Hour1.to_string(), "1h");
    }

    #[test]
    fn parses_back_from_code() {
        for g in Granularity::iter() {
            assert_eq!(Granularity::from_str(&g.to_string()).unwrap(), g);
        }
        assert!(Granularity::from_str("2w").is_err());
    }

    #[test]
    fn serde_uses_api_codes() {
        let json = serde_json::to_string(&Granularity::Hour1).unwrap();
        assert_eq!(json, "\"1h\"");
        let g: Granularity = serde_json::from_str("\"1w\"").unwrap();
        assert_eq!(g, Granularity::Week1);
    }

    #[test]
    fn intervals_are_ordered() {
        let ms: Vec<i64> = Granularity::iter().map(|g| g.interval_ms()).collect();
        assert!(ms.windows(2).all(|w| w[0] < w[1]));
    }
}
