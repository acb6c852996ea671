use {
    binance_sdk::{
        config::ConfigurationRestApi,
        errors::{self, ConnectorError as connection_error},
        spot::{
            SpotRestApi,
            rest_api::{KlinesIntervalEnum, KlinesItemInner, KlinesParams, RestApi},
        },
    },
    std::time::Duration,
};

use crate::{
    config::{BINANCE, BinanceApiConfig, DF},
    domain::{Candle, CandleSeries, Granularity, KlineError},
    utils::epoch_ms_to_utc,
};

pub fn interval_enum(granularity: Granularity) -> KlinesIntervalEnum {
    match granularity {
        Granularity::Minute1 => KlinesIntervalEnum::Interval1m,
        Granularity::Minute5 => KlinesIntervalEnum::Interval5m,
        Granularity::Minute15 => KlinesIntervalEnum::Interval15m,
        Granularity::Minute30 => KlinesIntervalEnum::Interval30m,
        Granularity::Hour1 => KlinesIntervalEnum::Interval1h,
        Granularity::Hour4 => KlinesIntervalEnum::Interval4h,
        Granularity::Day1 => KlinesIntervalEnum::Interval1d,
        Granularity::Week1 => KlinesIntervalEnum::Interval1w,
    }
}

// Positions within one 12-field kline row
const OPEN_TIME: usize = 0;
const HIGH: usize = 2;
const LOW: usize = 3;
const CLOSE: usize = 4;
const VOLUME: usize = 5;

fn field_as_f64(row: &[KlinesItemInner], idx: usize, name: &str) -> Result<f64, KlineError> {
    match &row[idx] {
        KlinesItemInner::String(s) => s
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| KlineError::Parse(format!("{} is not a number: {:?}", name, s))),
        other => Err(KlineError::Parse(format!(
            "{} has unexpected type: {:?}",
            name, other
        ))),
    }
}

/// Projects one positional kline row
/// `[open_time, open, high, low, close, volume, close_time, quote_volume, trades, taker_base, taker_quote, ignore]`
/// down to a [`Candle`].
pub fn parse_kline_row(row: &[KlinesItemInner]) -> Result<Candle, KlineError> {
    if row.len() != BINANCE.limits.kline_row_len {
        return Err(KlineError::Parse(format!(
            "expected {} fields per kline, got {}",
            BINANCE.limits.kline_row_len,
            row.len()
        )));
    }

    let open_time_ms = match &row[OPEN_TIME] {
        KlinesItemInner::Integer(ms) => *ms,
        other => {
            return Err(KlineError::Parse(format!(
                "open_time has unexpected type: {:?}",
                other
            )));
        }
    };
    let open_time = epoch_ms_to_utc(open_time_ms)
        .ok_or_else(|| KlineError::Parse(format!("open_time out of range: {}", open_time_ms)))?;

    Ok(Candle::new(
        open_time,
        field_as_f64(row, CLOSE, "close")?,
        field_as_f64(row, HIGH, "high")?,
        field_as_f64(row, LOW, "low")?,
        field_as_f64(row, VOLUME, "volume")?,
    ))
}

/// Whole response body to a validated series. Zero rows is `EmptySeries`, never an empty chart.
pub fn parse_klines(
    symbol: &str,
    granularity: Granularity,
    limit: usize,
    rows: &[Vec<KlinesItemInner>],
) -> Result<CandleSeries, KlineError> {
    if rows.len() > limit {
        return Err(KlineError::Parse(format!(
            "{} rows returned for limit {}",
            rows.len(),
            limit
        )));
    }
    let candles = rows
        .iter()
        .map(|row| parse_kline_row(row))
        .collect::<Result<Vec<Candle>, KlineError>>()?;
    CandleSeries::new(symbol, granularity, candles)
}

fn configure_binance_client(config: &BinanceApiConfig) -> Result<RestApi, KlineError> {
    let rest_conf = ConfigurationRestApi::builder()
        .timeout(config.timeout_ms)
        .retries(config.retries)
        .backoff(config.backoff_ms)
        .build()
        .map_err(|e| KlineError::Fetch(format!("client configuration failed: {}", e)))?;
    // Create the Spot REST API client
    Ok(SpotRestApi::production(rest_conf))
}

fn describe_api_error(e: anyhow::Error, context: &str) -> KlineError {
    if let Some(conn_err) = e.downcast_ref::<errors::ConnectorError>() {
        match conn_err {
            connection_error::ConnectorClientError(msg) => {
                log::error!("{} Client error: check request parameters. {}", context, msg);
            }
            connection_error::TooManyRequestsError(msg) => {
                log::warn!("{} Rate limit exceeded. {}", context, msg);
            }
            connection_error::RateLimitBanError(msg) => {
                log::error!("{} IP address banned by rate limiter. {}", context, msg);
            }
            errors::ConnectorError::ServerError { msg, status_code } => {
                log::error!(
                    "{} Server error: {} (status code: {:?})",
                    context,
                    msg,
                    status_code
                );
            }
            errors::ConnectorError::NetworkError(msg) => {
                log::error!("{} Network error: check connectivity. {}", context, msg);
            }
            errors::ConnectorError::NotFoundError(msg) => {
                log::error!("{} Resource not found. {}", context, msg);
            }
            connection_error::BadRequestError(msg) => {
                // Unknown symbols land here
                log::warn!("{} Bad request: {}", context, msg);
            }
            other => {
                log::error!("{} Unexpected connector error: {:?}", context, other);
            }
        }
        KlineError::Fetch(conn_err.to_string())
    } else {
        log::error!("{} Unexpected error during klines call: {:#}", context, e);
        KlineError::Fetch(e.to_string())
    }
}

async fn request_klines(
    rest_client: &RestApi,
    symbol: &str,
    granularity: Granularity,
    limit: usize,
) -> Result<Vec<Vec<KlinesItemInner>>, KlineError> {
    let context = format!("[{} {}]", symbol, granularity);
    let params = KlinesParams::builder(symbol.to_string(), interval_enum(granularity))
        .limit(limit as i32)
        .build()
        .map_err(|e| KlineError::InvalidRequest(e.to_string()))?;

    let response = rest_client
        .klines(params)
        .await
        .map_err(|e| describe_api_error(e, &context))?;
    response
        .data()
        .await
        .map_err(|e| KlineError::Parse(format!("{} {:#}", context, e)))
}

/// Bounds `fut` by `deadline`; running out of time is a `Fetch` error like any other
/// transport failure.
pub(crate) async fn with_deadline<T, F>(deadline: Duration, context: &str, fut: F) -> Result<T, KlineError>
where
    F: Future<Output = Result<T, KlineError>>,
{
    tokio::time::timeout(deadline, fut).await.map_err(|_| {
        KlineError::Fetch(format!(
            "{} timed out after {}ms",
            context,
            deadline.as_millis()
        ))
    })?
}

/// One klines call against the live endpoint, bounded by `config.request_deadline_ms`.
pub async fn load_klines(
    config: &BinanceApiConfig,
    symbol: &str,
    granularity: Granularity,
    limit: usize,
) -> Result<CandleSeries, KlineError> {
    let rest_client = configure_binance_client(config)?;
    let deadline = Duration::from_millis(config.request_deadline_ms);
    let context = format!("{} {}", symbol, granularity);

    let rows = with_deadline(
        deadline,
        &context,
        request_klines(&rest_client, symbol, granularity, limit),
    )
    .await?;

    if DF.log_fetch {
        log::info!(
            "GET {}?symbol={}&interval={}&limit={} -> {} rows",
            BINANCE.klines_url,
            symbol,
            granularity,
            limit,
            rows.len()
        );
    }

    parse_klines(symbol, granularity, limit, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shape of a real /api/v3/klines row
    const ROW: &str = r#"[1499040000000,"0.01634790","0.80000000","0.01575800","0.01577100","148976.11427815",1499644799999,"2434.19055334",308,"1756.87402397","28.46694368","0"]"#;

    fn rows(json: &str) -> Vec<Vec<KlinesItemInner>> {
        serde_json::from_str(json).expect("test payload must deserialize")
    }

    fn row(json: &str) -> Vec<KlinesItemInner> {
        serde_json::from_str(json).expect("test row must deserialize")
    }

    fn body(open_times: &[i64]) -> String {
        let items: Vec<String> = open_times
            .iter()
            .enumerate()
            .map(|(i, t)| {
                format!(
                    r#"[{},"1.0","{}.5","{}.0","{}.0","10.0",{},"0.0",1,"0.0","0.0","0"]"#,
                    t,
                    i + 2,
                    i,
                    i + 1,
                    t + 999
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn projects_retained_fields() {
        let candle = parse_kline_row(&row(ROW)).unwrap();
        assert_eq!(candle.open_time_ms(), 1_499_040_000_000);
        assert_eq!(candle.close, 0.015771);
        assert_eq!(candle.high, 0.8);
        assert_eq!(candle.low, 0.015758);
        assert_eq!(candle.volume, 148976.11427815);
    }

    #[test]
    fn short_row_is_parse_error() {
        let short = row(r#"[1499040000000,"1","2","0.5","1.5"]"#);
        assert!(matches!(parse_kline_row(&short), Err(KlineError::Parse(_))));
    }

    #[test]
    fn non_numeric_close_is_parse_error() {
        let bad = ROW.replace("\"0.01577100\"", "\"abc\"");
        let err = parse_kline_row(&row(&bad)).unwrap_err();
        assert!(err.to_string().contains("close"));
    }

    #[test]
    fn string_open_time_is_parse_error() {
        let bad = ROW.replacen("1499040000000", "\"1499040000000\"", 1);
        assert!(matches!(parse_kline_row(&row(&bad)), Err(KlineError::Parse(_))));
    }

    #[test]
    fn empty_body_is_empty_series() {
        let err = parse_klines("NOPEUSDT", Granularity::Day1, 365, &rows("[]")).unwrap_err();
        assert!(matches!(err, KlineError::EmptySeries { .. }));
    }

    #[test]
    fn parsed_series_is_ordered_and_bounded() {
        let times: Vec<i64> = (0..24).map(|h| 1_700_000_000_000 + h * 3_600_000).collect();
        let series = parse_klines("BTCUSDT", Granularity::Hour1, 1000, &rows(&body(&times))).unwrap();
        assert_eq!(series.len(), 24);
        assert!(series.len() <= 1000);
        assert!(
            series
                .candles()
                .windows(2)
                .all(|w| w[0].open_time < w[1].open_time)
        );
        assert!(series.candles().iter().all(|c| c.close.is_finite()));
    }

    #[test]
    fn more_rows_than_limit_is_parse_error() {
        let times = [0, 1000, 2000];
        let err = parse_klines("BTCUSDT", Granularity::Hour1, 2, &rows(&body(&times))).unwrap_err();
        assert!(matches!(err, KlineError::Parse(_)));
    }

    #[test]
    fn duplicate_rows_are_rejected() {
        let times = [5000, 5000];
        let err = parse_klines("BTCUSDT", Granularity::Day1, 10, &rows(&body(&times))).unwrap_err();
        assert!(matches!(err, KlineError::Parse(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_request_times_out_as_fetch_error() {
        let deadline = Duration::from_millis(BinanceApiConfig::default().request_deadline_ms);
        let stalled = std::future::pending::<Result<Vec<Vec<KlinesItemInner>>, KlineError>>();

        let err = with_deadline(deadline, "BTCUSDT 1h", stalled).await.unwrap_err();
        match err {
            KlineError::Fetch(msg) => {
                assert!(msg.contains("timed out"));
                assert!(msg.contains("15000ms"));
            }
            other => panic!("expected Fetch, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn result_within_deadline_passes_through() {
        let ok = with_deadline(Duration::from_secs(1), "ctx", async { Ok::<_, KlineError>(7) }).await;
        assert_eq!(ok, Ok(7));

        let inner = with_deadline(Duration::from_secs(1), "ctx", async {
            Err::<(), _>(KlineError::Parse("bad row".into()))
        })
        .await;
        assert_eq!(inner, Err(KlineError::Parse("bad row".into())));
    }

    #[test]
    fn view_granularities_map_to_sdk_intervals() {
        assert!(matches!(
            interval_enum(Granularity::Week1),
            KlinesIntervalEnum::Interval1w
        ));
        assert!(matches!(
            interval_enum(Granularity::Day1),
            KlinesIntervalEnum::Interval1d
        ));
        assert!(matches!(
            interval_enum(Granularity::Hour1),
            KlinesIntervalEnum::Interval1h
        ));
    }
}
