//! Type definitions for Binance futures API responses.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// 24-hour ticker statistics for a single symbol.
///
/// The API transmits every numeric field as a string; deserializing
/// through `Decimal` keeps scale intact, so values display exactly as
/// the exchange sent them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24h {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_change: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_change_percent: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub last_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub open_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
}

/// One funding rate settlement record for a perpetual contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRate {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub funding_rate: Decimal,
    /// Settlement time in milliseconds since the Unix epoch.
    pub funding_time: i64,
}

/// Top trader long/short position ratio for one time bucket.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRatio {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub long_short_ratio: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub long_account: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub short_account: Decimal,
    /// Bucket close time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// One round trip to the connectivity-check endpoint.
#[derive(Debug, Clone)]
pub struct PingSample {
    pub latency: Duration,
    pub status: reqwest::StatusCode,
}

impl PingSample {
    /// Client-side round-trip latency in milliseconds.
    pub fn latency_ms(&self) -> f64 {
        self.latency.as_secs_f64() * 1000.0
    }
}

/// Aggregation window accepted by the position ratio endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Min5,
    Min15,
    Min30,
    Hour1,
    Hour2,
    Hour4,
    Hour6,
    Hour12,
    Day1,
}

impl Period {
    /// All accepted periods, shortest first.
    pub const ALL: [Period; 9] = [
        Period::Min5,
        Period::Min15,
        Period::Min30,
        Period::Hour1,
        Period::Hour2,
        Period::Hour4,
        Period::Hour6,
        Period::Hour12,
        Period::Day1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Min5 => "5m",
            Period::Min15 => "15m",
            Period::Min30 => "30m",
            Period::Hour1 => "1h",
            Period::Hour2 => "2h",
            Period::Hour4 => "4h",
            Period::Hour6 => "6h",
            Period::Hour12 => "12h",
            Period::Day1 => "1d",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection of a period string not on the allow-list.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid period {0:?}")]
pub struct InvalidPeriod(pub String);

impl FromStr for Period {
    type Err = InvalidPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| InvalidPeriod(s.to_string()))
    }
}

/// Vendor error envelope, e.g. `{"code": -1121, "msg": "Invalid symbol."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}

/// Every endpoint answers with either its documented payload or the
/// error envelope; the envelope can arrive under HTTP 200 as well as
/// 4xx, so detection is body-shape based rather than status based.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiResponse<T> {
    Error(ApiErrorBody),
    Data(T),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_every_listed_period_parses() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>(), Ok(period));
        }
    }

    #[test]
    fn test_unknown_period_rejected() {
        for input in ["3m", "1w", "1H", "", "5 m"] {
            assert!(input.parse::<Period>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_error_envelope_wins_over_payload() {
        let body = r#"{"code": -1121, "msg": "Invalid symbol."}"#;
        let parsed: ApiResponse<Ticker24h> = serde_json::from_str(body).unwrap();
        match parsed {
            ApiResponse::Error(e) => {
                assert_eq!(e.code, -1121);
                assert_eq!(e.msg, "Invalid symbol.");
            }
            ApiResponse::Data(_) => panic!("error envelope parsed as ticker"),
        }
    }

    #[test]
    fn test_ticker_preserves_scale() {
        let body = r#"{
            "symbol": "BTCUSDT",
            "priceChange": "-94.99999800",
            "priceChangePercent": "-95.960",
            "lastPrice": "4.00000200",
            "openPrice": "99.00000000",
            "highPrice": "100.00000000",
            "lowPrice": "0.10000000",
            "volume": "8913.30000000"
        }"#;
        let parsed: ApiResponse<Ticker24h> = serde_json::from_str(body).unwrap();
        let ticker = match parsed {
            ApiResponse::Data(t) => t,
            ApiResponse::Error(e) => panic!("unexpected error envelope: {e:?}"),
        };
        assert_eq!(ticker.price_change.to_string(), "-94.99999800");
        assert_eq!(ticker.price_change_percent.to_string(), "-95.960");
        assert_eq!(ticker.volume.to_string(), "8913.30000000");
    }

    #[test]
    fn test_funding_record_parses() {
        let body = r#"[{"symbol": "BTCUSDT", "fundingRate": "0.00010000", "fundingTime": 1700000000000}]"#;
        let parsed: ApiResponse<Vec<FundingRate>> = serde_json::from_str(body).unwrap();
        let records = match parsed {
            ApiResponse::Data(r) => r,
            ApiResponse::Error(e) => panic!("unexpected error envelope: {e:?}"),
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].funding_rate, dec!(0.0001));
        assert_eq!(records[0].funding_time, 1_700_000_000_000);
    }
}
