//! Binance futures REST API client.

use crate::config::Config;
use crate::exchange::error::ExchangeError;
use crate::exchange::types::*;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Client for the public futures market data endpoints.
pub struct FapiClient {
    http: Client,
    base_url: String,
}

impl FapiClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get 24-hour ticker statistics for one symbol.
    #[instrument(skip(self))]
    pub async fn ticker_24h(&self, symbol: &str) -> Result<Ticker24h, ExchangeError> {
        self.get_json("/fapi/v1/ticker/24hr", &[("symbol", symbol)])
            .await
    }

    /// Get the most recent funding rate record for one symbol.
    #[instrument(skip(self))]
    pub async fn latest_funding_rate(&self, symbol: &str) -> Result<FundingRate, ExchangeError> {
        let records: Vec<FundingRate> = self
            .get_json("/fapi/v1/fundingRate", &[("symbol", symbol), ("limit", "1")])
            .await?;
        records.into_iter().next().ok_or(ExchangeError::NoData)
    }

    /// Get the most recent top trader long/short position ratio for one
    /// symbol and aggregation period.
    #[instrument(skip(self))]
    pub async fn latest_position_ratio(
        &self,
        symbol: &str,
        period: Period,
    ) -> Result<PositionRatio, ExchangeError> {
        let records: Vec<PositionRatio> = self
            .get_json(
                "/futures/data/topLongShortPositionRatio",
                &[("symbol", symbol), ("period", period.as_str()), ("limit", "1")],
            )
            .await?;
        records.into_iter().next().ok_or(ExchangeError::NoData)
    }

    /// Hit the connectivity-check endpoint and measure the round trip
    /// client-side, dispatch to receipt.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<PingSample, ExchangeError> {
        let url = format!("{}/fapi/v1/ping", self.base_url);
        debug!(%url, "GET");

        let started = Instant::now();
        let response = self.http.get(&url).send().await?;
        let latency = started.elapsed();

        Ok(PingSample {
            latency,
            status: response.status(),
        })
    }

    /// Issue one GET and decode either the payload or the vendor error
    /// envelope. The envelope is checked regardless of HTTP status.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ExchangeError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let response = self.http.get(&url).query(query).send().await?;

        let body: ApiResponse<T> = response.json().await?;
        match body {
            ApiResponse::Error(body) => Err(ExchangeError::Api {
                code: body.code,
                msg: body.msg,
            }),
            ApiResponse::Data(data) => Ok(data),
        }
    }
}
