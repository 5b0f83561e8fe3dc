//! Error taxonomy for exchange requests.

use thiserror::Error;

/// Failure modes of a single market data request.
///
/// Every variant is terminal for one menu action only; nothing here is
/// retried or escalated.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Network, timeout, or body decode failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with its error envelope instead of data.
    /// Display is the vendor's message text.
    #[error("{msg}")]
    Api { code: i64, msg: String },

    /// A well-formed response carrying an empty result list.
    #[error("no data available")]
    NoData,
}
