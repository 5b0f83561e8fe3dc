//! Binance USDⓈ-M Futures REST access.
//!
//! All endpoints used here are public market data:
//! - 24h ticker statistics
//! - Funding rate history (most recent record)
//! - Top trader long/short position ratio
//! - Connectivity ping
//!
//! No authentication headers are sent and no credentials are stored.

mod client;
mod error;
mod types;

pub use client::FapiClient;
pub use error::ExchangeError;
pub use types::*;
