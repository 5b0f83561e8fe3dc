//! # Futures Pulse
//!
//! An interactive terminal menu for quick pulse checks on Binance
//! USDⓈ-M Futures public market data: 24h price statistics, the latest
//! funding rate, top trader long/short position ratios, and API
//! round-trip latency.
//!
//! ## Architecture
//!
//! - `config`: environment-driven settings (base URL, timeout)
//! - `exchange`: Binance futures REST client and response types
//! - `menu`: interactive loop, prompts, and table assembly
//! - `render`: two-column table and timestamp formatting

pub mod config;
pub mod exchange;
pub mod menu;
pub mod render;

pub use config::Config;
