//! # tickr-client
//!
//! A small Alpha Vantage API client covering the two calls tickr makes:
//! `GLOBAL_QUOTE` and `SYMBOL_SEARCH`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tickr_client::AlphaVantageClient;
//! use tickr_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = AlphaVantageClient::new(config)?;
//!
//!     let quote = client.stocks().global_quote("AAPL").await?;
//!     println!("{} closed the day {}", quote.symbol, quote.change_percent);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, tickr_core::Error>`. One request is made per
//! call, bounded by the configured timeout, and never retried.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

pub use client::AlphaVantageClient;
pub use endpoints::StockEndpoints;
pub use tickr_core::{Config, Error, Result};
pub use tickr_models::*;
