//! Endpoint groups exposed by [`crate::AlphaVantageClient`]

pub mod stocks;

pub use stocks::StockEndpoints;
