//! Stock quote and symbol search endpoints
//!
//! - `GLOBAL_QUOTE`: latest price, change and volume for one symbol
//! - `SYMBOL_SEARCH`: best-matching ticker symbols for a keyword

use crate::transport::Transport;
use std::sync::Arc;
use tickr_core::{FuncType, Result, MAX_SEARCH_MATCHES};
use tickr_models::{GlobalQuote, Quote, SearchMatch, SymbolSearch};
use tracing::instrument;

/// Stock endpoints for quotes and symbol lookup
pub struct StockEndpoints {
    transport: Arc<Transport>,
}

impl StockEndpoints {
    /// Create a new stock endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get the latest quote for a symbol
    ///
    /// # Arguments
    ///
    /// * `symbol` - The stock symbol (e.g., "AAPL", "MSFT")
    ///
    /// # Errors
    ///
    /// [`tickr_core::Error::NotFound`] when the provider has no quote for
    /// `symbol`, [`tickr_core::Error::Http`] on transport failures and
    /// [`tickr_core::Error::Parse`] on malformed payloads.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use tickr_client::AlphaVantageClient;
    /// # use tickr_core::Config;
    /// # async fn run() -> tickr_core::Result<()> {
    /// let client = AlphaVantageClient::new(Config::from_env()?)?;
    /// let quote = client.stocks().global_quote("IBM").await?;
    /// println!("{} {:.2}", quote.symbol, quote.price);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn global_quote(&self, symbol: &str) -> Result<Quote> {
        let response: GlobalQuote =
            self.transport.get(FuncType::GlobalQuote, &[("symbol", symbol)]).await?;

        response.into_quote(symbol)
    }

    /// Search for symbols matching a company name or keyword
    ///
    /// Only the first three matches, in the provider's order, are returned.
    #[instrument(skip(self))]
    pub async fn symbol_search(&self, keywords: &str) -> Result<Vec<SearchMatch>> {
        let response: SymbolSearch =
            self.transport.get(FuncType::SymbolSearch, &[("keywords", keywords)]).await?;

        response.into_matches(keywords, MAX_SEARCH_MATCHES)
    }
}
