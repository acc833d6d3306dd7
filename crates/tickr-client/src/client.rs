/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The top-level client handle

use crate::endpoints::StockEndpoints;
use crate::transport::Transport;
use std::sync::Arc;
use tickr_core::{Config, Result};

/// Main Alpha Vantage API client
///
/// Owns the HTTP transport built from [`Config`] and hands out endpoint
/// groups that share it.
///
/// # Examples
///
/// ```ignore
/// use tickr_client::AlphaVantageClient;
/// use tickr_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = AlphaVantageClient::new(config)?;
///
///     let quote = client.stocks().global_quote("AAPL").await?;
///     println!("Apple last traded at {:.2}", quote.price);
///
///     let matches = client.stocks().symbol_search("tesco").await?;
///     println!("Best match: {}", matches[0].symbol);
///
///     Ok(())
/// }
/// ```
pub struct AlphaVantageClient {
  transport: Arc<Transport>,
}

impl AlphaVantageClient {
  /// Create a new Alpha Vantage API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport })
  }

  /// Get access to the quote and symbol search endpoints
  pub fn stocks(&self) -> StockEndpoints {
    StockEndpoints::new(self.transport.clone())
  }

  /// Get the base URL requests are sent to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

impl std::fmt::Debug for AlphaVantageClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AlphaVantageClient").field("transport", &self.transport).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[test]
  fn test_client_creation() {
    let config = Config {
      api_key: "test_key".to_string(),
      timeout_secs: 7,
      base_url: tickr_core::ALPHA_VANTAGE_BASE_URL.to_string(),
    };

    let client = AlphaVantageClient::new(config).expect("Failed to create client");
    assert_eq!(client.base_url(), "https://www.alphavantage.co");
    assert_eq!(client.transport.timeout(), Duration::from_secs(7));
  }

  #[test]
  fn test_debug_hides_api_key() {
    let client = AlphaVantageClient::new(Config::default_with_key("secret".to_string())).unwrap();
    let debug = format!("{:?}", client);
    assert!(!debug.contains("secret"));
  }
}
