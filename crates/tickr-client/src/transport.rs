//! HTTP transport layer for Alpha Vantage API requests

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tickr_core::{Config, Error, FuncType, Result};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// HTTP transport layer for making requests to the Alpha Vantage API
///
/// Each call to [`Transport::get`] issues exactly one GET request. There is
/// no retry: a failed request is reported to the caller as-is.
pub struct Transport {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tickr/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout,
        })
    }

    /// Make a GET request to the Alpha Vantage API
    ///
    /// # Arguments
    ///
    /// * `function` - The Alpha Vantage API function to call
    /// * `params` - Additional query parameters for the request
    ///
    /// # Returns
    ///
    /// The deserialized response, or an error if the request failed, the
    /// body was not JSON, or the provider reported an error in the body.
    #[instrument(skip(self, params), fields(function = %function))]
    pub async fn get<T>(&self, function: FuncType, params: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(function, params)?;
        debug!("Making request to: {}", redact_api_key(&url));

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                warn!("Request timed out after {:?}", self.timeout);
                Error::Http(format!("request timed out after {}s", self.timeout.as_secs()))
            } else {
                warn!("Request failed: {}", e);
                Error::Http(format!("request failed: {}", e.without_url()))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Request failed with status: {}", status);
            return Err(Error::Http(format!("unexpected status {}", status)));
        }
        debug!("Request successful with status: {}", status);

        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {}", e.without_url())))?;
        debug!("Response body length: {} bytes", text.len());

        let value: Value = serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse JSON response: {}", e);
            error!("Response text (first 500 chars): {}", truncate(&text, 500));
            Error::Parse(format!("response is not valid JSON: {}", e))
        })?;

        check_api_error(&value)?;

        let data = serde_json::from_value::<T>(value).map_err(|e| {
            error!("Unexpected response shape for {}: {}", function, e);
            Error::Parse(format!("unexpected response shape: {}", e))
        })?;

        info!("Successfully parsed response for function: {}", function);
        Ok(data)
    }

    /// Build the full URL for an API request
    fn build_url(&self, function: FuncType, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, tickr_core::QUERY_PATH))
            .map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

        {
            let mut query_pairs = url.query_pairs_mut();
            query_pairs.append_pair("function", &function.to_string());
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
            query_pairs.append_pair("apikey", &self.api_key);
        }

        Ok(url)
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get request timeout duration
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Check for Alpha Vantage error payloads
///
/// The API answers most failures with HTTP 200 and a single top-level
/// `Error Message`, `Note` or `Information` key instead of data.
fn check_api_error(value: &Value) -> Result<()> {
    let Some(object) = value.as_object() else {
        return Ok(());
    };

    if let Some(message) = object.get("Error Message").and_then(Value::as_str) {
        if message.contains("apikey") || message.contains("API key") {
            return Err(Error::ApiKey(message.to_string()));
        }
        return Err(Error::Api(message.to_string()));
    }

    for key in ["Note", "Information"] {
        if let Some(message) = object.get(key).and_then(Value::as_str) {
            let lowered = message.to_lowercase();
            if lowered.contains("call frequency") || lowered.contains("rate limit") {
                return Err(Error::RateLimit(message.to_string()));
            }
            if lowered.contains("api key") || lowered.contains("apikey") {
                return Err(Error::ApiKey(message.to_string()));
            }
            return Err(Error::Api(message.to_string()));
        }
    }

    Ok(())
}

fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mock_transport() -> Transport {
        let mut config = Config::default_with_key("test_key".to_string());
        config.base_url = "https://mock.alphavantage.co/".to_string();
        Transport::new(&config).unwrap()
    }

    #[test]
    fn test_build_url() {
        let transport = mock_transport();
        let url = transport.build_url(FuncType::GlobalQuote, &[("symbol", "AAPL")]).unwrap();
        let url = url.to_string();

        assert!(url.contains("function=GLOBAL_QUOTE"));
        assert!(url.contains("symbol=AAPL"));
        assert!(url.contains("apikey=test_key"));
        assert!(url.starts_with("https://mock.alphavantage.co/query?"));
    }

    #[test]
    fn test_build_url_encodes_keywords() {
        let transport = mock_transport();
        let url = transport
            .build_url(FuncType::SymbolSearch, &[("keywords", "s&p 500")])
            .unwrap();

        let keywords: Vec<String> = url
            .query_pairs()
            .filter(|(k, _)| k == "keywords")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(keywords, vec!["s&p 500".to_string()]);
        assert!(!url.as_str().contains("s&p"));
    }

    #[test]
    fn test_redacts_api_key() {
        let transport = mock_transport();
        let url = transport.build_url(FuncType::GlobalQuote, &[("symbol", "IBM")]).unwrap();
        let logged = redact_api_key(&url);

        assert!(!logged.contains("test_key"));
        assert!(logged.contains("apikey=***") || logged.contains("apikey=%2A%2A%2A"));
        assert!(logged.contains("symbol=IBM"));
    }

    #[test]
    fn test_check_api_error_rate_limit() {
        let response = json!({"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute and 500 calls per day."});
        assert!(matches!(check_api_error(&response), Err(Error::RateLimit(_))));

        let information = json!({"Information": "We have detected your API key as demo and our standard API rate limit is 25 requests per day."});
        assert!(matches!(check_api_error(&information), Err(Error::RateLimit(_))));
    }

    #[test]
    fn test_check_api_error_message() {
        let response = json!({"Error Message": "Invalid API call. Please retry or visit the documentation for GLOBAL_QUOTE."});
        assert!(matches!(check_api_error(&response), Err(Error::Api(_))));
    }

    #[test]
    fn test_check_api_error_success() {
        assert!(check_api_error(&json!({"Global Quote": {}})).is_ok());
        assert!(check_api_error(&json!({"bestMatches": []})).is_ok());
        assert!(check_api_error(&json!([])).is_ok());
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("▲▲▲", 2), "▲▲");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
