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

//! Configuration management for the Alpha Vantage client

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Alpha Vantage client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Alpha Vantage API key
  pub api_key: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the Alpha Vantage API, without the `/query` path
  pub base_url: String,
}

impl Config {
  /// Load configuration from the process environment
  ///
  /// The binary loads `.env` into the environment before calling this.
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build a configuration from an arbitrary variable source
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let api_key = lookup("ALPHA_VANTAGE_API_KEY")
      .filter(|key| !key.trim().is_empty())
      .ok_or_else(|| Error::ApiKey("ALPHA_VANTAGE_API_KEY not set".to_string()))?;

    let timeout_secs = match lookup("AV_TIMEOUT_SECS") {
      Some(raw) => raw
        .trim()
        .parse()
        .ok()
        .filter(|secs: &u64| *secs > 0)
        .ok_or_else(|| Error::Config(format!("Invalid AV_TIMEOUT_SECS: {raw}")))?,
      None => crate::DEFAULT_TIMEOUT_SECS,
    };

    let base_url = lookup("AV_BASE_URL")
      .map(|url| url.trim_end_matches('/').to_string())
      .unwrap_or_else(|| crate::ALPHA_VANTAGE_BASE_URL.to_string());

    Ok(Config { api_key, timeout_secs, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      base_url: crate::ALPHA_VANTAGE_BASE_URL.to_string(),
    }
  }
}
