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

//! `GLOBAL_QUOTE` response models

use crate::serde_helpers::empty_object_as_none;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tickr_core::{Error, Result};

/// Quote endpoint response (real-time price)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalQuote {
  /// Global quote data, `None` when the key is missing or empty
  #[serde(
    rename = "Global Quote",
    default,
    deserialize_with = "empty_object_as_none",
    skip_serializing_if = "Option::is_none"
  )]
  pub global_quote: Option<QuoteData>,
}

impl GlobalQuote {
  /// Map the response into a typed [`Quote`].
  ///
  /// Returns [`Error::NotFound`] when the provider sent no quote for `symbol`.
  pub fn into_quote(self, symbol: &str) -> Result<Quote> {
    let data = self.global_quote.ok_or_else(|| Error::NotFound(symbol.to_string()))?;
    Quote::try_from(data)
  }
}

/// Quote data structure, as sent on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
  /// Symbol
  #[serde(rename = "01. symbol")]
  pub symbol: String,

  /// Opening price
  #[serde(rename = "02. open")]
  pub open: String,

  /// Highest price
  #[serde(rename = "03. high")]
  pub high: String,

  /// Lowest price
  #[serde(rename = "04. low")]
  pub low: String,

  /// Current price
  #[serde(rename = "05. price")]
  pub price: String,

  /// Trading volume
  #[serde(rename = "06. volume")]
  pub volume: String,

  /// Latest trading day
  #[serde(rename = "07. latest trading day")]
  pub latest_trading_day: String,

  /// Previous close
  #[serde(rename = "08. previous close")]
  pub previous_close: String,

  /// Price change
  #[serde(rename = "09. change")]
  pub change: String,

  /// Change percentage, including the trailing `%`
  #[serde(rename = "10. change percent")]
  pub change_percent: String,
}

/// A snapshot of one security's trading metrics
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
  pub symbol: String,
  pub price: f64,
  pub change: f64,
  pub change_percent: String,
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub volume: u64,
  pub previous_close: f64,
  pub latest_trading_day: NaiveDate,

  /// The wire record this quote was mapped from
  pub raw: QuoteData,
}

impl Quote {
  /// Whether the price moved up (or stayed flat) since the previous close
  pub fn is_up(&self) -> bool {
    self.change >= 0.0
  }
}

impl TryFrom<QuoteData> for Quote {
  type Error = Error;

  fn try_from(raw: QuoteData) -> Result<Self> {
    Ok(Quote {
      symbol: raw.symbol.clone(),
      price: parse_price("05. price", &raw.price)?,
      change: parse_price("09. change", &raw.change)?,
      change_percent: raw.change_percent.trim().to_string(),
      open: parse_price("02. open", &raw.open)?,
      high: parse_price("03. high", &raw.high)?,
      low: parse_price("04. low", &raw.low)?,
      volume: raw
        .volume
        .trim()
        .parse()
        .map_err(|_| Error::Parse(format!("06. volume: invalid integer '{}'", raw.volume)))?,
      previous_close: parse_price("08. previous close", &raw.previous_close)?,
      latest_trading_day: NaiveDate::parse_from_str(raw.latest_trading_day.trim(), "%Y-%m-%d")?,
      raw,
    })
  }
}

fn parse_price(field: &str, value: &str) -> Result<f64> {
  value
    .trim()
    .parse::<f64>()
    .ok()
    .filter(|v| v.is_finite())
    .ok_or_else(|| Error::Parse(format!("{field}: invalid number '{value}'")))
}
