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

//! `SYMBOL_SEARCH` response models

use serde::{Deserialize, Serialize};
use tickr_core::{Error, Result};

/// Symbol search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolSearch {
  /// List of matching symbols, in the provider's ranking order
  #[serde(rename = "bestMatches", default)]
  pub best_matches: Vec<SymbolMatch>,
}

impl SymbolSearch {
  /// Map at most `limit` leading matches into [`SearchMatch`] records.
  ///
  /// Returns [`Error::NotFound`] when the provider sent no matches for `keywords`.
  pub fn into_matches(self, keywords: &str, limit: usize) -> Result<Vec<SearchMatch>> {
    if self.best_matches.is_empty() {
      return Err(Error::NotFound(keywords.to_string()));
    }

    Ok(self.best_matches.into_iter().take(limit).map(SearchMatch::from).collect())
  }
}

/// Symbol search result, as sent on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatch {
  /// Stock symbol
  #[serde(rename = "1. symbol")]
  pub symbol: String,

  /// Company name
  #[serde(rename = "2. name")]
  pub name: String,

  /// Security type (e.g., "Equity", "ETF")
  #[serde(rename = "3. type")]
  pub stock_type: String,

  /// Region
  #[serde(rename = "4. region")]
  pub region: String,

  #[serde(rename = "5. marketOpen", default, skip_serializing_if = "Option::is_none")]
  pub market_open: Option<String>,

  #[serde(rename = "6. marketClose", default, skip_serializing_if = "Option::is_none")]
  pub market_close: Option<String>,

  #[serde(rename = "7. timezone", default, skip_serializing_if = "Option::is_none")]
  pub timezone: Option<String>,

  #[serde(rename = "8. currency", default, skip_serializing_if = "Option::is_none")]
  pub currency: Option<String>,

  #[serde(rename = "9. matchScore", default, skip_serializing_if = "Option::is_none")]
  pub match_score: Option<String>,
}

/// A candidate ticker for a company-name lookup
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
  pub symbol: String,
  pub name: String,
  pub security_type: String,
  pub region: String,

  /// The wire record this match was mapped from
  pub raw: SymbolMatch,
}

impl From<SymbolMatch> for SearchMatch {
  fn from(raw: SymbolMatch) -> Self {
    SearchMatch {
      symbol: raw.symbol.clone(),
      name: raw.name.clone(),
      security_type: raw.stock_type.clone(),
      region: raw.region.clone(),
      raw,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn entry(symbol: &str, name: &str) -> serde_json::Value {
    json!({
      "1. symbol": symbol,
      "2. name": name,
      "3. type": "Equity",
      "4. region": "United States",
      "5. marketOpen": "09:30",
      "6. marketClose": "16:00",
      "7. timezone": "UTC-04",
      "8. currency": "USD",
      "9. matchScore": "0.8000"
    })
  }

  #[test]
  fn test_keeps_first_three_in_order() {
    let body = json!({
      "bestMatches": [
        entry("TSCO", "Tesco PLC"),
        entry("TSCDF", "Tesco plc"),
        entry("TSCDY", "Tesco plc ADR"),
        entry("TCO2.FRK", "TESCO PLC ADR"),
        entry("TCO0.FRK", "TESCO PLC")
      ]
    });
    let search: SymbolSearch = serde_json::from_value(body).unwrap();
    let matches = search.into_matches("tesco", 3).unwrap();

    let symbols: Vec<&str> = matches.iter().map(|m| m.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["TSCO", "TSCDF", "TSCDY"]);
    assert_eq!(matches[0].security_type, "Equity");
    assert_eq!(matches[2].name, "Tesco plc ADR");
  }

  #[test]
  fn test_fewer_than_limit() {
    let search: SymbolSearch =
      serde_json::from_value(json!({ "bestMatches": [entry("IBM", "International Business Machines")] }))
        .unwrap();
    assert_eq!(search.into_matches("ibm", 3).unwrap().len(), 1);
  }

  #[test]
  fn test_empty_or_missing_matches_is_not_found() {
    let empty: SymbolSearch = serde_json::from_str(r#"{"bestMatches": []}"#).unwrap();
    assert!(empty.into_matches("zzzz", 3).unwrap_err().is_not_found());

    let missing: SymbolSearch = serde_json::from_str("{}").unwrap();
    assert!(missing.into_matches("zzzz", 3).unwrap_err().is_not_found());
  }

  #[test]
  fn test_optional_fields_round_trip_through_raw() {
    let minimal = json!({
      "1. symbol": "SPY",
      "2. name": "SPDR S&P 500 ETF Trust",
      "3. type": "ETF",
      "4. region": "United States"
    });
    let raw: SymbolMatch = serde_json::from_value(minimal.clone()).unwrap();
    assert_eq!(serde_json::to_value(&raw).unwrap(), minimal);

    let full: SymbolMatch = serde_json::from_value(entry("IBM", "IBM")).unwrap();
    assert_eq!(full.match_score.as_deref(), Some("0.8000"));
  }
}
