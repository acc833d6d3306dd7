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

//! # tickr-core
//!
//! Configuration and error types shared by the tickr crates.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// The Alpha Vantage functions tickr calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncType {
  /// Latest price and volume for one symbol
  GlobalQuote,
  /// Best-matching symbols for a keyword
  SymbolSearch,
}

impl std::fmt::Display for FuncType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FuncType::GlobalQuote => write!(f, "GLOBAL_QUOTE"),
      FuncType::SymbolSearch => write!(f, "SYMBOL_SEARCH"),
    }
  }
}

pub const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co";
pub const QUERY_PATH: &str = "query";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Number of search matches ever shown or serialized.
pub const MAX_SEARCH_MATCHES: usize = 3;
