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

//! # tickr-models
//!
//! Data models for the two Alpha Vantage responses tickr consumes.
//!
//! Each response is deserialized into a wire struct that keeps the API's
//! numbered key names (`"05. price"`, `"1. symbol"`, ...). The wire struct is
//! then mapped once into a typed record ([`Quote`], [`SearchMatch`]) that the
//! rest of the workspace works with.
//!
//! ## Usage
//!
//! ```ignore
//! use tickr_models::quote::GlobalQuote;
//!
//! let response: GlobalQuote = serde_json::from_str(&response_json)?;
//! let quote = response.into_quote("AAPL")?;
//! println!("{} last traded at {:.2}", quote.symbol, quote.price);
//! ```

#![warn(clippy::all)]

pub mod quote;
pub mod search;

mod serde_helpers;

pub use quote::{GlobalQuote, Quote, QuoteData};
pub use search::{SearchMatch, SymbolMatch, SymbolSearch};
