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

use super::{error_message, Renderer};
use std::io::{self, Write};
use tickr_core::Error;
use tickr_models::{Quote, SearchMatch, SymbolMatch};

/// Renders the provider's payload as pretty-printed JSON
///
/// Key names are the API's own (`"05. price"`, `"1. symbol"`); values are
/// the provider's strings, untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRenderer;

impl Renderer for RawRenderer {
  fn quote(&self, out: &mut dyn Write, quote: &Quote) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &quote.raw)?;
    writeln!(out)
  }

  fn matches(&self, out: &mut dyn Write, _query: &str, matches: &[SearchMatch]) -> io::Result<()> {
    let raw: Vec<&SymbolMatch> = matches.iter().map(|m| &m.raw).collect();
    serde_json::to_writer_pretty(&mut *out, &raw)?;
    writeln!(out)
  }

  fn index_suggestions(&self, out: &mut dyn Write, query: &str, tickers: &[&str]) -> io::Result<()> {
    writeln!(out, "'{}' is an index. Try these ETFs instead: {}", query.to_uppercase(), tickers.join(", "))
  }

  fn cancelled(&self, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Operation cancelled.")
  }

  fn not_found(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message)
  }

  fn error(&self, out: &mut dyn Write, error: &Error) -> io::Result<()> {
    writeln!(out, "API Error: {}", error_message(error))
  }
}
