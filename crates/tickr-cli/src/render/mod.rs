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

//! Output strategies for command results
//!
//! Commands never format output themselves. They hand typed records and
//! outcomes to a [`Renderer`], picked once at startup from `--format`.

pub mod raw;
pub mod table;

use clap::ValueEnum;
use std::io::{self, Write};
use tickr_core::Error;
use tickr_models::{Quote, SearchMatch};

pub use raw::RawRenderer;
pub use table::TableRenderer;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  /// Styled tables
  Table,
  /// Pretty-printed JSON with the API's own key names
  Json,
}

/// Presentation of command results and outcomes
pub trait Renderer {
  /// Print a single quote
  fn quote(&self, out: &mut dyn Write, quote: &Quote) -> io::Result<()>;

  /// Print search matches for `query`
  fn matches(&self, out: &mut dyn Write, query: &str, matches: &[SearchMatch]) -> io::Result<()>;

  /// Suggest ETFs tracking an index the user searched for by name
  fn index_suggestions(&self, out: &mut dyn Write, query: &str, tickers: &[&str]) -> io::Result<()>;

  /// The user declined the confirmation prompt
  fn cancelled(&self, out: &mut dyn Write) -> io::Result<()>;

  /// The provider had nothing for the query
  fn not_found(&self, out: &mut dyn Write, message: &str) -> io::Result<()>;

  /// A network, provider or malformed-response failure
  fn error(&self, out: &mut dyn Write, error: &Error) -> io::Result<()>;
}

/// Build the renderer for `format`
///
/// `colorize` only affects table output; JSON is always plain.
pub fn renderer_for(format: OutputFormat, colorize: bool) -> Box<dyn Renderer> {
  match format {
    OutputFormat::Table => Box::new(TableRenderer::new(colorize)),
    OutputFormat::Json => Box::new(RawRenderer),
  }
}

/// User-facing text for a failed request
pub(crate) fn error_message(error: &Error) -> String {
  match error {
    Error::Http(message) => message.clone(),
    Error::Parse(message) => format!("malformed response: {message}"),
    Error::ParseDate(e) => format!("malformed response: {e}"),
    other => other.to_string(),
  }
}
