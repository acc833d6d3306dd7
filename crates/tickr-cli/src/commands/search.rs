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

use super::CommandContext;
use anyhow::Result;
use clap::Args;
use std::io::Write;
use tracing::warn;

/// Market indices people search for by name, with ETFs that track them
const COMMON_INDICES: &[(&str, &[&str])] = &[
  ("s&p 500", &["SPY", "VOO", "IVV"]),
  ("dow jones", &["DIA"]),
  ("nasdaq", &["QQQ"]),
  ("russell 2000", &["IWM"]),
];

#[derive(Args, Debug)]
pub struct SearchCommand {
  /// Enter the company name.
  pub name: String,
}

/// ETF suggestions for every index named anywhere in `query`
pub fn index_suggestions(query: &str) -> Vec<&'static [&'static str]> {
  let lowered = query.to_lowercase();
  COMMON_INDICES
    .iter()
    .filter(|(index, _)| lowered.contains(*index))
    .map(|(_, tickers)| *tickers)
    .collect()
}

/// Search ticker symbols by company name and render the best three
///
/// Index suggestions go to `notices`, written before the request is made.
/// The caller points it at stdout for tables and at stderr for JSON, so the
/// results on `out` stay parseable.
pub async fn execute(
  cmd: &SearchCommand,
  ctx: &CommandContext,
  notices: &mut dyn Write,
  out: &mut dyn Write,
) -> Result<()> {
  for tickers in index_suggestions(&cmd.name) {
    ctx.renderer.index_suggestions(notices, &cmd.name, tickers)?;
  }

  let spinner = ctx.spinner(format!("Searching for '{}'...", cmd.name));
  let result = ctx.client.stocks().symbol_search(&cmd.name).await;
  spinner.finish_and_clear();

  match result {
    Ok(matches) => ctx.renderer.matches(out, &cmd.name, &matches)?,
    Err(e) if e.is_not_found() => {
      ctx.renderer.not_found(out, &format!("No results found for '{}'", cmd.name))?;
    }
    Err(e) => {
      warn!("Symbol search for '{}' failed: {}", cmd.name, e);
      ctx.renderer.error(out, &e)?;
    }
  }

  Ok(())
}
