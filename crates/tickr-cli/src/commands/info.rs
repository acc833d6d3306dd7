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
use crate::prompt::confirm;
use anyhow::Result;
use clap::Args;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

#[derive(Args, Debug)]
pub struct InfoCommand {
  /// Enter the ticker symbol.
  pub symbol: String,

  /// Skip confirmation.
  #[arg(long)]
  pub force: bool,
}

/// Retrieve a quote for `cmd.symbol` and render it
///
/// Without `--force` the user is asked first; declining ends the command
/// before any request is made. Every API failure is rendered and the command
/// still returns `Ok`.
pub async fn execute(
  cmd: &InfoCommand,
  ctx: &CommandContext,
  input: &mut dyn BufRead,
  prompt: &mut dyn Write,
  out: &mut dyn Write,
) -> Result<()> {
  if !cmd.force {
    let question = format!("Retrieve data for '{}'?", cmd.symbol);
    if !confirm(&question, true, input, prompt)? {
      debug!("Quote request for {} declined", cmd.symbol);
      ctx.renderer.cancelled(out)?;
      return Ok(());
    }
  }

  let spinner = ctx.spinner(format!("Fetching data for {}...", cmd.symbol));
  let result = ctx.client.stocks().global_quote(&cmd.symbol).await;
  spinner.finish_and_clear();

  match result {
    Ok(quote) => ctx.renderer.quote(out, &quote)?,
    Err(e) if e.is_not_found() => {
      let message = format!("No data found for '{}'. Check the ticker symbol.", cmd.symbol);
      ctx.renderer.not_found(out, &message)?;
    }
    Err(e) => {
      warn!("Quote request for {} failed: {}", cmd.symbol, e);
      ctx.renderer.error(out, &e)?;
    }
  }

  Ok(())
}
