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

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod prompt;
mod render;

use commands::{info::InfoCommand, search::SearchCommand, CommandContext};
use render::OutputFormat;

/// CLI to pull daily updates on any stock.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "tickr")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Output format
  #[arg(long, global = true, value_enum, env = "TICKR_FORMAT", default_value_t = OutputFormat::Table)]
  format: OutputFormat,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Retrieve INFO about any stock using corresponding ticker symbol.
  Info(InfoCommand),
  /// SEARCH for ticker symbols by company name.
  Search(SearchCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // The only place .env is read; clap needs it for TICKR_FORMAT
  dotenv().ok();

  let cli = Cli::parse();

  // Logs go to stderr so JSON output on stdout stays clean
  let log_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

  let config = config::Config::from_env(cli.format)?;
  let context = CommandContext::new(&config)?;

  let mut out = io::stdout().lock();
  match cli.command {
    Commands::Info(cmd) => {
      let mut input = io::stdin().lock();
      let mut prompt = io::stderr();
      commands::info::execute(&cmd, &context, &mut input, &mut prompt, &mut out).await?
    }
    Commands::Search(cmd) => {
      // JSON keeps stdout for the payload alone
      let mut notices: Box<dyn Write> = match config.format {
        OutputFormat::Table => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
      };
      commands::search::execute(&cmd, &context, &mut *notices, &mut out).await?
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parses_info_with_force() {
    let cli = Cli::try_parse_from(["tickr", "info", "AAPL", "--force"]).unwrap();
    match cli.command {
      Commands::Info(cmd) => {
        assert_eq!(cmd.symbol, "AAPL");
        assert!(cmd.force);
      }
      other => panic!("expected info, got {other:?}"),
    }
  }

  #[test]
  fn test_info_prompts_by_default() {
    let cli = Cli::try_parse_from(["tickr", "info", "AAPL"]).unwrap();
    assert!(matches!(cli.command, Commands::Info(InfoCommand { force: false, .. })));
  }

  #[test]
  fn test_parses_search_with_json_format() {
    let cli = Cli::try_parse_from(["tickr", "search", "s&p 500", "--format", "json"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(matches!(cli.command, Commands::Search(SearchCommand { ref name }) if name == "s&p 500"));
  }

  #[test]
  fn test_missing_argument_is_rejected() {
    assert!(Cli::try_parse_from(["tickr", "info"]).is_err());
    assert!(Cli::try_parse_from(["tickr", "search"]).is_err());
  }
}
