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

pub mod info;
pub mod search;

use crate::config::Config;
use crate::render::{renderer_for, Renderer};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tickr_client::AlphaVantageClient;

/// Everything a command needs, built once from [`Config`]
pub struct CommandContext {
  pub client: AlphaVantageClient,
  pub renderer: Box<dyn Renderer>,
  pub show_progress: bool,
}

impl CommandContext {
  pub fn new(config: &Config) -> Result<Self> {
    let client = AlphaVantageClient::new(config.api_config.clone())
      .context("Failed to create Alpha Vantage client")?;

    Ok(Self {
      client,
      renderer: renderer_for(config.format, config.color),
      show_progress: config.progress,
    })
  }

  /// Spinner shown on stderr while the request is in flight
  pub fn spinner(&self, message: String) -> ProgressBar {
    if !self.show_progress {
      return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
      ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg:.bold.green}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
  }
}
