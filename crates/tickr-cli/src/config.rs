use crate::render::OutputFormat;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use tickr_core::Config as CoreConfig;

#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: CoreConfig,
  pub format: OutputFormat,
  /// Color table output (stdout is a terminal)
  pub color: bool,
  /// Show a spinner while waiting (table output and stderr is a terminal)
  pub progress: bool,
}

impl Config {
  pub fn from_env(format: OutputFormat) -> Result<Self> {
    let api_config = CoreConfig::from_env()
      .context("Failed to load configuration. Set ALPHA_VANTAGE_API_KEY in the environment or a .env file")?;

    let color = std::io::stdout().is_terminal();
    let progress = format == OutputFormat::Table && std::io::stderr().is_terminal();

    Ok(Self { api_config, format, color, progress })
  }
}
