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
use colored::{ColoredString, Colorize};
use prettytable::{format, Cell, Row, Table};
use std::io::{self, Write};
use tickr_core::Error;
use tickr_models::{Quote, SearchMatch};

const UP: &str = "▲";
const DOWN: &str = "▼";

/// Renders results as boxed tables
///
/// Colors go through the terminal directly, so `colorize` should only be
/// set when `out` is the process's stdout attached to a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
  colorize: bool,
}

impl TableRenderer {
  pub fn new(colorize: bool) -> Self {
    Self { colorize }
  }

  fn paint(&self, text: &str, style: impl FnOnce(ColoredString) -> ColoredString) -> String {
    if self.colorize {
      style(text.normal()).to_string()
    } else {
      text.to_string()
    }
  }

  fn emit(&self, out: &mut dyn Write, table: &Table) -> io::Result<()> {
    if self.colorize {
      out.flush()?;
      table.print_tty(false)?;
    } else {
      table.print(out)?;
    }
    Ok(())
  }

  fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
  }
}

impl Renderer for TableRenderer {
  fn quote(&self, out: &mut dyn Write, quote: &Quote) -> io::Result<()> {
    let (glyph, change_style) = if quote.is_up() { (UP, "Fg") } else { (DOWN, "Fr") };

    let mut table = Self::new_table();
    table.set_titles(Row::new(vec![
      Cell::new("Metric").style_spec("bFc"),
      Cell::new("Value").style_spec("bFm"),
    ]));

    let rows = [
      ("Price", money(quote.price), "bFm"),
      (
        "Change",
        format!("{} {:.2} ({})", glyph, quote.change, quote.change_percent),
        change_style,
      ),
      ("Open", money(quote.open), "Fm"),
      ("High", money(quote.high), "Fm"),
      ("Low", money(quote.low), "Fm"),
      ("Volume", thousands(quote.volume), "Fm"),
      ("Previous Close", money(quote.previous_close), "Fm"),
      ("Latest Trading Day", quote.latest_trading_day.format("%Y-%m-%d").to_string(), "Fm"),
    ];
    for (metric, value, style) in rows {
      table.add_row(Row::new(vec![
        Cell::new(metric).style_spec("Fc"),
        Cell::new(&value).style_spec(style),
      ]));
    }

    let title = format!("{} Stock Quote", quote.symbol);
    writeln!(out, "{}", self.paint(&title, |s| s.bold()))?;
    self.emit(out, &table)
  }

  fn matches(&self, out: &mut dyn Write, query: &str, matches: &[SearchMatch]) -> io::Result<()> {
    let mut table = Self::new_table();
    table.set_titles(Row::new(vec![
      Cell::new("#").style_spec("bFc"),
      Cell::new("Symbol").style_spec("bFg"),
      Cell::new("Name").style_spec("bFm"),
      Cell::new("Type").style_spec("bFy"),
      Cell::new("Region").style_spec("bFb"),
    ]));

    for (i, m) in matches.iter().enumerate() {
      table.add_row(Row::new(vec![
        Cell::new(&(i + 1).to_string()).style_spec("Fc"),
        Cell::new(&m.symbol).style_spec("bFg"),
        Cell::new(&m.name).style_spec("Fm"),
        Cell::new(&m.security_type).style_spec("Fy"),
        Cell::new(&m.region).style_spec("Fb"),
      ]));
    }

    let title = format!("Search Results for '{}'", query);
    writeln!(out, "{}", self.paint(&title, |s| s.bold()))?;
    self.emit(out, &table)
  }

  fn index_suggestions(&self, out: &mut dyn Write, query: &str, tickers: &[&str]) -> io::Result<()> {
    let notice = format!("'{}' is an index. Try these ETFs instead:", query.to_uppercase());
    writeln!(out, "{}", self.paint(&notice, |s| s.yellow()))?;
    for ticker in tickers {
      writeln!(out, " - {}", self.paint(ticker, |s| s.cyan()))?;
    }
    Ok(())
  }

  fn cancelled(&self, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", self.paint("Operation cancelled.", |s| s.yellow()))
  }

  fn not_found(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", self.paint(message, |s| s.red().bold()))
  }

  fn error(&self, out: &mut dyn Write, error: &Error) -> io::Result<()> {
    let body = format!("API Error: {}", error_message(error));
    let width = body.chars().count() + 2;
    let heading = "═ Error ";
    let fill = width.saturating_sub(heading.chars().count());

    let top = format!("╔{}{}╗", heading, "═".repeat(fill));
    let bottom = format!("╚{}╝", "═".repeat(width));
    let border = |s: &str| self.paint(s, |c| c.red());

    writeln!(out, "{}", border(&top))?;
    writeln!(
      out,
      "{} {}{} {}",
      border("║"),
      self.paint("API Error:", |c| c.red().bold()),
      body.trim_start_matches("API Error:"),
      border("║")
    )?;
    writeln!(out, "{}", border(&bottom))
  }
}

/// `$` followed by the value rounded to cents
pub fn money(value: f64) -> String {
  format!("${:.2}", value)
}

/// Group digits in threes with commas
pub fn thousands(value: u64) -> String {
  let digits = value.to_string();
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(c);
  }
  grouped
}
