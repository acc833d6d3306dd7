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

//! Interactive yes/no confirmation

use std::io::{self, BufRead, Write};

/// Ask `question` until the user answers yes or no.
///
/// An empty answer takes `default`. End of input counts as a refusal so a
/// closed or piped stdin never triggers a request unprompted.
pub fn confirm(
  question: &str,
  default: bool,
  input: &mut dyn BufRead,
  out: &mut dyn Write,
) -> io::Result<bool> {
  let hint = if default { "[Y/n]" } else { "[y/N]" };

  loop {
    write!(out, "{} {}: ", question, hint)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
      writeln!(out)?;
      return Ok(false);
    }

    match line.trim().to_lowercase().as_str() {
      "" => return Ok(default),
      "y" | "yes" => return Ok(true),
      "n" | "no" => return Ok(false),
      _ => writeln!(out, "Error: invalid input")?,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  fn ask(answers: &str, default: bool) -> (bool, String) {
    let mut input = Cursor::new(answers.as_bytes().to_vec());
    let mut out = Vec::new();
    let answer = confirm("Retrieve data for 'IBM'?", default, &mut input, &mut out).unwrap();
    (answer, String::from_utf8(out).unwrap())
  }

  #[test]
  fn test_empty_answer_takes_default() {
    assert!(ask("\n", true).0);
    assert!(!ask("\n", false).0);
  }

  #[test]
  fn test_explicit_answers() {
    assert!(ask("y\n", false).0);
    assert!(ask("YES\n", false).0);
    assert!(!ask("n\n", true).0);
    assert!(!ask("No\n", true).0);
  }

  #[test]
  fn test_reprompts_on_garbage() {
    let (answer, transcript) = ask("maybe\nn\n", true);
    assert!(!answer);
    assert_eq!(transcript.matches("Retrieve data for 'IBM'? [Y/n]: ").count(), 2);
    assert!(transcript.contains("Error: invalid input"));
  }

  #[test]
  fn test_end_of_input_declines() {
    assert!(!ask("", true).0);
  }
}
