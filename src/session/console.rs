use anyhow::{Context, Result};
use inquire::Text;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::ui::is_prompt_cancelled;

/// Line-oriented user input.
pub trait Console {
    /// Shows `message` and reads one line of input.
    ///
    /// Returns `Ok(None)` when input is closed (EOF) or the user cancels the
    /// prompt with Ctrl+C or Escape.
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;
}

/// Reads from the terminal with `inquire`, or line by line from a piped stdin.
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        if io::stdin().is_terminal() {
            return match Text::new(message.trim_end()).prompt() {
                Ok(line) => Ok(Some(line)),
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            };
        }

        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
