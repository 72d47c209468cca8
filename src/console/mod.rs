//! Line input for the console game
//!
//! On a terminal, keys are read in raw mode so Ctrl-C and Ctrl-D reach the
//! game as `InputError::Interrupted` instead of killing the process. Piped
//! input is read line by line, with end of input treated the same way.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

/// Error type for reading player input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input interrupted")]
    Interrupted,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// A source of player input, one line at a time
pub trait LineSource {
    /// Block until the player submits a line; the line ending is not included
    ///
    /// # Errors
    ///
    /// Returns `InputError::Interrupted` if the player aborts or input ends.
    fn read_line(&mut self) -> Result<String, InputError>;
}

/// Input from the process's stdin
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self) -> Result<String, InputError> {
        if io::stdin().is_terminal() {
            read_raw_line()
        } else {
            read_buffered_line(&mut io::stdin().lock())
        }
    }
}

/// Restores cooked mode when dropped, even if reading fails
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn read_raw_line() -> Result<String, InputError> {
    let mut stdout = io::stdout();
    let mut line = String::new();
    let _guard = RawModeGuard::enable()?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(InputError::Interrupted);
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if line.is_empty() {
                    return Err(InputError::Interrupted);
                }
            }
            KeyCode::Enter => {
                write!(stdout, "\r\n")?;
                stdout.flush()?;
                return Ok(line);
            }
            KeyCode::Backspace => {
                if line.pop().is_some() {
                    write!(stdout, "\u{8} \u{8}")?;
                    stdout.flush()?;
                }
            }
            KeyCode::Char(c) => {
                line.push(c);
                write!(stdout, "{c}")?;
                stdout.flush()?;
            }
            _ => {}
        }
    }
}

fn read_buffered_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Interrupted);
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Input replayed from a fixed list; runs out as an interruption
#[cfg(test)]
pub(crate) struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub(crate) fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|&line| line.to_string()).collect(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> Result<String, InputError> {
        self.lines.pop_front().ok_or(InputError::Interrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn buffered_line_strips_line_ending() {
        let mut input = Cursor::new("a\r\nbc\n");
        assert_eq!(read_buffered_line(&mut input).unwrap(), "a");
        assert_eq!(read_buffered_line(&mut input).unwrap(), "bc");
    }

    #[test]
    fn buffered_end_of_input_is_interrupt() {
        let mut input = Cursor::new("last");
        assert_eq!(read_buffered_line(&mut input).unwrap(), "last");
        assert!(matches!(
            read_buffered_line(&mut input),
            Err(InputError::Interrupted)
        ));
    }

    #[test]
    fn buffered_blank_line_is_empty_token() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_buffered_line(&mut input).unwrap(), "");
    }

    #[test]
    fn scripted_input_runs_out() {
        let mut input = ScriptedInput::new(&["x"]);
        assert_eq!(input.read_line().unwrap(), "x");
        assert_eq!(input.remaining(), 0);
        assert!(matches!(input.read_line(), Err(InputError::Interrupted)));
    }
}
