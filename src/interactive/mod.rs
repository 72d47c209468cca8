//! Interactive TUI interface
//!
//! Full-screen hangman built on ratatui, playing the same `Game` as the
//! console mode.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
