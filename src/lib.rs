//! Hangman
//!
//! A terminal game of hangman: guess the secret word one letter at a time
//! before the gallows drawing is finished.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, GameState, SecretWord};
//!
//! let mut game = Game::new(SecretWord::new("cat").unwrap());
//! game.guess("c").unwrap();
//! game.guess("x").unwrap();
//!
//! assert_eq!(game.status_line(), "C _ _    NOT: X");
//! assert_eq!(game.state(), GameState::AwaitingGuess);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Dictionary definitions
pub mod definitions;

// Player input
pub mod console;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
