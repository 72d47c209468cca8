//! Core domain types for hangman
//!
//! Pure game logic: the secret word, the masked rendering, the gallows
//! pictures and the game state machine. Nothing here touches the terminal.

mod gallows;
mod game;
mod render;
mod word;

pub use gallows::{MAX_WRONG_GUESSES, STAGES, stage};
pub use game::{Game, GameError, GameState, Turn};
pub use render::{
    PLACEHOLDER, guess_letter, is_fully_revealed, normalize_guess, render_word, status_line,
    wrong_letters_line,
};
pub use word::{SecretWord, WordError};
