//! Hangman game state
//!
//! A `Game` owns the secret word and the history of guesses. Everything
//! shown to the player (masked word, wrong letters, outcome) is recomputed
//! from that history, so there is no separate state to drift out of sync.

use super::gallows::{self, MAX_WRONG_GUESSES};
use super::render::{self, guess_letter, normalize_guess, render_word};
use super::word::SecretWord;
use thiserror::Error;

/// Where a game stands after the guesses made so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won,
    Lost,
}

impl GameState {
    /// True for `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Error type for guesses the game cannot accept
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("The game is already over ({0:?})")]
    Finished(GameState),
}

/// Result of a single turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// The guess as recorded (trimmed, uppercase)
    pub guess: String,
    pub correct: bool,
    pub wrong_count: usize,
    pub state: GameState,
}

/// One game of hangman
#[derive(Debug, Clone)]
pub struct Game {
    secret: SecretWord,
    guessed: Vec<String>,
    wrong: Vec<String>,
}

impl Game {
    #[must_use]
    pub const fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            guessed: Vec::new(),
            wrong: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Every guess made so far, duplicates included
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    /// Guesses that did not match a letter of the word, in guess order
    #[inline]
    #[must_use]
    pub fn wrong_guesses(&self) -> &[String] {
        &self.wrong
    }

    #[inline]
    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.wrong.len()
    }

    /// Wrong guesses left before the game is lost
    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong.len())
    }

    /// The masked word, e.g. `C _ T`
    #[must_use]
    pub fn masked(&self) -> String {
        render_word(self.secret.text(), &self.guessed)
    }

    /// Masked word followed by the wrong letters, e.g. `C _ T    NOT: E, S`
    #[must_use]
    pub fn status_line(&self) -> String {
        render::status_line(&self.masked(), &self.wrong)
    }

    /// Illustration for the current number of wrong guesses
    #[must_use]
    pub fn illustration(&self) -> &'static str {
        gallows::stage(self.wrong.len())
    }

    /// Current state, derived from the guesses made so far
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.wrong.len() >= MAX_WRONG_GUESSES {
            GameState::Lost
        } else if render::is_fully_revealed(&self.masked()) {
            GameState::Won
        } else {
            GameState::AwaitingGuess
        }
    }

    /// Whether a (normalized) guess matches one of the word's letters
    ///
    /// Only single-letter guesses can match; anything else counts as wrong.
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        guess_letter(guess).is_some_and(|letter| self.secret.has_letter(letter))
    }

    /// Submit one guess
    ///
    /// The token is trimmed and uppercased, then always recorded, even if it
    /// was guessed before. A token that is not one of the word's letters is
    /// also recorded as a wrong guess.
    ///
    /// # Errors
    /// Returns `GameError::Finished` if the game has already been won or lost.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, GameState, SecretWord};
    ///
    /// let mut game = Game::new(SecretWord::new("cat").unwrap());
    /// let turn = game.guess("c").unwrap();
    /// assert!(turn.correct);
    /// assert_eq!(game.masked(), "C _ _");
    /// assert_eq!(turn.state, GameState::AwaitingGuess);
    /// ```
    pub fn guess(&mut self, token: &str) -> Result<Turn, GameError> {
        let state = self.state();
        if state.is_finished() {
            return Err(GameError::Finished(state));
        }

        let guess = normalize_guess(token);
        let correct = self.matches(&guess);

        self.guessed.push(guess.clone());
        if !correct {
            self.wrong.push(guess.clone());
        }

        Ok(Turn {
            guess,
            correct,
            wrong_count: self.wrong.len(),
            state: self.state(),
        })
    }
}
