//! Secret word representation
//!
//! A `SecretWord` is the uppercase word the player has to uncover. It is
//! validated once on construction and never changes for the rest of a game.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// The word the player must guess, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only letters, found {0:?}")]
    InvalidCharacter(char),
}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// Surrounding whitespace is ignored and the word is normalized to
    /// uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("cat").unwrap();
    /// assert_eq!(word.text(), "CAT");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("c4t").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letter positions in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific (uppercase) letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(SecretWord::new("cat").unwrap().text(), "CAT");
        assert_eq!(SecretWord::new("CaT").unwrap().text(), "CAT");
        assert_eq!(SecretWord::new("  dog\n").unwrap().text(), "DOG");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            SecretWord::new("c4t"),
            Err(WordError::InvalidCharacter('4'))
        );
        assert!(SecretWord::new("ice cream").is_err()); // Space
        assert!(SecretWord::new("o'clock").is_err()); // Punctuation
    }

    #[test]
    fn word_len_counts_letters() {
        assert_eq!(SecretWord::new("banana").unwrap().len(), 6);
    }

    #[test]
    fn word_letters_are_distinct() {
        let word = SecretWord::new("banana").unwrap();
        assert_eq!(word.letters().len(), 3);
        assert!(word.has_letter('B'));
        assert!(word.has_letter('N'));
        assert!(!word.has_letter('b')); // Letters are stored uppercase
        assert!(!word.has_letter('Z'));
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("zebra").unwrap();
        assert_eq!(format!("{word}"), "ZEBRA");
    }
}
