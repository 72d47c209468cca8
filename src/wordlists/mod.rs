//! Word lists for hangman
//!
//! Supplies secret words from the embedded list, a word file, or the online
//! dictionary with its cache file.

mod embedded;
pub mod loader;
pub mod online;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::SecretWord;
use log::warn;
use rand::Rng;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word lists that cannot be loaded
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to download word list: {0}")]
    Download(#[from] reqwest::Error),
    #[error("Word list contains no playable words")]
    Empty,
}

/// Anything that can hand out one secret word per game
pub trait WordSource {
    fn get_word(&mut self) -> SecretWord;
}

/// A non-empty list of playable words, drawn from uniformly at random
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<SecretWord>,
}

impl WordList {
    /// Wrap a list of words
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if there is nothing to play.
    pub fn new(words: Vec<SecretWord>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` only if the build shipped an empty list.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    /// Pick a word using the given random number generator
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &SecretWord {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

impl WordSource for WordList {
    fn get_word(&mut self) -> SecretWord {
        self.choose(&mut rand::rng()).clone()
    }
}

/// Where the secret words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    Embedded,
    Online,
    File(PathBuf),
}

impl WordListSource {
    /// Parse the `--wordlist` value: `embedded`, `online`, or a file path
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "embedded" | "builtin" => Self::Embedded,
            "online" | "download" => Self::Online,
            _ => Self::File(PathBuf::from(name)),
        }
    }

    /// Load the word list, using `cache` for the online dictionary
    ///
    /// A failed download falls back to the embedded list.
    ///
    /// # Errors
    ///
    /// Returns an error if a word file cannot be read or no playable word is
    /// left after loading.
    pub fn load(&self, cache: &Path) -> Result<WordList, WordListError> {
        match self {
            Self::Embedded => WordList::embedded(),
            Self::File(path) => WordList::new(loader::load_from_file(path)?),
            Self::Online => {
                match online::load_cached_or_download(online::DICTIONARY_URL, cache)
                    .and_then(WordList::new)
                {
                    Ok(list) => Ok(list),
                    Err(e) => {
                        warn!("{e}; falling back to the embedded word list");
                        WordList::embedded()
                    }
                }
            }
        }
    }
}
