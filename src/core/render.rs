//! Masked word rendering
//!
//! Turns a secret word and the guesses made so far into the display string
//! shown to the player, e.g. `A _ _ D _ _`.

use rustc_hash::FxHashSet;

/// Placeholder shown for letters that have not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Separator between the masked word and the list of wrong letters
const STATUS_GAP: &str = "    ";

/// Normalize a raw guess token the way it is recorded in a game
///
/// The line ending and surrounding whitespace are dropped and the token is
/// uppercased. Nothing else is validated.
#[must_use]
pub fn normalize_guess(token: &str) -> String {
    token.trim().to_uppercase()
}

/// The letter a guess token stands for, if it is exactly one character
#[must_use]
pub fn guess_letter(token: &str) -> Option<char> {
    let upper = token.to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

/// Render a word for display in a game of hangman
///
/// Every position holds the uppercase letter if that letter has been guessed
/// and `_` otherwise; positions are joined with single spaces. Guessing a
/// letter reveals all of its occurrences. Comparison is case-insensitive and
/// guesses longer than one character never reveal anything.
///
/// # Examples
/// ```
/// use hangman::core::render_word;
///
/// assert_eq!(render_word("ABCDEF", &["a", "d", "m"]), "A _ _ D _ _");
/// assert_eq!(render_word("ABCDEF", &["a", "d", "e"]), "A _ _ D E _");
/// ```
#[must_use]
pub fn render_word<S: AsRef<str>>(word: &str, guesses: &[S]) -> String {
    let revealed: FxHashSet<char> = guesses
        .iter()
        .filter_map(|guess| guess_letter(guess.as_ref()))
        .collect();

    let mut rendered = String::with_capacity(word.len() * 2);
    for (i, letter) in word.to_uppercase().chars().enumerate() {
        if i > 0 {
            rendered.push(' ');
        }
        rendered.push(if revealed.contains(&letter) {
            letter
        } else {
            PLACEHOLDER
        });
    }

    rendered
}

/// True once a rendered word has no hidden positions left
#[inline]
#[must_use]
pub fn is_fully_revealed(rendered: &str) -> bool {
    !rendered.contains(PLACEHOLDER)
}

/// Format the wrong guesses as `NOT: X, Y`, in the order they were made
///
/// With no wrong guesses this is just `NOT:`.
#[must_use]
pub fn wrong_letters_line<S: AsRef<str>>(wrong: &[S]) -> String {
    if wrong.is_empty() {
        return "NOT:".to_string();
    }

    let letters: Vec<&str> = wrong.iter().map(AsRef::as_ref).collect();
    format!("NOT: {}", letters.join(", "))
}

/// The per-turn status line: masked word followed by the wrong letters
#[must_use]
pub fn status_line<S: AsRef<str>>(rendered: &str, wrong: &[S]) -> String {
    format!("{rendered}{STATUS_GAP}{}", wrong_letters_line(wrong))
}
