//! One-shot word rendering
//!
//! Renders a word against a list of guesses without playing a game.

use crate::core::{SecretWord, render_word};

/// Render `word` as it would appear after `guesses`
///
/// # Errors
///
/// Returns an error if the word is not playable (empty or not all letters).
pub fn render_guesses(word: &str, guesses: &[String]) -> Result<String, String> {
    let secret = SecretWord::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    Ok(render_word(secret.text(), guesses))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guesses(letters: &[&str]) -> Vec<String> {
        letters.iter().map(|&s| s.to_string()).collect()
    }

    #[test]
    fn render_guesses_masks_unknown_letters() {
        assert_eq!(
            render_guesses("abcdef", &guesses(&["a", "d", "m"])).unwrap(),
            "A _ _ D _ _"
        );
    }

    #[test]
    fn render_guesses_without_guesses() {
        assert_eq!(render_guesses("Zebra", &[]).unwrap(), "_ _ _ _ _");
    }

    #[test]
    fn render_guesses_invalid_word() {
        assert!(render_guesses("r2d2", &guesses(&["r"])).is_err());
    }
}
