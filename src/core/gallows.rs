//! Gallows illustrations
//!
//! One picture per wrong-guess count. Stage 0 is the "lovely day" picture
//! shown while no guess has gone wrong; stage 8 is the finished gallows.

/// Wrong guesses allowed before the game is lost
pub const MAX_WRONG_GUESSES: usize = 8;

/// Illustration for each wrong-guess count, indexed 0 through 8
pub const STAGES: [&str; MAX_WRONG_GUESSES + 1] = [
    r"
Lovely Day!

  \/ \/\/
   \/ \//
    \ //
     ||
     |}
     ||
",
    r"

|
|
|
|
|
|
",
    r"
__________
|       |
|
|
|
|
|
",
    r"
__________
|       |
|       O
|
|
|
|
",
    r"
__________
|       |
|       O
|       |
|
|
|
",
    r"
__________
|       |
|       O
|      /|
|
|
|
",
    r"
__________
|       |
|       O
|      /|\
|
|
|
",
    r"
__________
|       |
|       O
|      /|\
|      /
|
|
",
    r"
__________
|       |
|       😵
|      /|\
|      / \
|
|
",
];

/// Illustration for a wrong-guess count
///
/// Counts past the last stage show the final picture.
#[must_use]
pub fn stage(wrong_guesses: usize) -> &'static str {
    STAGES[wrong_guesses.min(MAX_WRONG_GUESSES)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_stages() {
        assert_eq!(STAGES.len(), 9);
    }

    #[test]
    fn stage_zero_is_celebratory() {
        assert!(stage(0).contains("Lovely Day!"));
        assert!(!stage(0).contains("__________"));
    }

    #[test]
    fn stages_grow_progressively() {
        // Every gallows stage keeps the drawing of the stage before it
        for n in 2..MAX_WRONG_GUESSES {
            let previous = stage(n).lines().filter(|l| l.trim().len() > 1).count();
            let next = stage(n + 1).lines().filter(|l| l.trim().len() > 1).count();
            assert!(next >= previous, "stage {} lost detail", n + 1);
            assert_ne!(stage(n), stage(n + 1));
        }
    }

    #[test]
    fn only_final_stage_has_face() {
        assert!(stage(MAX_WRONG_GUESSES).contains('😵'));
        for n in 1..MAX_WRONG_GUESSES {
            assert!(!stage(n).contains('😵'));
        }
        assert!(stage(7).contains("|       O"));
    }

    #[test]
    fn stage_is_clamped() {
        assert_eq!(stage(42), stage(MAX_WRONG_GUESSES));
    }
}
