//! Console game mode
//!
//! Line-based hangman: one guess per line, the gallows and masked word
//! printed after every turn, and a play-again prompt between games.

use crate::console::{InputError, LineSource};
use crate::core::{Game, GameState, SecretWord};
use crate::definitions::DefinitionLookup;
use crate::wordlists::{WordListSource, WordSource};
use log::debug;
use std::io::Write;
use std::path::PathBuf;

/// Configuration for a play session
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub word_source: WordListSource,
    /// Cache file for the online word list
    pub cache: PathBuf,
    /// Look up a definition when a game ends
    pub definitions: bool,
}

impl PlayConfig {
    #[must_use]
    pub fn new(word_source: WordListSource) -> Self {
        Self {
            word_source,
            cache: std::env::temp_dir().join("hangman-words.txt"),
            definitions: true,
        }
    }
}

/// Games played during one session; kept in memory only
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: usize,
    pub games_won: usize,
}

impl SessionSummary {
    pub fn record(&mut self, outcome: GameState) {
        match outcome {
            GameState::Won => {
                self.games_played += 1;
                self.games_won += 1;
            }
            GameState::Lost => self.games_played += 1,
            GameState::AwaitingGuess => {}
        }
    }
}

/// Play one game to the end and return how it finished
///
/// # Errors
///
/// Returns `InputError::Interrupted` if the player aborts at the prompt, or
/// `InputError::Io` if reading input or writing output fails.
pub fn play_game<I, W>(
    secret: SecretWord,
    input: &mut I,
    out: &mut W,
    definitions: &dyn DefinitionLookup,
) -> Result<GameState, InputError>
where
    I: LineSource + ?Sized,
    W: Write,
{
    writeln!(
        out,
        "I have a word in mind. It has {} characters.",
        secret.len()
    )?;

    let mut game = Game::new(secret);

    let outcome = loop {
        writeln!(out)?;
        write!(out, "Enter one character to guess the word: ")?;
        out.flush()?;
        let token = input.read_line()?;
        writeln!(out)?;

        let turn = match game.guess(&token) {
            Ok(turn) => turn,
            Err(e) => {
                debug!("{e}");
                break game.state();
            }
        };

        if turn.correct {
            writeln!(out, "👍 Currect, try again.")?;
        } else {
            writeln!(out, "Wrong, try again. ({}x)", turn.wrong_count)?;
        }

        writeln!(out, "{}", game.illustration())?;
        writeln!(out)?;
        writeln!(out, "{}", game.status_line())?;

        if turn.state.is_finished() {
            break turn.state;
        }
    };

    match outcome {
        GameState::Lost => {
            writeln!(out)?;
            writeln!(out, "⚰️  You died.")?;
            writeln!(out, "The word was: {}", game.secret())?;
        }
        GameState::Won => {
            writeln!(out)?;
            writeln!(out, "🎉 You win!")?;
            writeln!(out)?;
        }
        GameState::AwaitingGuess => {}
    }

    if let Some(definition) = definitions.definition(game.secret().text()) {
        writeln!(out, "📖 {}: {definition}", game.secret())?;
    }
    out.flush()?;

    Ok(outcome)
}

/// Play games until the player declines another one
///
/// Each game gets a fresh word from `words`; finished games are tallied in
/// `summary`.
///
/// # Errors
///
/// Returns `InputError::Interrupted` if the player aborts at any prompt, or
/// `InputError::Io` if reading input or writing output fails.
pub fn run_session<S, I, W>(
    words: &mut S,
    input: &mut I,
    out: &mut W,
    definitions: &dyn DefinitionLookup,
    summary: &mut SessionSummary,
) -> Result<(), InputError>
where
    S: WordSource + ?Sized,
    I: LineSource + ?Sized,
    W: Write,
{
    writeln!(out, "Hey, let's play hangman.")?;
    writeln!(out)?;

    loop {
        let secret = words.get_word();
        debug!("Secret word has {} letters", secret.len());

        let outcome = play_game(secret, input, out, definitions)?;
        summary.record(outcome);

        writeln!(out)?;
        write!(out, "Play again? (yes/no): ")?;
        out.flush()?;
        let answer = input.read_line()?;

        match answer.trim().to_lowercase().as_str() {
            "yes" | "y" => {
                writeln!(out)?;
                writeln!(out, "🔄 New game started!")?;
                writeln!(out)?;
            }
            _ => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedInput;
    use crate::core::stage;
    use crate::definitions::NoDefinitions;
    use std::collections::VecDeque;

    struct FixedWords(VecDeque<&'static str>);

    impl WordSource for FixedWords {
        fn get_word(&mut self) -> SecretWord {
            SecretWord::new(self.0.pop_front().unwrap()).unwrap()
        }
    }

    struct KnownDefinition;

    impl DefinitionLookup for KnownDefinition {
        fn definition(&self, word: &str) -> Option<String> {
            (word == "CAT").then(|| "(noun) A small furry animal.".to_string())
        }
    }

    fn play(word: &str, lines: &[&str], definitions: &dyn DefinitionLookup) -> (GameState, String) {
        let mut input = ScriptedInput::new(lines);
        let mut out = Vec::new();
        let outcome =
            play_game(SecretWord::new(word).unwrap(), &mut input, &mut out, definitions).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game_output() {
        let (outcome, text) = play("cat", &["c", "a", "t"], &NoDefinitions);

        assert_eq!(outcome, GameState::Won);
        assert!(text.starts_with("I have a word in mind. It has 3 characters.\n"));
        assert_eq!(text.matches("Enter one character to guess the word: ").count(), 3);
        assert_eq!(text.matches("👍 Currect, try again.").count(), 3);
        assert!(text.contains("C _ _    NOT:\n"));
        assert!(text.contains("C A _    NOT:\n"));
        assert!(text.contains("C A T    NOT:\n"));
        assert!(text.ends_with("\n🎉 You win!\n\n"));
        assert!(!text.contains("You died"));
        assert!(!text.contains("Wrong"));
    }

    #[test]
    fn first_correct_guess_shows_celebration() {
        let (_, text) = play("cat", &["c", "a", "t"], &NoDefinitions);
        let first_turn = text.split("Enter one character").nth(1).unwrap();
        assert!(first_turn.contains(stage(0)));
    }

    #[test]
    fn losing_game_reveals_word() {
        let misses = ["a", "b", "c", "e", "f", "h", "i", "j"];
        let (outcome, text) = play("dog", &misses, &NoDefinitions);

        assert_eq!(outcome, GameState::Lost);
        for count in 1..=8 {
            assert!(text.contains(&format!("Wrong, try again. ({count}x)\n")));
        }
        assert!(text.contains(stage(8)));
        assert!(text.contains("_ _ _    NOT: A, B, C, E, F, H, I, J\n"));
        assert!(text.ends_with("\n⚰️  You died.\nThe word was: DOG\n"));
    }

    #[test]
    fn wrong_guess_shows_matching_stage() {
        let (_, text) = play("ox", &["z", "o", "x"], &NoDefinitions);
        let turns: Vec<&str> = text.split("Enter one character").collect();

        assert!(turns[1].contains("Wrong, try again. (1x)"));
        assert!(turns[1].contains(stage(1)));
        // A later correct guess keeps showing the current stage
        assert!(turns[2].contains(stage(1)));
        assert!(turns[3].contains("O X    NOT: Z\n"));
    }

    #[test]
    fn duplicate_and_multi_letter_guesses_count_as_given() {
        let (_, text) = play("ox", &["o", "o", "ox", "x"], &NoDefinitions);

        assert_eq!(text.matches("👍 Currect, try again.").count(), 3);
        assert!(text.contains("Wrong, try again. (1x)"));
        assert!(text.contains("O X    NOT: OX\n"));
    }

    #[test]
    fn definition_is_appended_after_result() {
        let (_, text) = play("cat", &["c", "a", "t"], &KnownDefinition);
        assert!(text.ends_with("🎉 You win!\n\n📖 CAT: (noun) A small furry animal.\n"));
    }

    #[test]
    fn missing_definition_leaves_messages_unchanged() {
        let (_, with_lookup) = play("dog", &["d", "o", "g"], &KnownDefinition);
        let (_, without) = play("dog", &["d", "o", "g"], &NoDefinitions);
        assert_eq!(with_lookup, without);
    }

    #[test]
    fn interrupt_mid_game_propagates() {
        let mut input = ScriptedInput::new(&["c"]);
        let mut out = Vec::new();
        let result = play_game(
            SecretWord::new("cat").unwrap(),
            &mut input,
            &mut out,
            &NoDefinitions,
        );
        assert!(matches!(result, Err(InputError::Interrupted)));
    }

    #[test]
    fn session_plays_again_with_fresh_word() {
        let mut words = FixedWords(VecDeque::from(["ox", "hi"]));
        let mut input = ScriptedInput::new(&["o", "x", "y", "h", "i", "no"]);
        let mut out = Vec::new();
        let mut summary = SessionSummary::default();

        run_session(&mut words, &mut input, &mut out, &NoDefinitions, &mut summary).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Hey, let's play hangman.\n\n"));
        assert_eq!(text.matches("🎉 You win!").count(), 2);
        assert_eq!(text.matches("Play again? (yes/no): ").count(), 2);
        assert!(text.contains("It has 2 characters."));
        assert_eq!(
            summary,
            SessionSummary {
                games_played: 2,
                games_won: 2
            }
        );
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn session_interrupt_keeps_tally() {
        let mut words = FixedWords(VecDeque::from(["ox", "hi"]));
        let mut input = ScriptedInput::new(&["o", "x", "yes", "h"]);
        let mut out = Vec::new();
        let mut summary = SessionSummary::default();

        let result = run_session(&mut words, &mut input, &mut out, &NoDefinitions, &mut summary);

        assert!(matches!(result, Err(InputError::Interrupted)));
        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.games_won, 1);
    }

    #[test]
    fn summary_counts_losses() {
        let mut summary = SessionSummary::default();
        summary.record(GameState::Lost);
        summary.record(GameState::Won);
        summary.record(GameState::AwaitingGuess);
        assert_eq!(summary.games_played, 2);
        assert_eq!(summary.games_won, 1);
    }
}
