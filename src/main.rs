//! Hangman - CLI
//!
//! Terminal hangman with a console mode and a full-screen TUI mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PlayConfig, SessionSummary, render_guesses, run_session},
    console::{InputError, TerminalInput},
    definitions::{DefinitionLookup, DictionaryApi, NoDefinitions},
    output::{print_farewell, print_render_result, print_session_summary},
    wordlists::{WordList, WordListSource},
};
use log::{info, warn};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default), 'online' (download and cache), or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Cache file for the online word list (default: hangman-words.txt in the temp dir)
    #[arg(short, long, global = true)]
    cache: Option<PathBuf>,

    /// Don't look up the word's definition when a game ends
    #[arg(long, global = true)]
    no_definitions: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the console (default)
    Play,

    /// Play in a full-screen terminal interface
    Tui,

    /// Show how a word looks after some guesses
    Render {
        /// The secret word
        word: String,

        /// Letters guessed so far
        guesses: Vec<String>,
    },
}

impl Cli {
    fn play_config(&self) -> PlayConfig {
        let mut config = PlayConfig::new(WordListSource::from_name(&self.wordlist));
        if let Some(cache) = &self.cache {
            config.cache.clone_from(cache);
        }
        config.definitions = !self.no_definitions;
        config
    }
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or(());

    let cli = Cli::parse();
    let config = cli.play_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Tui => run_tui_command(&config),
        Commands::Render { word, guesses } => run_render_command(&word, &guesses),
    }
}

fn load_words(config: &PlayConfig) -> Result<WordList> {
    let words = config.word_source.load(&config.cache)?;
    info!("Loaded {} words from {:?}", words.len(), config.word_source);
    Ok(words)
}

fn definition_lookup(config: &PlayConfig) -> Box<dyn DefinitionLookup> {
    if !config.definitions {
        return Box::new(NoDefinitions);
    }

    match DictionaryApi::new() {
        Ok(api) => Box::new(api),
        Err(e) => {
            warn!("Definitions unavailable: {e}");
            Box::new(NoDefinitions)
        }
    }
}

fn run_play_command(config: &PlayConfig) -> Result<()> {
    let mut words = load_words(config)?;
    let definitions = definition_lookup(config);

    let mut input = TerminalInput::new();
    let mut stdout = io::stdout();
    let mut summary = SessionSummary::default();

    let result = run_session(
        &mut words,
        &mut input,
        &mut stdout,
        definitions.as_ref(),
        &mut summary,
    );

    match result {
        Ok(()) | Err(InputError::Interrupted) => {
            print_farewell();
            print_session_summary(&summary);
            Ok(())
        }
        Err(InputError::Io(e)) => Err(e.into()),
    }
}

fn run_tui_command(config: &PlayConfig) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let mut words = load_words(config)?;
    let definitions = definition_lookup(config);

    let app = App::new(&mut words, definitions.as_ref());
    let summary = run_tui(app)?;

    print_farewell();
    print_session_summary(&summary);
    Ok(())
}

fn run_render_command(word: &str, guesses: &[String]) -> Result<()> {
    let rendered = render_guesses(word, guesses).map_err(|e| anyhow::anyhow!(e))?;
    print_render_result(word, &rendered);
    Ok(())
}
