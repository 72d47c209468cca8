//! TUI application state and logic

use crate::commands::SessionSummary;
use crate::core::{Game, GameState};
use crate::definitions::DefinitionLookup;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a mut dyn WordSource,
    pub definitions: &'a dyn DefinitionLookup,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: SessionSummary,
    pub definition: Option<String>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    pub fn new(words: &'a mut dyn WordSource, definitions: &'a dyn DefinitionLookup) -> Self {
        let game = Game::new(words.get_word());
        let mut app = Self {
            words,
            definitions,
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: SessionSummary::default(),
            definition: None,
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.announce_word();
        app
    }

    fn announce_word(&mut self) {
        let text = format!(
            "I have a word in mind. It has {} characters.",
            self.game.secret().len()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let token = std::mem::take(&mut self.input_buffer);

        let Ok(turn) = self.game.guess(&token) else {
            return;
        };

        if turn.correct {
            self.add_message("👍 Currect, try again.", MessageStyle::Success);
        } else {
            self.add_message(
                &format!("Wrong, try again. ({}x)", turn.wrong_count),
                MessageStyle::Error,
            );
        }

        if turn.state.is_finished() {
            self.finish_game(turn.state);
        }
    }

    fn finish_game(&mut self, outcome: GameState) {
        self.stats.record(outcome);
        self.input_mode = InputMode::GameOver;

        match outcome {
            GameState::Won => self.add_message("🎉 You win!", MessageStyle::Success),
            GameState::Lost => {
                self.add_message("⚰️  You died.", MessageStyle::Error);
                let reveal = format!("The word was: {}", self.game.secret());
                self.add_message(&reveal, MessageStyle::Error);
            }
            GameState::AwaitingGuess => {}
        }

        self.definition = self.definitions.definition(self.game.secret().text());
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game = Game::new(self.words.get_word());
        self.input_buffer.clear();
        self.messages.clear();
        self.definition = None;
        self.input_mode = InputMode::Guessing;
        self.add_message("🔄 New game started!", MessageStyle::Info);
        self.announce_word();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<SessionSummary> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionSummary> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                code => handle_key(&mut app, code),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

fn handle_key(app: &mut App, code: KeyCode) {
    match app.input_mode {
        InputMode::GameOver => match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('n') => app.new_game(),
            _ => {
                // After a game, ignore other keys
            }
        },
        InputMode::Guessing => match code {
            KeyCode::Char(c) => app.input_buffer.push(c),
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Enter => app.submit_guess(),
            _ => {}
        },
    }
}
