//! TUI rendering with ratatui
//!
//! Gallows, masked word and message panels for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameState, MAX_WRONG_GUESSES, guess_letter, wrong_letters_line};
use crate::output::formatters::{create_progress_bar, lives_bar, win_rate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use rustc_hash::FxHashSet;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),      // Gallows
            Constraint::Percentage(100), // Word and messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_word_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.game.state() {
        GameState::Lost => Color::Red,
        GameState::Won => Color::Green,
        GameState::AwaitingGuess if app.game.wrong_count() == 0 => Color::Green,
        GameState::AwaitingGuess => Color::Yellow,
    };

    let lines: Vec<Line> = app
        .game
        .illustration()
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();

    let picture = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(format!(" {}/{} ", app.game.wrong_count(), MAX_WRONG_GUESSES))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(picture, area);
}

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),       // Word
            Constraint::Percentage(100), // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let masked = if game.state() == GameState::Lost {
        // Show the answer once the game is lost
        let letters: Vec<String> = game.secret().text().chars().map(String::from).collect();
        letters.join(" ")
    } else {
        game.masked()
    };

    let total = game.secret().letters().len();
    let guessed: FxHashSet<char> = game
        .guessed()
        .iter()
        .filter_map(|g| guess_letter(g))
        .collect();
    let found = game.secret().letters().intersection(&guessed).count();

    let mut content = vec![
        Line::from(Span::styled(
            masked,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            wrong_letters_line(game.wrong_guesses()),
            Style::default().fg(Color::Red),
        )),
        Line::from(format!(
            "Lives:    {}",
            lives_bar(game.remaining(), MAX_WRONG_GUESSES)
        )),
        Line::from(format!(
            "Letters:  [{}] {found}/{total}",
            create_progress_bar(found as f64, total as f64, 16)
        )),
    ];

    if let Some(ref definition) = app.definition {
        content.push(Line::from(Span::styled(
            format!("📖 {definition}"),
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter one character to guess the word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.games_won,
        win_rate(&app.stats)
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Enter: Submit | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
