//! Display functions for session-level output

use super::formatters::win_rate;
use crate::commands::SessionSummary;
use colored::Colorize;

/// Print the goodbye shown when the player leaves or interrupts
pub fn print_farewell() {
    println!("\n{}\n", "👋 Thanks for playing!".bright_cyan().bold());
}

/// Print the games won during this session
pub fn print_session_summary(summary: &SessionSummary) {
    if summary.games_played == 0 {
        return;
    }

    println!("{}", "─".repeat(40).cyan());
    println!(
        "Games: {} | Won: {} | Win Rate: {}",
        summary.games_played.to_string().bright_white().bold(),
        summary.games_won.to_string().green().bold(),
        format!("{:.0}%", win_rate(summary)).bright_yellow()
    );
    println!("{}", "─".repeat(40).cyan());
}

/// Print the result of the render command
pub fn print_render_result(word: &str, rendered: &str) {
    println!(
        "{} {}",
        format!("{} letters:", word.chars().count()).bright_black(),
        rendered.bright_white().bold()
    );
}
