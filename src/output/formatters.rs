//! Formatting utilities for terminal output

use crate::commands::SessionSummary;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Hearts for the wrong guesses still allowed, e.g. `♥♥♥♡♡`
#[must_use]
pub fn lives_bar(remaining: usize, max: usize) -> String {
    let remaining = remaining.min(max);
    format!("{}{}", "♥".repeat(remaining), "♡".repeat(max - remaining))
}

/// Percentage of finished games that were won
#[must_use]
pub fn win_rate(summary: &SessionSummary) -> f64 {
    if summary.games_played == 0 {
        0.0
    } else {
        summary.games_won as f64 / summary.games_played as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 8.0, 8), "░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(8.0, 8.0, 8), "████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(4.0, 8.0, 8), "████░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn lives_bar_counts_down() {
        assert_eq!(lives_bar(8, 8), "♥♥♥♥♥♥♥♥");
        assert_eq!(lives_bar(3, 8), "♥♥♥♡♡♡♡♡");
        assert_eq!(lives_bar(0, 8), "♡♡♡♡♡♡♡♡");
    }

    #[test]
    fn win_rate_of_summary() {
        let none = SessionSummary::default();
        assert!(win_rate(&none).abs() < f64::EPSILON);

        let some = SessionSummary {
            games_played: 4,
            games_won: 3,
        };
        assert!((win_rate(&some) - 75.0).abs() < 1e-9);
    }
}
