//! Command implementations

pub mod play;
pub mod render;

pub use play::{PlayConfig, SessionSummary, play_game, run_session};
pub use render::render_guesses;
