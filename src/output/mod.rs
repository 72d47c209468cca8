//! Terminal output formatting
//!
//! Display utilities for session messages and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_farewell, print_render_result, print_session_summary};
