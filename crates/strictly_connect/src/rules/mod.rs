//! Game rules for the connection grid.
//!
//! Pure functions over a board, kept apart from the session so they can
//! be tested and reused on their own.

pub mod full;
pub mod win;

pub use full::is_full;
pub use win::{Axis, WinningLine, run_length, winning_line};
