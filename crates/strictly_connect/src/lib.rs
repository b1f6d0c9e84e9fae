//! Pure game logic for an N-in-a-row connection game on a 5x5 grid.
//!
//! # Architecture
//!
//! - **Session**: the controller owning board, history, turn ring and scores
//! - **Rules**: win detection along four axes, full-board detection
//! - **Listener**: synchronous notifications for a UI
//! - **Invariants**: properties checked after every operation in debug builds
//! - **Config**: player names, symbols and win length from TOML
//!
//! # Example
//!
//! ```
//! use strictly_connect::{GameConfig, PlaceOutcome, Session};
//!
//! # fn example() -> Result<(), strictly_connect::ConfigError> {
//! let mut session = Session::from_config(&GameConfig::new(), ())?;
//! session.place_mark(0, 0);
//! session.place_mark(1, 0);
//! session.place_mark(0, 1);
//! session.place_mark(1, 1);
//! assert!(matches!(session.place_mark(0, 2), PlaceOutcome::Won { .. }));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
pub mod invariants;
mod listener;
pub mod rules;
mod session;
mod types;

pub use action::{Move, PlaceOutcome, SessionInput};
pub use config::{DEFAULT_NAMES, DEFAULT_SYMBOLS, GameConfig, SYMBOL_PALETTE};
pub use error::ConfigError;
pub use listener::{SessionEvent, SessionListener};
pub use rules::{Axis, WinningLine};
pub use session::Session;
pub use types::{
    BOARD_SIZE, Board, Player, Position, Roster, Scores, Seat, Square, Status, WinLength,
};
