//! First-class action types for the connection grid.
//!
//! Moves are recorded on the history stack; inputs are the events a UI
//! forwards to the session.

use super::rules::WinningLine;
use super::types::{Position, Seat};
use serde::{Deserialize, Serialize};

/// A ply: the seat that moved and where it placed its mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The seat making the move.
    pub seat: Seat,
    /// The position where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(seat: Seat, position: Position) -> Self {
        Self { seat, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {} -> {}", self.seat, self.position)
    }
}

/// An input event arriving from the UI.
///
/// Coordinates are raw; the session validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionInput {
    /// A cell was clicked or selected.
    CellActivated {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// The undo control was used.
    UndoRequested,
    /// The reset control was used.
    ResetRequested,
    /// "Play again" was chosen after a win.
    ReplayRequested,
}

/// What a call to `place_mark` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Input was out of range, the cell was taken, or the round is over.
    Ignored,
    /// Mark placed; the turn passed to the next seat.
    Continued {
        /// Seat now to move.
        next: Seat,
    },
    /// Mark placed and it completed a winning line.
    Won {
        /// The winning seat.
        winner: Seat,
        /// The run that won.
        line: WinningLine,
    },
}

impl PlaceOutcome {
    /// Returns true if the board changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, PlaceOutcome::Ignored)
    }

    /// Returns the winner if this move ended the round.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            PlaceOutcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}
