//! Full-board detection.
//!
//! There is no draw: a full board without a winner can only be undone or
//! reset. The UI uses this to say so.

use super::super::{Board, Position};
use tracing::instrument;

/// Checks if every square is claimed.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    Position::all().all(|pos| !board.is_empty(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Seat, Square};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_filled_board_is_full() {
        let mut board = Board::new();
        for (idx, pos) in Position::all().enumerate() {
            board.set(pos, Square::Occupied(Seat::new(idx % 2)));
        }
        assert!(is_full(&board));
    }
}
