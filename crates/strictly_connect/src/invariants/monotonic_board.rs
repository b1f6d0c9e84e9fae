//! Monotonic board invariant: squares are only claimed once per round.

use super::super::{Board, Session, Square};
use super::Invariant;

/// Invariant: replaying the history onto an empty board reproduces it.
///
/// No move in history lands on a square already claimed earlier in the
/// round, and nothing is on the board that history cannot explain.
pub struct MonotonicBoardInvariant;

impl<L> Invariant<Session<L>> for MonotonicBoardInvariant {
    fn holds(session: &Session<L>) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.seat));
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board squares are claimed at most once and match the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Roster, Seat, WinLength};

    fn session() -> Session {
        let roster = Roster::new(vec![
            Player::new("a".to_string(), "A".to_string()),
            Player::new("b".to_string(), "B".to_string()),
            Player::new("c".to_string(), "C".to_string()),
        ])
        .unwrap();
        Session::new(roster, WinLength::DEFAULT, ())
    }

    #[test]
    fn test_empty_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&session()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut session = session();
        session.place_mark(0, 0);
        session.place_mark(0, 1);
        session.place_mark(0, 2);
        session.place_mark(1, 0);
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut session = session();
        session.place_mark(2, 2);
        session
            .board
            .set(Position::new(2, 2).unwrap(), Square::Occupied(Seat::new(2)));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
