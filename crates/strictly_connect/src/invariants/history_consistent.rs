//! History consistency invariant: history length matches occupied squares.

use super::super::Session;
use super::Invariant;

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square, and
/// undo removes both together.
pub struct HistoryConsistentInvariant;

impl<L> Invariant<Session<L>> for HistoryConsistentInvariant {
    fn holds(session: &Session<L>) -> bool {
        session.history().len() == session.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Roster, Seat, Square, WinLength};

    fn session() -> Session {
        let roster = Roster::new(vec![
            Player::new("a".to_string(), "A".to_string()),
            Player::new("b".to_string(), "B".to_string()),
        ])
        .unwrap();
        Session::new(roster, WinLength::new(5).unwrap(), ())
    }

    #[test]
    fn test_empty_session_holds() {
        assert!(HistoryConsistentInvariant::holds(&session()));
    }

    #[test]
    fn test_moves_and_undo_hold() {
        let mut session = session();
        session.place_mark(0, 0);
        session.place_mark(4, 4);
        session.place_mark(2, 3);
        assert!(HistoryConsistentInvariant::holds(&session));
        session.undo();
        assert!(HistoryConsistentInvariant::holds(&session));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_extra_square_violates() {
        let mut session = session();
        session.place_mark(1, 1);
        session
            .board
            .set(Position::new(3, 3).unwrap(), Square::Occupied(Seat::new(0)));
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
