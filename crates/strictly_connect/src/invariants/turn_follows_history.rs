//! Turn order invariant: the seat to move is determined by the history.

use super::super::{Seat, Session, Status};
use super::Invariant;

/// Invariant: seats move in ring order starting from seat 0.
///
/// While the round is in progress the seat to move is `plies mod seats`.
/// Once won, the turn stays with the winner, who made the last move.
pub struct TurnFollowsHistoryInvariant;

impl<L> Invariant<Session<L>> for TurnFollowsHistoryInvariant {
    fn holds(session: &Session<L>) -> bool {
        let seats = session.roster().seat_count();
        let history = session.history();

        let ring_order = history
            .iter()
            .enumerate()
            .all(|(ply, mov)| mov.seat == Seat::new(ply % seats));
        if !ring_order {
            return false;
        }

        match session.status() {
            Status::InProgress => session.current_seat() == Seat::new(history.len() % seats),
            Status::Won(winner) => {
                session.current_seat() == winner
                    && history.last().map(|mov| mov.seat) == Some(winner)
            }
        }
    }

    fn description() -> &'static str {
        "Seat to move follows ring order from the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Roster, WinLength};

    fn session() -> Session {
        let roster = Roster::new(vec![
            Player::new("a".to_string(), "A".to_string()),
            Player::new("b".to_string(), "B".to_string()),
        ])
        .unwrap();
        Session::new(roster, WinLength::DEFAULT, ())
    }

    #[test]
    fn test_alternation_holds() {
        let mut session = session();
        for col in 0..4 {
            session.place_mark(col % 2 + 1, col);
            assert!(TurnFollowsHistoryInvariant::holds(&session));
        }
    }

    #[test]
    fn test_won_round_holds() {
        let mut session = session();
        session.place_mark(0, 0);
        session.place_mark(4, 0);
        session.place_mark(0, 1);
        session.place_mark(4, 4);
        session.place_mark(0, 2);
        assert!(session.status().is_terminal());
        assert!(TurnFollowsHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_skipped_turn_violates() {
        let mut session = session();
        session.place_mark(0, 0);
        session.current = Seat::new(0);
        assert!(!TurnFollowsHistoryInvariant::holds(&session));
    }
}
