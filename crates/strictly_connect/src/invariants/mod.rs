//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every session
//! operation. The session checks them in debug builds; they are also
//! testable on their own.

use derive_more::Display;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

pub mod history_consistent;
pub mod monotonic_board;
pub mod turn_follows_history;

pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use turn_follows_history::TurnFollowsHistoryInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MonotonicBoardInvariant,
    HistoryConsistentInvariant,
    TurnFollowsHistoryInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Roster, Seat, Session, Square, WinLength};

    fn session() -> Session {
        let roster = Roster::new(vec![
            Player::new("a".to_string(), "A".to_string()),
            Player::new("b".to_string(), "B".to_string()),
        ])
        .unwrap();
        Session::new(roster, WinLength::DEFAULT, ())
    }

    #[test]
    fn test_invariant_set_holds_for_empty_session() {
        assert!(SessionInvariants::check_all(&session()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut session = session();
        session.place_mark(0, 0);
        session.place_mark(1, 1);
        session.place_mark(0, 1);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut session = session();
        session.place_mark(2, 2);
        session
            .board
            .set(Position::new(0, 0).unwrap(), Square::Occupied(Seat::new(1)));

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[1].to_string(),
            <HistoryConsistentInvariant as Invariant<Session>>::description()
        );
    }
}
