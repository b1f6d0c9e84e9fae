//! Notification surface between the session and a UI.
//!
//! The session calls its listener synchronously after every state
//! transition. Rejected inputs produce no calls.

use super::rules::WinningLine;
use super::types::{Player, Scores, Seat};
use serde::{Deserialize, Serialize};

/// Receives session notifications.
///
/// Every method defaults to doing nothing, so a frontend only implements
/// what it displays.
pub trait SessionListener {
    /// The board was cleared; redraw an empty `size` x `size` grid.
    fn board_reset(&mut self, _size: usize) {}

    /// It is now `player`'s turn.
    fn turn_changed(&mut self, _seat: Seat, _player: &Player) {}

    /// `player` completed `line`. Fired once per winning move.
    fn win(&mut self, _seat: Seat, _player: &Player, _line: &WinningLine) {}

    /// Scores changed. Fired right after `win`.
    fn score_update(&mut self, _scores: &Scores) {}
}

/// Listener that ignores everything.
impl SessionListener for () {}

impl<L: SessionListener + ?Sized> SessionListener for &mut L {
    fn board_reset(&mut self, size: usize) {
        (**self).board_reset(size);
    }

    fn turn_changed(&mut self, seat: Seat, player: &Player) {
        (**self).turn_changed(seat, player);
    }

    fn win(&mut self, seat: Seat, player: &Player, line: &WinningLine) {
        (**self).win(seat, player, line);
    }

    fn score_update(&mut self, scores: &Scores) {
        (**self).score_update(scores);
    }
}

/// Owned record of one notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// See [`SessionListener::board_reset`].
    BoardReset {
        /// Board side length.
        size: usize,
    },
    /// See [`SessionListener::turn_changed`].
    TurnChanged {
        /// Seat to move.
        seat: Seat,
        /// Player in that seat.
        player: Player,
    },
    /// See [`SessionListener::win`].
    Win {
        /// Winning seat.
        seat: Seat,
        /// Player in that seat.
        player: Player,
        /// The winning run.
        line: WinningLine,
    },
    /// See [`SessionListener::score_update`].
    ScoreUpdate {
        /// Counters in seat order.
        scores: Scores,
    },
}

/// Records every notification in order.
impl SessionListener for Vec<SessionEvent> {
    fn board_reset(&mut self, size: usize) {
        self.push(SessionEvent::BoardReset { size });
    }

    fn turn_changed(&mut self, seat: Seat, player: &Player) {
        self.push(SessionEvent::TurnChanged {
            seat,
            player: player.clone(),
        });
    }

    fn win(&mut self, seat: Seat, player: &Player, line: &WinningLine) {
        self.push(SessionEvent::Win {
            seat,
            player: player.clone(),
            line: line.clone(),
        });
    }

    fn score_update(&mut self, scores: &Scores) {
        self.push(SessionEvent::ScoreUpdate {
            scores: scores.clone(),
        });
    }
}
