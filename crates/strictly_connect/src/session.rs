//! Game session controller.
//!
//! A [`Session`] is the single owner of the board, move history, turn ring
//! and scores. UIs drive it through [`Session::handle`] (or the individual
//! operations) and observe it through a [`SessionListener`].
//!
//! Invalid input is never an error: placing on a taken or off-board cell,
//! or placing and undoing after a win, leaves the session untouched and
//! fires no notification.

use super::action::{Move, PlaceOutcome, SessionInput};
use super::config::GameConfig;
use super::error::ConfigError;
use super::invariants::{InvariantSet, SessionInvariants};
use super::listener::SessionListener;
use super::rules::{self, WinningLine};
use super::types::{
    BOARD_SIZE, Board, Player, Position, Roster, Scores, Seat, Square, Status, WinLength,
};
use tracing::{debug, info, instrument};

/// Game session controller.
#[derive(Debug, Clone)]
pub struct Session<L = ()> {
    pub(crate) roster: Roster,
    pub(crate) win_length: WinLength,
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) current: Seat,
    pub(crate) scores: Scores,
    pub(crate) status: Status,
    pub(crate) winning_line: Option<WinningLine>,
    listener: L,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl<L: SessionListener> Session<L> {
    /// Starts a session: empty board, seat 0 to move, zeroed scores.
    ///
    /// Notifies `board_reset` then `turn_changed`.
    #[instrument(skip_all, fields(seats = roster.seat_count(), win_length = %win_length))]
    pub fn new(roster: Roster, win_length: WinLength, listener: L) -> Self {
        info!("Starting session");
        let scores = Scores::new(roster.seat_count());
        let mut session = Self {
            roster,
            win_length,
            board: Board::new(),
            history: Vec::new(),
            current: Seat::default(),
            scores,
            status: Status::InProgress,
            winning_line: None,
            listener,
        };
        session.announce_round();
        session
    }

    /// Starts a session from a resolved configuration.
    #[instrument(skip_all)]
    pub fn from_config(config: &GameConfig, listener: L) -> Result<Self, ConfigError> {
        let roster = config.roster()?;
        Ok(Self::new(roster, config.win_length(), listener))
    }
}

// ─────────────────────────────────────────────────────────────
//  Operations
// ─────────────────────────────────────────────────────────────

impl<L: SessionListener> Session<L> {
    /// Claims `(row, col)` for the seat to move.
    ///
    /// Ignored when the coordinates are off the board, the cell is taken, or
    /// the round already has a winner. Otherwise the mark is recorded and
    /// either the round is won (the turn stays with the winner) or the turn
    /// passes to the next seat.
    #[instrument(skip(self), fields(seat = %self.current))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> PlaceOutcome {
        if self.status.is_terminal() {
            return PlaceOutcome::Ignored;
        }
        let Some(position) = Position::new(row, col) else {
            return PlaceOutcome::Ignored;
        };
        if !self.board.is_empty(position) {
            return PlaceOutcome::Ignored;
        }

        let seat = self.current;
        self.board.set(position, Square::Occupied(seat));
        self.history.push(Move::new(seat, position));
        debug!(%position, "Mark placed");

        let outcome = match rules::winning_line(&self.board, position, self.win_length) {
            Some(line) => {
                self.status = Status::Won(seat);
                self.scores.increment(seat);
                self.winning_line = Some(line.clone());
                let player = self.roster.player(seat);
                info!(winner = %player, axis = %line.axis(), "Round won");
                self.listener.win(seat, player, &line);
                self.listener.score_update(&self.scores);
                PlaceOutcome::Won { winner: seat, line }
            }
            None => {
                self.current = self.roster.next(seat);
                self.listener
                    .turn_changed(self.current, self.roster.player(self.current));
                PlaceOutcome::Continued { next: self.current }
            }
        };

        self.verify();
        outcome
    }

    /// Takes back the most recent mark and rewinds the turn by one seat.
    ///
    /// Ignored when nothing has been played or the round has a winner.
    #[instrument(skip(self), fields(seat = %self.current, plies = self.history.len()))]
    pub fn undo(&mut self) -> Option<Move> {
        if self.status.is_terminal() {
            return None;
        }
        let last = self.history.pop()?;

        self.board.set(last.position, Square::Empty);
        self.current = self.roster.previous(self.current);
        debug!(undone = %last, "Move undone");
        self.listener
            .turn_changed(self.current, self.roster.player(self.current));

        self.verify();
        Some(last)
    }

    /// Clears the board for a new round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(scores = ?self.scores.as_slice(), "Resetting board");
        self.board = Board::new();
        self.history.clear();
        self.current = Seat::default();
        self.status = Status::InProgress;
        self.winning_line = None;
        self.announce_round();
        self.verify();
    }

    /// Starts the next round after a win. Same as [`Session::reset`].
    pub fn replay(&mut self) {
        self.reset();
    }

    /// Dispatches a UI input. Returns true if the session changed.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: SessionInput) -> bool {
        match input {
            SessionInput::CellActivated { row, col } => self.place_mark(row, col).is_applied(),
            SessionInput::UndoRequested => self.undo().is_some(),
            SessionInput::ResetRequested => {
                self.reset();
                true
            }
            SessionInput::ReplayRequested => {
                self.replay();
                true
            }
        }
    }

    fn announce_round(&mut self) {
        self.listener.board_reset(BOARD_SIZE);
        self.listener
            .turn_changed(self.current, self.roster.player(self.current));
    }

    fn verify(&self) {
        if cfg!(debug_assertions) {
            let result = SessionInvariants::check_all(self);
            debug_assert!(result.is_ok(), "Session invariants violated: {:?}", result);
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Read access
// ─────────────────────────────────────────────────────────────

impl<L> Session<L> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the roster in turn order.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the configured win length.
    pub fn win_length(&self) -> WinLength {
        self.win_length
    }

    /// Seat to move, or the winner once the round is over.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player to move, or the winner once the round is over.
    pub fn current_player(&self) -> &Player {
        self.roster.player(self.current)
    }

    /// Returns the scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Returns the round status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the moves of this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the line that won this round, if any.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Checks if every cell is claimed.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Returns the listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Returns the listener mutably, e.g. to drain recorded events.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}
