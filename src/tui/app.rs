//! Application state and logic.

use strictly_connect::{
    Player, Position, Scores, Seat, Session, SessionInput, SessionListener, WinningLine,
};
use tracing::debug;

use super::input::{Action, move_cursor};

/// Display state the UI derives from session notifications.
#[derive(Debug, Clone, Default)]
pub struct StatusFeed {
    turn: String,
    winner: Option<String>,
    scores: Option<Scores>,
}

impl StatusFeed {
    /// Turn indicator text.
    pub fn turn(&self) -> &str {
        &self.turn
    }

    /// Victory text, present only after a win.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Latest scores pushed by the session.
    pub fn scores(&self) -> Option<&Scores> {
        self.scores.as_ref()
    }
}

impl SessionListener for StatusFeed {
    fn board_reset(&mut self, size: usize) {
        debug!(size, "Board reset");
        self.winner = None;
    }

    fn turn_changed(&mut self, _seat: Seat, player: &Player) {
        self.turn = format!("👉 Turn: {} {}", player.name(), player.symbol());
    }

    fn win(&mut self, _seat: Seat, player: &Player, _line: &WinningLine) {
        self.winner = Some(format!("🎉 {} {} wins!", player.name(), player.symbol()));
    }

    fn score_update(&mut self, scores: &Scores) {
        self.scores = Some(scores.clone());
    }
}

/// Main application state.
pub struct App {
    session: Session<StatusFeed>,
    cursor: Position,
    quit: bool,
}

impl App {
    /// Creates a new application around a started session.
    pub fn new(session: Session<StatusFeed>) -> Self {
        Self {
            session,
            cursor: Position::CENTER,
            quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session<StatusFeed> {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies a user action.
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Applying action");
        match action {
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Place => {
                self.session.handle(SessionInput::CellActivated {
                    row: self.cursor.row(),
                    col: self.cursor.col(),
                });
            }
            Action::PlaceAt(position) => {
                self.cursor = position;
                self.session.handle(SessionInput::CellActivated {
                    row: position.row(),
                    col: position.col(),
                });
            }
            Action::Undo => {
                self.session.handle(SessionInput::UndoRequested);
            }
            Action::Reset => {
                self.session.handle(SessionInput::ResetRequested);
            }
            Action::Replay => {
                if self.session.status().is_terminal() {
                    self.session.handle(SessionInput::ReplayRequested);
                }
            }
            Action::Quit => self.quit = true,
            Action::None => {}
        }
    }
}
