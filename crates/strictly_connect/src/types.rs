//! Core domain types for the connection grid.

use crate::error::ConfigError;
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;

/// A player's position in turn order.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct Seat(usize);

impl Seat {
    /// Creates a seat from a raw turn-order index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the turn-order index.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A participant: display name plus the symbol drawn in claimed cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Display, new)]
#[display("{symbol} {name}")]
pub struct Player {
    /// Display name.
    name: String,
    /// Symbol (usually an emoji) marking this player's cells.
    symbol: String,
}

/// Ordered, non-empty ring of players with distinct symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Builds a roster, rejecting empty rosters, blank names or symbols,
    /// and symbols shared by two players.
    #[instrument(skip(players), fields(count = players.len()))]
    pub fn new(players: Vec<Player>) -> Result<Self, ConfigError> {
        if players.is_empty() {
            return Err(ConfigError::new("Roster needs at least one player"));
        }

        let mut seen = HashSet::new();
        for (idx, player) in players.iter().enumerate() {
            if player.name.trim().is_empty() {
                return Err(ConfigError::new(format!("Player {} has a blank name", idx + 1)));
            }
            if player.symbol.trim().is_empty() {
                return Err(ConfigError::new(format!(
                    "Player {} ({}) has a blank symbol",
                    idx + 1,
                    player.name
                )));
            }
            if !seen.insert(player.symbol.as_str()) {
                return Err(ConfigError::new(format!(
                    "Symbol {} is used by more than one player",
                    player.symbol
                )));
            }
        }

        Ok(Self { players })
    }

    /// Number of seats in the ring. Always at least one.
    pub fn seat_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the player in `seat`, if the seat exists.
    pub fn get(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat.index())
    }

    /// Returns the player in a seat known to be valid.
    pub(crate) fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index() % self.players.len()]
    }

    /// Seat that moves after `seat`.
    pub fn next(&self, seat: Seat) -> Seat {
        Seat((seat.index() + 1) % self.players.len())
    }

    /// Seat that moved before `seat`.
    pub fn previous(&self, seat: Seat) -> Seat {
        let n = self.players.len();
        Seat((seat.index() + n - 1) % n)
    }

    /// Iterates seats with their players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &Player)> {
        self.players.iter().enumerate().map(|(idx, p)| (Seat(idx), p))
    }
}

/// Minimum contiguous run that wins a round. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(transparent)]
pub struct WinLength(usize);

impl WinLength {
    /// Win length used when none is configured.
    pub const DEFAULT: WinLength = WinLength(3);

    /// Creates a win length, rejecting zero.
    pub fn new(length: usize) -> Option<Self> {
        (length >= 1).then_some(Self(length))
    }

    /// Returns the run length.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for WinLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A cell coordinate, guaranteed to lie on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "RawPosition")]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = ConfigError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col).ok_or_else(|| {
            ConfigError::new(format!("Position ({}, {}) is off the board", raw.row, raw.col))
        })
    }
}

impl Position {
    /// The middle cell.
    pub const CENTER: Position = Position {
        row: BOARD_SIZE / 2,
        col: BOARD_SIZE / 2,
    };

    /// Creates a position, or `None` when outside the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Row index, top to bottom.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index, left to right.
    pub fn col(self) -> usize {
        self.col
    }

    /// Steps by a signed delta, or `None` when that leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col)
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square claimed by the player in this seat.
    Occupied(Seat),
}

/// 5x5 board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at a position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row][pos.col]
    }

    /// Sets the square at a position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.row][pos.col] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Number of claimed squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|sq| **sq != Square::Empty)
            .count()
    }

    /// Rows of squares, top to bottom.
    pub fn rows(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Formats the board as text, drawing each player's symbol.
    pub fn display(&self, roster: &Roster) -> String {
        self.squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|sq| match sq {
                        Square::Empty => ".".to_string(),
                        Square::Occupied(seat) => roster
                            .get(*seat)
                            .map(|p| p.symbol().clone())
                            .unwrap_or_else(|| "?".to_string()),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Round status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Marks and undos are accepted.
    InProgress,
    /// A seat completed a line; only reset or replay are accepted.
    Won(Seat),
}

impl Status {
    /// Returns true once a winner has been declared.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Won(_))
    }
}

/// Win counters, one per seat. They survive resets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scores(Vec<u32>);

impl Scores {
    /// Creates zeroed counters for `seats` seats.
    pub fn new(seats: usize) -> Self {
        Self(vec![0; seats])
    }

    /// Wins recorded for `seat`; zero for unknown seats.
    pub fn get(&self, seat: Seat) -> u32 {
        self.0.get(seat.index()).copied().unwrap_or(0)
    }

    /// Records one win for `seat`.
    pub(crate) fn increment(&mut self, seat: Seat) {
        if let Some(score) = self.0.get_mut(seat.index()) {
            *score += 1;
        }
    }

    /// Counters in seat order.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_scores_increment() {
        let mut scores = Scores::new(2);
        scores.increment(Seat::new(1));
        scores.increment(Seat::new(1));
        scores.increment(Seat::new(7));
        assert_eq!(scores.as_slice(), &[0, 2]);
        assert_eq!(scores.get(Seat::new(7)), 0);
    }

    fn player(name: &str, symbol: &str) -> Player {
        Player::new(name.to_string(), symbol.to_string())
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(4, 4).is_some());
        assert!(Position::new(5, 0).is_none());
        assert!(Position::new(0, 5).is_none());
    }

    #[test]
    fn test_deserialize_rejects_off_board_position() {
        let pos: Position = serde_json::from_str(r#"{"row":4,"col":0}"#).unwrap();
        assert_eq!(pos, Position::new(4, 0).unwrap());

        let err = serde_json::from_str::<Position>(r#"{"row":9,"col":9}"#).unwrap_err();
        assert!(err.to_string().contains("off the board"));
        let mov = r#"{"seat":0,"position":{"row":0,"col":5}}"#;
        assert!(serde_json::from_str::<Move>(mov).is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Position::new(1, 1));
        let edge = Position::new(4, 2).unwrap();
        assert_eq!(edge.offset(1, 0), None);
    }

    #[test]
    fn test_all_positions() {
        assert_eq!(Position::all().count(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn test_roster_ring() {
        let roster =
            Roster::new(vec![player("a", "A"), player("b", "B"), player("c", "C")]).unwrap();
        assert_eq!(roster.next(Seat::new(2)), Seat::new(0));
        assert_eq!(roster.previous(Seat::new(0)), Seat::new(2));
        assert_eq!(roster.seat_count(), 3);
    }

    #[test]
    fn test_single_player_ring() {
        let roster = Roster::new(vec![player("solo", "S")]).unwrap();
        assert_eq!(roster.next(Seat::new(0)), Seat::new(0));
        assert_eq!(roster.previous(Seat::new(0)), Seat::new(0));
    }

    #[test]
    fn test_roster_rejects_empty() {
        assert!(Roster::new(Vec::new()).is_err());
    }

    #[test]
    fn test_roster_rejects_duplicate_symbols() {
        let err = Roster::new(vec![player("a", "X"), player("b", "X")]).unwrap_err();
        assert!(err.message.contains("more than one player"));
    }

    #[test]
    fn test_roster_rejects_blank_name() {
        assert!(Roster::new(vec![player("  ", "X")]).is_err());
    }

    #[test]
    fn test_win_length_rejects_zero() {
        assert_eq!(WinLength::new(0), None);
        assert_eq!(WinLength::new(4).map(WinLength::get), Some(4));
    }

    #[test]
    fn test_board_display() {
        let roster = Roster::new(vec![player("a", "A"), player("b", "B")]).unwrap();
        let mut board = Board::new();
        board.set(Position::new(0, 1).unwrap(), Square::Occupied(Seat::new(1)));
        let text = board.display(&roster);
        assert!(text.starts_with(". B . . ."));
        assert_eq!(board.occupied_count(), 1);
    }
}
