//! Win detection for the connection grid.
//!
//! A win is checked only around the cell just claimed: along each of four
//! axes, count the contiguous same-seat cells on both sides and add one for
//! the cell itself.

use super::super::{Board, Position, Seat, Square, WinLength};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::instrument;

/// A line through the board, checked in declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Bottom-left to top-right.
    DiagonalUp,
}

impl Axis {
    /// Forward step `(d_row, d_col)`; the backward step is its negation.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// The run of cells that won a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct WinningLine {
    /// Axis the run lies on.
    axis: Axis,
    /// Cells of the run, ordered along the axis.
    cells: Vec<Position>,
}

impl WinningLine {
    /// Number of cells in the run.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the run has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks if a position is part of the run.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Walks from `origin` (exclusive) while cells belong to `seat`.
fn ray(board: &Board, origin: Position, seat: Seat, d_row: isize, d_col: isize) -> Vec<Position> {
    let mut cells = Vec::new();
    let mut cursor = origin.offset(d_row, d_col);
    while let Some(pos) = cursor {
        if board.get(pos) != Square::Occupied(seat) {
            break;
        }
        cells.push(pos);
        cursor = pos.offset(d_row, d_col);
    }
    cells
}

/// Cells of `seat`'s run through `origin` along `axis`, origin included.
fn run(board: &Board, origin: Position, seat: Seat, axis: Axis) -> Vec<Position> {
    let (d_row, d_col) = axis.step();
    let mut cells = ray(board, origin, seat, -d_row, -d_col);
    cells.reverse();
    cells.push(origin);
    cells.extend(ray(board, origin, seat, d_row, d_col));
    cells
}

/// Length of `seat`'s contiguous run through `origin` along `axis`.
///
/// Counts `origin` itself whether or not it is claimed.
#[instrument(skip(board))]
pub fn run_length(board: &Board, origin: Position, seat: Seat, axis: Axis) -> usize {
    run(board, origin, seat, axis).len()
}

/// Returns the first axis run through `origin` reaching `win_length`.
///
/// The seat is read from `origin`; an empty origin never wins.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, origin: Position, win_length: WinLength) -> Option<WinningLine> {
    let Square::Occupied(seat) = board.get(origin) else {
        return None;
    };

    Axis::iter().find_map(|axis| {
        let cells = run(board, origin, seat, axis);
        (cells.len() >= win_length.get()).then_some(WinningLine { axis, cells })
    })
}
