//! Property tests for placement, undo and win detection.

use proptest::prelude::*;
use strictly_connect::{BOARD_SIZE, Player, Position, Roster, Seat, Session, WinLength};

fn roster(seats: usize) -> Roster {
    Roster::new(
        (0..seats)
            .map(|idx| Player::new(format!("P{}", idx + 1), format!("S{}", idx)))
            .collect(),
    )
    .expect("valid roster")
}

/// Raw coordinates, including some just off the board.
fn raw_moves() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..BOARD_SIZE + 2, 0..BOARD_SIZE + 2), 0..60)
}

/// Distinct on-board cells in random order.
fn distinct_cells() -> impl Strategy<Value = Vec<(usize, usize)>> {
    Just(Position::all().map(|p| (p.row(), p.col())).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_flat_map(|cells| {
            let len = cells.len();
            (Just(cells), 0..=len)
        })
        .prop_map(|(cells, n)| cells.into_iter().take(n).collect())
}

/// Quarter turn clockwise.
fn rotate((row, col): (usize, usize)) -> (usize, usize) {
    if row < BOARD_SIZE && col < BOARD_SIZE {
        (col, BOARD_SIZE - 1 - row)
    } else {
        (row, col)
    }
}

proptest! {
    #[test]
    fn prop_occupied_cells_never_change(
        moves in raw_moves(),
        seats in 1usize..5,
        win in 1usize..7,
    ) {
        let mut session = Session::new(roster(seats), WinLength::new(win).unwrap(), ());
        for (row, col) in moves {
            let before = session.board().clone();
            session.place_mark(row, col);
            for pos in Position::all() {
                if !before.is_empty(pos) {
                    prop_assert_eq!(session.board().get(pos), before.get(pos));
                }
            }
        }
    }

    #[test]
    fn prop_place_then_undo_restores_start(
        cells in distinct_cells(),
        seats in 1usize..5,
    ) {
        // Longer than the board, so no round ends and every undo applies.
        let mut session = Session::new(roster(seats), WinLength::new(BOARD_SIZE + 1).unwrap(), ());
        for &(row, col) in &cells {
            prop_assert!(session.place_mark(row, col).is_applied());
        }
        for _ in &cells {
            prop_assert!(session.undo().is_some());
        }
        prop_assert_eq!(session.board().occupied_count(), 0);
        prop_assert_eq!(session.current_seat(), Seat::new(0));
        prop_assert!(session.history().is_empty());
    }

    #[test]
    fn prop_win_detection_survives_rotation(
        moves in raw_moves(),
        seats in 1usize..4,
        win in 1usize..6,
    ) {
        let win = WinLength::new(win).unwrap();
        let mut original = Session::new(roster(seats), win, ());
        let mut rotated = Session::new(roster(seats), win, ());

        for (row, col) in moves {
            let (r_row, r_col) = rotate((row, col));
            let a = original.place_mark(row, col);
            let b = rotated.place_mark(r_row, r_col);
            prop_assert_eq!(a.is_applied(), b.is_applied());
            prop_assert_eq!(a.winner(), b.winner());
        }
        prop_assert_eq!(original.status(), rotated.status());
        prop_assert_eq!(original.scores(), rotated.scores());
    }
}
