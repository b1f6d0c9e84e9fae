//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use strictly_connect::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    Cursor(KeyCode),
    /// Place a mark under the cursor.
    Place,
    /// Place a mark at a clicked cell.
    PlaceAt(Position),
    /// Take back the last mark.
    Undo,
    /// Clear the board.
    Reset,
    /// Start the next round after a win.
    Replay,
    /// Leave the game.
    Quit,
    /// Key has no binding.
    None,
}

/// Maps a key to an action. The victory overlay rebinds Enter to replay.
pub fn action_for(key: KeyCode, round_over: bool) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('u') => Action::Undo,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('p') => Action::Replay,
        KeyCode::Enter if round_over => Action::Replay,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Place,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Action::Cursor(key),
        KeyCode::Char('k') => Action::Cursor(KeyCode::Up),
        KeyCode::Char('j') => Action::Cursor(KeyCode::Down),
        KeyCode::Char('h') => Action::Cursor(KeyCode::Left),
        KeyCode::Char('l') => Action::Cursor(KeyCode::Right),
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let step = match key {
        KeyCode::Up => (-1, 0),
        KeyCode::Down => (1, 0),
        KeyCode::Left => (0, -1),
        KeyCode::Right => (0, 1),
        _ => return cursor,
    };
    cursor.offset(step.0, step.1).unwrap_or(cursor)
}
