//! Stateless UI rendering for the connection grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_connect::{BOARD_SIZE, Position, Square};
use unicode_width::UnicodeWidthStr;

use super::app::App;

/// Terminal columns per board cell.
const CELL_WIDTH: u16 = 6;

/// Terminal rows per board row (the cell line plus a spacer).
const CELL_HEIGHT: u16 = 2;

/// Foreground colors handed to seats in turn order.
const SEAT_COLORS: [Color; 6] = [
    Color::Blue,
    Color::Red,
    Color::Magenta,
    Color::Yellow,
    Color::Cyan,
    Color::Green,
];

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = regions(area);

    let title = Paragraph::new("Strictly Connect")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_roster(frame, chunks[1], app);
    draw_scoreboard(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);
    draw_board(frame, chunks[4], app);

    let help = Paragraph::new("arrows/hjkl move · enter/space place · u undo · r reset · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);

    if app.session().status().is_terminal() {
        draw_victory(frame, area, app);
    }
}

/// Finds the board cell under a terminal coordinate.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let inner = board_inner(regions(area)[4]);
    if column < inner.x || row < inner.y {
        return None;
    }
    let dx = column - inner.x;
    let dy = row - inner.y;
    if dy % CELL_HEIGHT != 0 {
        return None;
    }
    Position::new((dy / CELL_HEIGHT) as usize, (dx / CELL_WIDTH) as usize)
}

fn regions(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Roster
            Constraint::Length(1), // Scoreboard
            Constraint::Length(3), // Status
            Constraint::Min(board_height()),
            Constraint::Length(1), // Help
        ])
        .split(area)
}

fn board_width() -> u16 {
    CELL_WIDTH * BOARD_SIZE as u16 + 2
}

fn board_height() -> u16 {
    CELL_HEIGHT * BOARD_SIZE as u16 - 1 + 2
}

fn board_frame(area: Rect) -> Rect {
    center_rect(area, board_width(), board_height())
}

fn board_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(board_frame(area))
}

fn seat_style(seat: usize) -> Style {
    Style::default()
        .fg(SEAT_COLORS[seat % SEAT_COLORS.len()])
        .add_modifier(Modifier::BOLD)
}

fn draw_roster(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (seat, player) in app.session().roster().iter() {
        if seat.index() > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(player.symbol().clone(), seat_style(seat.index())));
        spans.push(Span::raw(format!(" {}", player.name())));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let scores = app.session().listener().scores().unwrap_or(session.scores());
    let mut spans = Vec::new();
    for (seat, player) in session.roster().iter() {
        if seat.index() > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::raw(format!("{} {}: ", player.symbol(), player.name())));
        spans.push(Span::styled(
            scores.get(seat).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let feed = app.session().listener();
    let text = match feed.winner() {
        Some(winner) => winner.to_string(),
        None if app.session().is_board_full() => {
            format!("{} · board full, press u to undo or r to reset", feed.turn())
        }
        None => format!("{} · first to {} in a row", feed.turn(), app.session().win_length()),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let outer = board_frame(area);
    frame.render_widget(Block::default().borders(Borders::ALL), outer);

    let mut lines = Vec::new();
    for (row, squares) in session.board().rows().iter().enumerate() {
        if row > 0 {
            lines.push(Line::raw(""));
        }
        let spans = squares
            .iter()
            .enumerate()
            .filter_map(|(col, square)| {
                let pos = Position::new(row, col)?;
                Some(draw_cell(app, pos, *square))
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), board_inner(area));
}

fn draw_cell(app: &App, pos: Position, square: Square) -> Span<'static> {
    let session = app.session();
    let (symbol, base_style) = match square {
        Square::Empty => ("·".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(seat) => (
            session
                .roster()
                .get(seat)
                .map(|p| p.symbol().clone())
                .unwrap_or_else(|| "?".to_string()),
            seat_style(seat.index()),
        ),
    };

    let on_line = session.winning_line().is_some_and(|line| line.contains(pos));
    let style = if pos == app.cursor() && !session.status().is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if on_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    Span::styled(pad_cell(&symbol), style)
}

/// Centers a symbol in a cell, measuring display width so emoji line up.
fn pad_cell(symbol: &str) -> String {
    let width = CELL_WIDTH as usize;
    let used = symbol.width().min(width);
    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{}{}", " ".repeat(left), symbol, " ".repeat(right))
}

fn draw_victory(frame: &mut Frame, area: Rect, app: &App) {
    let player = app.session().current_player();
    let popup = center_rect(area, 44, 7);
    let text = vec![
        Line::from(Span::styled(
            "🎉 Hurray! We Have a Winner 🎉",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(format!("{} {} is the champion!", player.name(), player.symbol())),
        Line::raw(""),
        Line::from(Span::styled(
            "enter/p play again · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Victory")),
        popup,
    );
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_cell_accounts_for_emoji_width() {
        assert_eq!(pad_cell("😀").width(), CELL_WIDTH as usize);
        assert_eq!(pad_cell("X").width(), CELL_WIDTH as usize);
    }

    #[test]
    fn test_cell_at_maps_board_corners() {
        let area = Rect::new(0, 0, 80, 30);
        let inner = board_inner(regions(area)[4]);
        assert_eq!(cell_at(area, inner.x, inner.y), Position::new(0, 0));
        assert_eq!(
            cell_at(area, inner.x + CELL_WIDTH * 4, inner.y + CELL_HEIGHT * 4),
            Position::new(4, 4)
        );
        assert_eq!(cell_at(area, inner.x, inner.y + 1), None);
        assert_eq!(cell_at(area, 0, 0), None);
    }
}
