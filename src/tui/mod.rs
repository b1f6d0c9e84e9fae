//! Terminal UI for Strictly Connect.

mod app;
mod input;
mod ui;

pub use app::{App, StatusFeed};
pub use input::{Action, action_for, move_cursor};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use strictly_connect::{GameConfig, Session};
use tracing::{error, info, instrument};

/// Log file used while the terminal is in raw mode.
pub const LOG_FILE: &str = "strictly_connect_tui.log";

/// Runs the interactive game until the user quits.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen.
    let log_file = std::fs::File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Connect TUI");

    let session = Session::from_config(config, StatusFeed::default())?;
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?app.session().scores().as_slice(), "Leaving TUI");
    res
}

/// Draw and input loop. One input event is handled per iteration.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                action_for(key.code, app.session().status().is_terminal())
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                match ui::cell_at(area, mouse.column, mouse.row) {
                    Some(position) => Action::PlaceAt(position),
                    None => Action::None,
                }
            }
            _ => Action::None,
        };

        app.apply(action);
    }

    Ok(())
}
