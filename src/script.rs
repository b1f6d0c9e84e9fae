//! Headless session driver.
//!
//! Reads one JSON [`SessionInput`] per line and writes every notification
//! the session fires as one JSON [`SessionEvent`] per line.

use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use strictly_connect::{Session, SessionEvent, SessionInput};
use tracing::{debug, info, instrument};

/// Script error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ScriptError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for ScriptError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Writes and clears the events recorded so far.
fn flush_events<W: Write>(
    session: &mut Session<Vec<SessionEvent>>,
    output: &mut W,
) -> Result<usize, ScriptError> {
    let events = std::mem::take(session.listener_mut());
    for event in &events {
        serde_json::to_writer(&mut *output, event)?;
        output.write_all(b"\n")?;
    }
    Ok(events.len())
}

/// Feeds `input` to `session`, writing notifications to `output`.
///
/// Events the session recorded before the first line (the opening
/// board reset and turn) are written first. Blank lines are skipped.
/// Returns the number of inputs that changed the session.
#[instrument(skip_all)]
pub fn run_script<R: BufRead, W: Write>(
    session: &mut Session<Vec<SessionEvent>>,
    input: R,
    mut output: W,
) -> Result<usize, ScriptError> {
    flush_events(session, &mut output)?;

    let mut count = 0;
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parsed: SessionInput = serde_json::from_str(trimmed).map_err(|e| {
            ScriptError::new(format!("Invalid input on line {}: {}", idx + 1, e))
        })?;
        let changed = session.handle(parsed);
        debug!(line = idx + 1, ?parsed, changed, "Input handled");
        if changed {
            count += 1;
            debug!(board = %session.board().display(session.roster()), "Board after input");
        }

        flush_events(session, &mut output)?;
    }

    output.flush()?;
    info!(applied = count, "Script finished");
    Ok(count)
}
