//! Strictly Connect - Unified CLI
//!
//! Runs the terminal UI or the headless script runner.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufReader};
use std::path::Path;
use strictly_connect::{GameConfig, Session};
use strictly_connect_tui::{Cli, Command, load_config, run_script, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.clone().unwrap_or(Command::Play) {
        Command::Play => {
            let config = load_config(&cli)?;
            tui::run_tui(&config)
        }
        Command::Script { input } => {
            initialize_stderr_tracing();
            let config = load_config(&cli)?;
            run_headless(&config, input.as_deref())
        }
    }
}

/// Run the headless JSON-lines session
#[instrument(skip(config))]
fn run_headless(config: &GameConfig, input: Option<&Path>) -> Result<()> {
    let mut session = Session::from_config(config, Vec::new())?;
    let stdout = io::stdout().lock();

    let applied = match input {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run_script(&mut session, BufReader::new(file), stdout)?
        }
        _ => run_script(&mut session, io::stdin().lock(), stdout)?,
    };

    info!(applied, scores = ?session.scores().as_slice(), "Headless session finished");
    Ok(())
}

/// Logs go to stderr so stdout carries only events.
fn initialize_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}
