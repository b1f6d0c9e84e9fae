//! Command-line interface for strictly_connect.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Connect - N-in-a-row on a 5x5 grid
#[derive(Parser, Debug)]
#[command(name = "strictly_connect")]
#[command(about = "N-in-a-row connection game on a 5x5 grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game config (TOML). Missing file means defaults.
    #[arg(short, long, default_value = "strictly_connect.toml", global = true)]
    pub config: PathBuf,

    /// Player name, in turn order. Repeat once per player.
    #[arg(long = "name", global = true)]
    pub names: Vec<String>,

    /// Player symbol, in turn order. Repeat once per player.
    #[arg(long = "symbol", global = true)]
    pub symbols: Vec<String>,

    /// Contiguous run needed to win.
    #[arg(short, long = "win", global = true)]
    pub win_condition: Option<i64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Run headless: JSON input lines in, JSON event lines out
    Script {
        /// File of input lines. Reads stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
}
