//! Strictly Connect frontends.
//!
//! The game rules live in the `strictly_connect` crate; this crate wires
//! them to the outside world.
//!
//! # Architecture
//!
//! - **Cli**: argument parsing and config overrides
//! - **Settings**: config file + flags resolved into a `GameConfig`
//! - **Tui**: interactive terminal frontend (ratatui)
//! - **Script**: headless JSON-lines frontend

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod script;
pub mod settings;
pub mod tui;

pub use cli::{Cli, Command};
pub use script::{ScriptError, run_script};
pub use settings::load_config;
