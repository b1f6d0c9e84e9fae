//! Resolves the game configuration from the config file and CLI flags.

use crate::cli::Cli;
use strictly_connect::{ConfigError, GameConfig};
use tracing::{info, instrument};

/// Loads the config file named on the command line and applies the flag
/// overrides key by key.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
pub fn load_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    let config = GameConfig::load_or_default(&cli.config)?
        .with_names(cli.names.clone())
        .with_symbols(cli.symbols.clone())
        .with_win_condition(cli.win_condition);
    info!(win_length = %config.win_length(), "Game configuration resolved");
    Ok(config)
}
