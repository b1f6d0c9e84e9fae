//! Game configuration: player names, symbols and win length.
//!
//! Read once at startup from a TOML file. Every key is optional and falls
//! back to its default on its own.

use crate::error::ConfigError;
use crate::types::{Player, Roster, WinLength};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Names used when none are configured.
pub const DEFAULT_NAMES: [&str; 2] = ["P1", "P2"];

/// Symbols used when none are configured.
pub const DEFAULT_SYMBOLS: [&str; 2] = ["😀", "😎"];

/// Symbols handed out, in order, to players configured without one.
pub const SYMBOL_PALETTE: [&str; 10] = ["😀", "😎", "🤖", "🦊", "🐸", "🐙", "🦄", "🍀", "⭐", "🔥"];

/// Raw game configuration as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct GameConfig {
    /// Player names in turn order. Empty means the defaults.
    names: Vec<String>,

    /// Player symbols in turn order. Empty means the defaults.
    symbols: Vec<String>,

    /// Run length needed to win. Missing or below one means 3.
    win_condition: Option<i64>,
}

impl GameConfig {
    /// Creates an empty configuration (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        debug!(?config, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!(players = config.names.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from a file, or defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the names, unless `names` is empty.
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        if !names.is_empty() {
            self.names = names;
        }
        self
    }

    /// Replaces the symbols, unless `symbols` is empty.
    pub fn with_symbols(mut self, symbols: Vec<String>) -> Self {
        if !symbols.is_empty() {
            self.symbols = symbols;
        }
        self
    }

    /// Replaces the win condition, if one is given.
    pub fn with_win_condition(mut self, win_condition: Option<i64>) -> Self {
        if win_condition.is_some() {
            self.win_condition = win_condition;
        }
        self
    }

    /// Resolved win length.
    pub fn win_length(&self) -> WinLength {
        self.win_condition
            .and_then(|n| usize::try_from(n).ok())
            .and_then(WinLength::new)
            .unwrap_or_default()
    }

    /// Builds the roster, pairing names with symbols.
    ///
    /// Players past the end of the symbol list get the first palette
    /// symbols not already taken.
    #[instrument(skip(self))]
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        let names: Vec<String> = if self.names.is_empty() {
            DEFAULT_NAMES.iter().map(|s| s.to_string()).collect()
        } else {
            self.names.clone()
        };
        let mut symbols: Vec<String> = if self.symbols.is_empty() {
            DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
        } else {
            self.symbols.clone()
        };

        let mut spare = SYMBOL_PALETTE
            .iter()
            .map(|s| s.to_string())
            .filter(|s| !symbols.contains(s))
            .collect::<Vec<_>>()
            .into_iter();
        while symbols.len() < names.len() {
            let symbol = spare
                .next()
                .unwrap_or_else(|| format!("#{}", symbols.len() + 1));
            debug!(%symbol, "Assigning palette symbol");
            symbols.push(symbol);
        }

        let players = names
            .into_iter()
            .zip(symbols)
            .map(|(name, symbol)| Player::new(name, symbol))
            .collect();
        Roster::new(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seat;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        let roster = config.roster().unwrap();
        assert_eq!(roster.seat_count(), 2);
        assert_eq!(roster.get(Seat::new(0)).unwrap().name(), "P1");
        assert_eq!(roster.get(Seat::new(1)).unwrap().symbol(), "😎");
        assert_eq!(config.win_length().get(), 3);
    }

    #[test]
    fn test_keys_fall_back_independently() {
        let config = GameConfig::from_toml_str("win_condition = 4").unwrap();
        assert_eq!(config.win_length().get(), 4);
        assert_eq!(config.roster().unwrap().seat_count(), 2);

        let config = GameConfig::from_toml_str(r#"names = ["Ada", "Grace", "Linus"]"#).unwrap();
        let roster = config.roster().unwrap();
        assert_eq!(roster.seat_count(), 3);
        assert_eq!(roster.get(Seat::new(2)).unwrap().symbol(), "🤖");
        assert_eq!(config.win_length().get(), 3);
    }

    #[test]
    fn test_non_positive_win_condition_uses_default() {
        assert_eq!(GameConfig::from_toml_str("win_condition = 0").unwrap().win_length().get(), 3);
        assert_eq!(GameConfig::from_toml_str("win_condition = -2").unwrap().win_length().get(), 3);
    }

    #[test]
    fn test_extra_symbols_ignored() {
        let config = GameConfig::new()
            .with_names(vec!["solo".to_string()])
            .with_symbols(vec!["X".to_string(), "O".to_string()]);
        let roster = config.roster().unwrap();
        assert_eq!(roster.seat_count(), 1);
        assert_eq!(roster.get(Seat::new(0)).unwrap().symbol(), "X");
    }

    #[test]
    fn test_palette_skips_used_symbols() {
        let config = GameConfig::new()
            .with_names(vec!["a".to_string(), "b".to_string()])
            .with_symbols(vec!["😀".to_string()]);
        let roster = config.roster().unwrap();
        assert_eq!(roster.get(Seat::new(1)).unwrap().symbol(), "😎");
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let config = GameConfig::from_toml_str(
            r#"
            names = ["a", "b"]
            symbols = ["X", "X"]
            "#,
        )
        .unwrap();
        assert!(config.roster().is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = GameConfig::from_toml_str("names = 7").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_from_file_and_missing_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "symbols = [\"X\", \"O\"]").unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.symbols(), &vec!["X".to_string(), "O".to_string()]);

        let dir = tempfile::tempdir().unwrap();
        assert!(GameConfig::from_file(dir.path().join("nope.toml")).is_err());
        let fallback = GameConfig::load_or_default(dir.path().join("nope.toml")).unwrap();
        assert_eq!(fallback, GameConfig::default());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = GameConfig::from_toml_str("win_condition = 4")
            .unwrap()
            .with_win_condition(Some(5))
            .with_win_condition(None);
        assert_eq!(config.win_length().get(), 5);
    }
}
