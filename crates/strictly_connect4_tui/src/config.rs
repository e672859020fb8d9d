//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_connect4::Player;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "connect4.toml";

/// Highest column count selectable with a single digit key.
pub const MAX_COLS: usize = 9;

/// Tallest board the terminal view lays out.
pub const MAX_ROWS: usize = 32;

/// Glyph the terminal draws for an empty cell; no player may use it.
pub const EMPTY_GLYPH: char = '#';

/// One seat at the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,
    /// Single-character marker.
    marker: char,
}

impl PlayerConfig {
    /// Creates a seat configuration.
    pub fn new(name: impl Into<String>, marker: char) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }
}

/// Board size and the two seats. Every field falls back to its default when
/// missing from the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Board columns.
    #[serde(default = "default_cols")]
    cols: usize,

    /// Seat that moves first in every game.
    #[serde(default = "default_first")]
    first: PlayerConfig,

    /// Seat that moves second.
    #[serde(default = "default_second")]
    second: PlayerConfig,
}

#[instrument]
fn default_rows() -> usize {
    6
}

#[instrument]
fn default_cols() -> usize {
    7
}

#[instrument]
fn default_first() -> PlayerConfig {
    PlayerConfig::new("David", 'X')
}

#[instrument]
fn default_second() -> PlayerConfig {
    PlayerConfig::new("Sam", 'O')
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            first: default_first(),
            second: default_second(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(rows = config.rows, cols = config.cols, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_FILE`] if present,
    /// otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line board size overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, rows: Option<usize>, cols: Option<usize>) -> Self {
        if let Some(rows) = rows {
            self.rows = rows;
        }
        if let Some(cols) = cols {
            self.cols = cols;
        }
        self
    }

    /// Checks the configuration can drive a session.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.rows > MAX_ROWS {
            return Err(ConfigError::new(format!("rows must be in 1..={}", MAX_ROWS)));
        }
        if self.cols == 0 || self.cols > MAX_COLS {
            return Err(ConfigError::new(format!(
                "cols must be in 1..={}",
                MAX_COLS
            )));
        }
        for (seat, player) in [("first", &self.first), ("second", &self.second)] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::new(format!("{} player name is empty", seat)));
            }
            if player.marker.is_whitespace() || player.marker == EMPTY_GLYPH {
                return Err(ConfigError::new(format!(
                    "{} player marker {:?} is reserved",
                    seat, player.marker
                )));
            }
        }
        if self.first.marker == self.second.marker {
            return Err(ConfigError::new(format!(
                "both players use marker {:?}",
                self.first.marker
            )));
        }
        Ok(())
    }

    /// Both seats as players, first mover first.
    pub fn players(&self) -> [Player; 2] {
        [
            Player::new(self.first.name.clone(), self.first.marker),
            Player::new(self.second.name.clone(), self.second.marker),
        ]
    }

    /// The default configuration as TOML, for `connect4 print-config`.
    #[instrument]
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(*config.rows(), 6);
        assert_eq!(*config.cols(), 7);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml(
            r#"
rows = 8

[second]
name = "Ada"
marker = "@"
"#,
        )
        .unwrap();

        assert_eq!(*config.rows(), 8);
        assert_eq!(*config.cols(), 7);
        assert_eq!(config.first().name(), "David");
        assert_eq!(*config.second().marker(), '@');
    }

    #[test]
    fn test_multi_char_marker_rejected_by_parser() {
        let result = GameConfig::from_toml(
            r#"
[first]
name = "David"
marker = "XX"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let config = GameConfig::default().with_overrides(Some(0), None);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_too_many_rows() {
        let config = GameConfig::default().with_overrides(Some(65534), None);
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("rows must be in"));

        let config = GameConfig::default().with_overrides(Some(MAX_ROWS + 1), None);
        assert!(config.validate().is_err());
        let config = GameConfig::default().with_overrides(Some(MAX_ROWS), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_too_many_cols() {
        let config = GameConfig::default().with_overrides(None, Some(10));
        assert!(config.validate().is_err());
        let config = GameConfig::default().with_overrides(None, Some(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_shared_marker() {
        let mut config = GameConfig::default();
        config.second = PlayerConfig::new("Sam", 'X');
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("both players"));
    }

    #[test]
    fn test_validation_rejects_reserved_marker() {
        let mut config = GameConfig::default();
        config.first = PlayerConfig::new("David", EMPTY_GLYPH);
        assert!(config.validate().is_err());

        config.first = PlayerConfig::new("David", ' ');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = GameConfig::default();
        config.second = PlayerConfig::new("  ", 'O');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_players_keep_seat_order() {
        let [first, second] = GameConfig::default().players();
        assert_eq!(first.name(), "David");
        assert_eq!(second.name(), "Sam");
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let text = GameConfig::default_toml().unwrap();
        let config = GameConfig::from_toml(&text).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
