use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{Player, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::ui::Theme;

const MAX_NAME_LEN: usize = 32;
const MAX_HEIGHT: usize = 16;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Display names. Blank names fall back to "Player 1" / "Player 2".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: String,
    pub two: String,
}

impl PlayersConfig {
    pub fn name(&self, player: Player) -> &str {
        let name = match player {
            Player::One => self.one.trim(),
            Player::Two => self.two.trim(),
        };
        if name.is_empty() {
            player.default_name()
        } else {
            name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be >= 1".into()));
        }
        // Rows beyond this do not fit on a terminal.
        if self.board.height > MAX_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_HEIGHT}"
            )));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be >= 1".into()));
        }
        // Columns are picked with the digit keys.
        if self.board.width > 9 {
            return Err(ConfigError::Validation("board.width must be <= 9".into()));
        }
        let names = [
            ("players.one", &self.players.one),
            ("players.two", &self.players.two),
        ];
        for (key, name) in names {
            if name.chars().count() > MAX_NAME_LEN {
                return Err(ConfigError::Validation(format!(
                    "{key} must be at most {MAX_NAME_LEN} characters"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
