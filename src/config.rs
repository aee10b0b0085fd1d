use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::{ConfigError, SetupError};
use crate::game::{GameEngine, Player, PlayerId, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub player1: PlayerConfig,
    pub player2: PlayerConfig,
}

/// Board dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
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

/// Display attributes for one player. The rules never look at these.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Empty means "Player N".
    pub name: String,
    /// Any terminal colour name or `#rrggbb`. Empty means the seat default.
    pub color: String,
}

const DEFAULT_COLORS: [&str; 2] = ["red", "yellow"];

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
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
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_DIMENSION}"
            )));
        }
        if self.board.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be <= {MAX_DIMENSION}"
            )));
        }

        let [first, second] = self.players();
        let mut colors = Vec::with_capacity(2);
        for (seat, player) in ["player1", "player2"].into_iter().zip([&first, &second]) {
            let color = Color::from_str(player.color()).map_err(|_| {
                ConfigError::Validation(format!(
                    "{seat}.color '{}' is not a terminal colour",
                    player.color()
                ))
            })?;
            colors.push(color);
        }
        if colors[0] == colors[1] {
            return Err(ConfigError::Validation(
                "player1.color and player2.color must differ".into(),
            ));
        }

        Ok(())
    }

    /// The two players in turn order, with defaults filled in.
    pub fn players(&self) -> [Player; 2] {
        [
            seat_player(1, &self.player1, DEFAULT_COLORS[0]),
            seat_player(2, &self.player2, DEFAULT_COLORS[1]),
        ]
    }

    /// Build a fresh engine for these players and board dimensions.
    pub fn new_engine(&self) -> Result<GameEngine, SetupError> {
        let [first, second] = self.players();
        GameEngine::with_dimensions(
            first.id(),
            second.id(),
            self.board.height,
            self.board.width,
        )
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

fn seat_player(number: u8, config: &PlayerConfig, default_color: &str) -> Player {
    let name = if config.name.trim().is_empty() {
        format!("Player {number}")
    } else {
        config.name.clone()
    };
    let color = if config.color.trim().is_empty() {
        default_color.to_string()
    } else {
        config.color.clone()
    };
    Player::new(PlayerId::new(number), name, color)
}
