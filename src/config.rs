use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{validate_name, Board, Player, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};

/// Grid dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: MIN_ROWS,
            columns: MIN_COLS,
        }
    }
}

impl BoardConfig {
    pub fn build(&self) -> Result<Board, ConfigError> {
        Board::new(self.rows, self.columns)
    }
}

/// Colour requested for the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourChoice {
    Red,
    Yellow,
    #[default]
    Random,
}

impl ColourChoice {
    pub fn to_player(self) -> Option<Player> {
        match self {
            ColourChoice::Red => Some(Player::Red),
            ColourChoice::Yellow => Some(Player::Yellow),
            ColourChoice::Random => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub colour: ColourChoice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HighscoreConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub breakfast: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Fixed seed for reproducible games.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Log to this file. Without one, events are discarded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Where log events go. The terminal UI owns stdout and stderr while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Discard,
}

impl LoggingConfig {
    pub fn target(&self) -> LogTarget<'_> {
        match &self.file {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Discard,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "warn".to_string(),
            file: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub player: PlayerConfig,
    pub highscores: HighscoreConfig,
    pub display: DisplayConfig,
    pub ai: AiConfig,
    pub logging: LoggingConfig,
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
        Ok(config)
    }

    /// Load configuration from a TOML file, or `None` if the file does not
    /// exist.
    pub fn load_if_present(path: &Path) -> Result<Option<Self>, ConfigError> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.board.rows)
            || !(MIN_COLS..=MAX_COLS).contains(&self.board.columns)
        {
            return Err(ConfigError::Dimensions {
                rows: self.board.rows,
                columns: self.board.columns,
            });
        }

        if let Some(name) = &self.player.name {
            validate_name(name)?;
        }

        if let Some(path) = &self.highscores.path {
            if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
                return Err(ConfigError::Validation(format!(
                    "highscores.path must be a .txt file (got {})",
                    path.display()
                )));
            }
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// The highscore file, required before a session can start.
    pub fn highscore_path(&self) -> Result<&Path, ConfigError> {
        self.highscores.path.as_deref().ok_or_else(|| {
            ConfigError::Validation("a highscore file is required (highscores.path or -f)".into())
        })
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.columns, 7);
        assert_eq!(config.player.colour, ColourChoice::Random);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
columns = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.columns, 9);
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.logging.filter, "warn");
        assert!(config.highscores.path.is_none());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_colour_choice_parses_lowercase() {
        let config: AppConfig = toml::from_str("[player]\ncolour = \"yellow\"\n").unwrap();
        assert_eq!(config.player.colour, ColourChoice::Yellow);
        assert_eq!(config.player.colour.to_player(), Some(Player::Yellow));
        assert_eq!(ColourChoice::Random.to_player(), None);
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = AppConfig::default();
        config.board.rows = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Dimensions { rows: 5, .. })
        ));

        let mut config = AppConfig::default();
        config.board.columns = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_board() {
        let mut config = AppConfig::default();
        config.board.columns = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_name() {
        let mut config = AppConfig::default();
        config.player.name = Some("has space".into());
        assert!(config.validate().is_err());

        config.player.name = Some("n".repeat(50));
        assert!(config.validate().is_err());

        config.player.name = Some("ok_name".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_txt_highscores() {
        let mut config = AppConfig::default();
        config.highscores.path = Some(PathBuf::from("scores.csv"));
        assert!(config.validate().is_err());

        config.highscores.path = Some(PathBuf::from("scores"));
        assert!(config.validate().is_err());

        config.highscores.path = Some(PathBuf::from("data/scores.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_highscore_path_is_required() {
        let mut config = AppConfig::default();
        assert!(config.highscore_path().is_err());
        config.highscores.path = Some(PathBuf::from("scores.txt"));
        assert_eq!(config.highscore_path().unwrap(), Path::new("scores.txt"));
    }

    #[test]
    fn test_board_config_builds_board() {
        let config = BoardConfig {
            rows: 8,
            columns: 10,
        };
        let board = config.build().unwrap();
        assert_eq!(board.rows(), 8);
        assert_eq!(board.cols(), 10);
    }

    #[test]
    fn test_load_if_present_missing_file() {
        let config = AppConfig::load_if_present(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, None);
    }

    #[test]
    fn test_load_if_present_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present.toml");
        std::fs::write(&path, "[display]\nbreakfast = true\n").unwrap();
        let config = AppConfig::load_if_present(&path).unwrap().unwrap();
        assert!(config.display.breakfast);
    }

    #[test]
    fn test_logs_are_discarded_without_a_file() {
        let config = AppConfig::default();
        assert_eq!(config.logging.target(), LogTarget::Discard);

        let mut logging = LoggingConfig::default();
        logging.file = Some(PathBuf::from("game.log"));
        assert_eq!(logging.target(), LogTarget::File(Path::new("game.log")));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[player]
name = "alice"
colour = "red"

[highscores]
path = "scores.txt"

[ai]
seed = 42
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.player.name.as_deref(), Some("alice"));
        assert_eq!(config.player.colour, ColourChoice::Red);
        assert_eq!(config.ai.seed, Some(42));
        // Others are defaults
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 3\n").unwrap();
        assert!(AppConfig::load(&path).is_err());

        std::fs::write(&path, "[board\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
