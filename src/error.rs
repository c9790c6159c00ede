use std::path::PathBuf;

/// Errors raised when a token cannot be dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is over")]
    GameOver,

    #[error("waiting for the computer to move")]
    AwaitingComputer,

    #[error("waiting for the player to move")]
    AwaitingPlayer,

    #[error("no free column left on the board")]
    BoardFull,
}

/// Errors that can occur while reading or writing the highscore file.
#[derive(Debug, thiserror::Error)]
pub enum HighscoreError {
    #[error("failed to read highscores from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write highscores to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HighscoreError {
    /// True when the backing file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HighscoreError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("board of {rows}x{columns} is not playable (rows must be 6..=100, columns 7..=100)")]
    Dimensions { rows: usize, columns: usize },

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn {
            column: 9,
            columns: 7,
        };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
    }

    #[test]
    fn test_highscore_error_not_found() {
        let err = HighscoreError::Read {
            path: PathBuf::from("scores.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_not_found());

        let err = HighscoreError::Write {
            path: PathBuf::from("scores.txt"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Dimensions {
            rows: 4,
            columns: 7,
        };
        assert_eq!(
            err.to_string(),
            "board of 4x7 is not playable (rows must be 6..=100, columns 7..=100)"
        );
        let err = ConfigError::Validation("player.name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: player.name must not be empty"
        );
    }
}
