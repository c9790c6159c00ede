use super::board::Cell;
use crate::error::ConfigError;

/// Longest name that fits in a highscore record.
pub const MAX_NAME_LEN: usize = 49;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

/// The human at the keyboard: optional name, running score and token colour.
///
/// The record is "present" once a name has been set; only present players can
/// enter the highscore board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    name: Option<String>,
    score: u32,
    colour: Player,
}

impl PlayerRecord {
    pub fn new(colour: Player) -> Self {
        PlayerRecord {
            name: None,
            score: 0,
            colour,
        }
    }

    /// Set the player's name, rejecting names that could not be written back
    /// to the highscore file as a single token.
    pub fn set_name(&mut self, name: &str) -> Result<(), ConfigError> {
        validate_name(name)?;
        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.name.is_some()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn colour(&self) -> Player {
        self.colour
    }

    pub(crate) fn set_colour(&mut self, colour: Player) {
        self.colour = colour;
    }

    pub(crate) fn add_point(&mut self) {
        self.score += 1;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

/// Check that a name is non-empty, at most [`MAX_NAME_LEN`] characters and
/// free of whitespace.
pub fn validate_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation("player name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ConfigError::Validation(format!(
            "player name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(
            "player name must not contain whitespace".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Red.other(), Player::Yellow);
        assert_eq!(Player::Yellow.other(), Player::Red);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Yellow.name(), "Yellow");
    }

    #[test]
    fn test_record_presence_follows_name() {
        let mut record = PlayerRecord::new(Player::Red);
        assert!(!record.is_present());
        assert_eq!(record.name(), None);

        record.set_name("alice").unwrap();
        assert!(record.is_present());
        assert_eq!(record.name(), Some("alice"));
    }

    #[test]
    fn test_record_score() {
        let mut record = PlayerRecord::new(Player::Yellow);
        record.add_point();
        record.add_point();
        assert_eq!(record.score(), 2);
        record.reset_score();
        assert_eq!(record.score(), 0);
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("bob").is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
        assert!(validate_name("").is_err());
        assert!(validate_name("bob smith").is_err());
    }

    #[test]
    fn test_rejected_name_keeps_record_absent() {
        let mut record = PlayerRecord::new(Player::Red);
        assert!(record.set_name("two words").is_err());
        assert!(!record.is_present());
    }
}
