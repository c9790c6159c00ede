use std::fmt;

use crate::game::validate_name;

/// One line of the highscore file: `<name> <score>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HighscoreEntry {
    pub name: String,
    pub score: u32,
}

impl HighscoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        HighscoreEntry {
            name: name.into(),
            score,
        }
    }

    /// Parse a record. Anything other than exactly a valid name followed by a
    /// non-negative integer is rejected.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let name = fields.next()?;
        let score = fields.next()?.parse().ok()?;
        if fields.next().is_some() || validate_name(name).is_err() {
            return None;
        }
        Some(HighscoreEntry::new(name, score))
    }
}

impl fmt::Display for HighscoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        assert_eq!(
            HighscoreEntry::parse("alice 12"),
            Some(HighscoreEntry::new("alice", 12))
        );
        assert_eq!(
            HighscoreEntry::parse("  bob\t7  "),
            Some(HighscoreEntry::new("bob", 7))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(HighscoreEntry::parse("alice"), None);
        assert_eq!(HighscoreEntry::parse("alice twelve"), None);
        assert_eq!(HighscoreEntry::parse("alice -3"), None);
        assert_eq!(HighscoreEntry::parse("alice 3 extra"), None);
        assert_eq!(HighscoreEntry::parse(&format!("{} 3", "n".repeat(50))), None);
        assert_eq!(HighscoreEntry::parse(""), None);
    }

    #[test]
    fn test_display_matches_file_format() {
        let entry = HighscoreEntry::new("carol", 21);
        assert_eq!(entry.to_string(), "carol 21");
        assert_eq!(HighscoreEntry::parse(&entry.to_string()), Some(entry));
    }
}
