use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::entry::HighscoreEntry;
use crate::error::HighscoreError;
use crate::game::PlayerRecord;

/// Size of the highscore board.
pub const MAX_ENTRIES: usize = 10;

/// The top-10 board and the flat text file backing it.
///
/// Entries are kept best first. The file holds one `<name> <score>` record
/// per line in the same order, with no header.
#[derive(Debug, Clone)]
pub struct HighscoreStore {
    path: PathBuf,
    entries: Vec<HighscoreEntry>,
}

impl HighscoreStore {
    /// Create an empty board backed by `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighscoreStore {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Create a board and load it, logging and tolerating a failed load.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);
        if let Err(e) = store.load() {
            if e.is_not_found() {
                info!(path = %store.path().display(), "no highscore file yet, starting empty");
            } else {
                warn!(error = %e, "could not load highscores");
            }
        }
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries best first, at most [`MAX_ENTRIES`].
    pub fn ranked_entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    /// (Re)load the board from disk and return how many entries were read.
    ///
    /// Blank lines are skipped. Reading stops at the first malformed record,
    /// including one that is not valid UTF-8; the entries before it are kept.
    /// If the file cannot be read the board is left as it was.
    pub fn load(&mut self) -> Result<usize, HighscoreError> {
        let content = fs::read(&self.path).map_err(|e| HighscoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        let mut entries = Vec::with_capacity(MAX_ENTRIES);
        for (lineno, raw) in content.split(|&b| b == b'\n').enumerate() {
            if entries.len() == MAX_ENTRIES {
                break;
            }
            let line = std::str::from_utf8(raw).map(|l| l.trim_end_matches('\r'));
            if matches!(line, Ok(l) if l.trim().is_empty()) {
                continue;
            }
            match line.ok().and_then(HighscoreEntry::parse) {
                Some(entry) => entries.push(entry),
                None => {
                    warn!(
                        path = %self.path.display(),
                        line = lineno + 1,
                        "malformed highscore record, ignoring the rest of the file"
                    );
                    break;
                }
            }
        }

        debug!(count = entries.len(), path = %self.path.display(), "highscores loaded");
        self.entries = entries;
        Ok(self.entries.len())
    }

    /// First rank `score` would take: an empty slot, or the first entry it
    /// strictly beats.
    pub fn qualifying_rank(&self, score: u32) -> Option<usize> {
        (0..MAX_ENTRIES).find(|&rank| match self.entries.get(rank) {
            None => true,
            Some(entry) => score > entry.score,
        })
    }

    /// Insert the player if their score earns a place, pushing lower entries
    /// down and dropping the last one, then rewrite the file.
    ///
    /// Returns the rank taken, or `None` when the player has no name or does
    /// not qualify. The in-memory board only changes once the file is written.
    pub fn save_if_qualifies(
        &mut self,
        player: &PlayerRecord,
    ) -> Result<Option<usize>, HighscoreError> {
        let Some(name) = player.name() else {
            return Ok(None);
        };
        let Some(rank) = self.qualifying_rank(player.score()) else {
            return Ok(None);
        };

        let mut entries = self.entries.clone();
        entries.insert(rank, HighscoreEntry::new(name, player.score()));
        entries.truncate(MAX_ENTRIES);

        self.write(&entries)?;
        self.entries = entries;
        info!(player = name, score = player.score(), rank, "new highscore");
        Ok(Some(rank))
    }

    /// Write `entries` to a sibling temp file and rename it over the board.
    fn write(&self, entries: &[HighscoreEntry]) -> Result<(), HighscoreError> {
        let err = |source| HighscoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let content: String = entries.iter().map(|e| format!("{e}\n")).collect();
        fs::write(&tmp, content).map_err(err)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err(e));
        }
        Ok(())
    }
}
