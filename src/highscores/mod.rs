//! Persisted top-10 board of named players and their scores.

mod entry;
mod store;

pub use entry::HighscoreEntry;
pub use store::{HighscoreStore, MAX_ENTRIES};
