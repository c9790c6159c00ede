use crate::game::{Board, Player};

/// Priority level that produced a computer move, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Completes four in a row for the computer.
    Win,
    /// Occupies the cell where the opponent would complete four.
    BlockWin,
    /// Lines up a third token for the computer.
    Build,
    /// Occupies the cell where the opponent would line up a third token.
    BlockBuild,
    /// Nothing better was found.
    Random,
}

/// A column chosen by an agent, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub tier: Tier,
}

/// Interface for computer opponents.
pub trait Agent {
    /// Pick a column for `own` on `board`. Returns `None` only when every
    /// column is full.
    fn select_column(&mut self, board: &Board, own: Player) -> Option<Decision>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
