//! Core Connect Four rules: the column-stacked board, run detection from a
//! column's landing cell, player records, and the human-vs-computer session.

mod board;
mod lines;
mod player;
mod session;

pub use board::{Board, Cell, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
pub use lines::{
    check_column, extends, fills_gap, scan, Axis, Direction, LineMatch, Pattern, RunLength,
    ScanScope, AXES, EXTENSIONS,
};
pub use player::{validate_name, Player, PlayerRecord, MAX_NAME_LEN};
pub use session::{
    ComputerMove, GameOutcome, GridChange, GridObserver, Mode, Phase, PlayerMove, Session, Turn,
};
