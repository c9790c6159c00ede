//! Run detection from a column's landing cell.
//!
//! Every question is asked about the empty cell a token *would* occupy if it
//! were dropped into a column now. A [`RunLength`] of `Three` therefore means
//! "this drop completes four in a row", and `Two` means "this drop makes three".
//!
//! Two families of checks are made, in a fixed order:
//!
//! 1. **Extensions**: `run` same-coloured tokens lie next to the landing cell
//!    in one of eight directions.
//! 2. **Gap fills**: the landing cell sits between same-coloured neighbours on
//!    a row or diagonal, with `run` tokens split over both sides.
//!
//! The first check that succeeds wins; the order only decides which pattern is
//! reported, never whether a column matches.

use super::board::{Board, Cell};
use super::player::Player;

/// Number of existing same-coloured tokens a drop must line up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunLength {
    Two,
    Three,
}

impl RunLength {
    pub fn get(self) -> usize {
        match self {
            RunLength::Two => 2,
            RunLength::Three => 3,
        }
    }
}

/// A straight walk away from the landing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    UpLeft,
    DownLeft,
    Right,
    UpRight,
    DownRight,
    Down,
    Up,
}

impl Direction {
    /// `(row, col)` step. Rows grow downwards.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
            Direction::Right => (0, 1),
            Direction::UpRight => (-1, 1),
            Direction::DownRight => (1, 1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
        }
    }
}

/// Extension checks in evaluation order.
///
/// `Up` can never match from a landing cell, since everything above it in the
/// same column is empty; it is kept so all eight directions are covered.
pub const EXTENSIONS: [Direction; 8] = [
    Direction::Left,
    Direction::UpLeft,
    Direction::DownLeft,
    Direction::Right,
    Direction::UpRight,
    Direction::DownRight,
    Direction::Down,
    Direction::Up,
];

/// A line through the landing cell along which a gap can be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    /// `\`: top-left to bottom-right.
    NegativeDiagonal,
    /// `/`: bottom-left to top-right.
    PositiveDiagonal,
}

impl Axis {
    /// Step towards the left-hand side of the axis; the other side is the
    /// negation.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Axis::Row => (0, -1),
            Axis::NegativeDiagonal => (-1, -1),
            Axis::PositiveDiagonal => (1, -1),
        }
    }
}

/// Gap-fill checks in evaluation order.
pub const AXES: [Axis; 3] = [Axis::Row, Axis::NegativeDiagonal, Axis::PositiveDiagonal];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Extension(Direction),
    Gap(Axis),
}

/// A column whose landing cell completes a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch {
    pub column: usize,
    pub row: usize,
    pub pattern: Pattern,
}

/// Which columns [`scan`] looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanScope {
    /// Only this column. An index outside the board scans every column.
    Column(usize),
    All,
}

/// Count consecutive `colour` cells starting one step from `(row, col)`,
/// stopping at the first mismatch, the board edge, or `limit`.
fn run_from(
    board: &Board,
    (row, col): (isize, isize),
    (dr, dc): (isize, isize),
    colour: Cell,
    limit: usize,
) -> usize {
    (1..=limit as isize)
        .take_while(|&k| board.cell_at(row + dr * k, col + dc * k) == Some(colour))
        .count()
}

/// Would a token at `(row, col)` extend `run` tokens lying in `direction`?
pub fn extends(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    colour: Player,
    run: RunLength,
) -> bool {
    let anchor = (row as isize, col as isize);
    run_from(board, anchor, direction.step(), colour.to_cell(), run.get()) == run.get()
}

/// Would a token at `(row, col)` sit inside a run along `axis`, with at least
/// one neighbour on each side and `run` neighbours in total?
pub fn fills_gap(
    board: &Board,
    row: usize,
    col: usize,
    axis: Axis,
    colour: Player,
    run: RunLength,
) -> bool {
    let anchor = (row as isize, col as isize);
    let (dr, dc) = axis.step();
    let cell = colour.to_cell();
    let reach = run.get() - 1;

    let before = run_from(board, anchor, (dr, dc), cell, reach);
    if before == 0 {
        return false;
    }
    let after = run_from(board, anchor, (-dr, -dc), cell, reach);
    after > 0 && before + after >= run.get()
}

/// Run every check against the landing cell of `column`.
///
/// Full or nonexistent columns never match.
pub fn check_column(
    board: &Board,
    column: usize,
    colour: Player,
    run: RunLength,
) -> Option<LineMatch> {
    let row = board.landing_row(column)?;

    let extension = EXTENSIONS
        .iter()
        .find(|&&dir| extends(board, row, column, dir, colour, run))
        .map(|&dir| Pattern::Extension(dir));

    let pattern = extension.or_else(|| {
        AXES.iter()
            .find(|&&axis| fills_gap(board, row, column, axis, colour, run))
            .map(|&axis| Pattern::Gap(axis))
    })?;

    Some(LineMatch {
        column,
        row,
        pattern,
    })
}

/// Find the first column, left to right, whose landing cell completes a run
/// of `run` for `colour`. Full columns are skipped.
pub fn scan(
    board: &Board,
    run: RunLength,
    colour: Player,
    scope: ScanScope,
) -> Option<LineMatch> {
    match scope {
        ScanScope::Column(column) if column < board.cols() => {
            check_column(board, column, colour, run)
        }
        _ => (0..board.cols()).find_map(|column| check_column(board, column, colour, run)),
    }
}
