use super::player::Player;
use crate::error::{ConfigError, MoveError};

pub const MIN_ROWS: usize = 6;
pub const MIN_COLS: usize = 7;
pub const MAX_ROWS: usize = 100;
pub const MAX_COLS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Column-stacked grid. Row 0 is the top, `rows - 1` the bottom.
///
/// `landing[col]` is the row the next token dropped into `col` will occupy,
/// or `None` once the column is full. Every cell below the landing row is
/// occupied and every cell at or above it is empty, so finding where a token
/// lands never requires a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    landing: Vec<Option<usize>>,
}

impl Board {
    /// Create an empty board of `rows x cols`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) || !(MIN_COLS..=MAX_COLS).contains(&cols) {
            return Err(ConfigError::Dimensions {
                rows,
                columns: cols,
            });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            landing: vec![Some(rows - 1); cols],
        })
    }

    /// The classic 6x7 board.
    pub fn standard() -> Self {
        Board {
            rows: MIN_ROWS,
            cols: MIN_COLS,
            cells: vec![Cell::Empty; MIN_ROWS * MIN_COLS],
            landing: vec![Some(MIN_ROWS - 1); MIN_COLS],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position. Panics outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Signed lookup used by the line walker; `None` outside the grid.
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.get(row, col))
    }

    /// Row a token dropped into `col` would occupy, `None` if the column is
    /// full or does not exist.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        self.landing.get(col).copied().flatten()
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Drop a token in a column, returns the row where it landed.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                columns: self.cols,
            });
        }
        let row = self.landing[col].ok_or(MoveError::ColumnFull(col))?;

        self.cells[row * self.cols + col] = player.to_cell();
        self.landing[col] = row.checked_sub(1);
        Ok(row)
    }

    /// Columns that can still take a token, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.landing.iter().all(Option::is_none)
    }

    /// Empty every cell and rewind every column, keeping the allocation.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.landing.fill(Some(self.rows - 1));
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        for col in 0..board.cols() {
            assert_eq!(board.landing_row(col), Some(5));
        }
    }

    #[test]
    fn test_rejects_small_boards() {
        assert!(matches!(
            Board::new(5, 7),
            Err(ConfigError::Dimensions { rows: 5, columns: 7 })
        ));
        assert!(Board::new(6, 6).is_err());
        assert!(Board::new(101, 7).is_err());
        assert!(Board::new(6, 101).is_err());
        assert!(Board::new(8, 10).is_ok());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Red);
        assert_eq!(board.landing_row(3), Some(4));

        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Yellow);
        assert_eq!(board.landing_row(3), Some(3));
    }

    #[test]
    fn test_landing_row_decreases_by_one_per_drop() {
        let mut board = Board::new(9, 8).unwrap();
        for col in 0..board.cols() {
            let mut previous = board.landing_row(col).unwrap();
            while let Ok(row) = board.drop_piece(col, Player::Yellow) {
                assert_eq!(row, previous);
                assert_eq!(board.get(row, col), Cell::Yellow);
                match board.landing_row(col) {
                    Some(next) => {
                        assert_eq!(next + 1, previous);
                        previous = next;
                    }
                    None => assert_eq!(row, 0),
                }
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();
        for _ in 0..board.rows() {
            board.drop_piece(0, Player::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(
            board.drop_piece(0, Player::Yellow),
            Err(MoveError::ColumnFull(0))
        );
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert_eq!(
            board.drop_piece(7, Player::Red),
            Err(MoveError::InvalidColumn {
                column: 7,
                columns: 7
            })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_cell_at_bounds() {
        let mut board = Board::standard();
        board.drop_piece(0, Player::Red).unwrap();
        assert_eq!(board.cell_at(5, 0), Some(Cell::Red));
        assert_eq!(board.cell_at(-1, 0), None);
        assert_eq!(board.cell_at(0, -1), None);
        assert_eq!(board.cell_at(6, 0), None);
        assert_eq!(board.cell_at(0, 7), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        for col in 0..board.cols() {
            for _ in 0..board.rows() {
                board.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_reset_clears_cells_and_landing_rows() {
        let mut board = Board::new(7, 9).unwrap();
        for col in 0..board.cols() {
            board.drop_piece(col, Player::Yellow).unwrap();
        }
        board.reset();
        assert_eq!(board, Board::new(7, 9).unwrap());
    }
}
