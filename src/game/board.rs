use std::ops::RangeInclusive;

use crate::error::BoardError;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a winning line.
pub const CONNECT: usize = 4;

/// Widest board whose columns can still be named by a single letter.
pub const MAX_COLS: usize = 26;

/// Line orientations as (row step, column step). Rows grow upwards.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // ascending, "/"
    (-1, 1), // descending, "\"
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The player whose token occupies this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
}

/// The grid, stored as one bottom-to-top stack per column.
///
/// Rows are 1-indexed from the bottom, columns 0-indexed from the left. A cell
/// `(row, col)` is occupied iff `row <= column_height(col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: Vec<Vec<Player>>,
}

impl Board {
    /// Create a new empty standard board
    pub fn new() -> Self {
        Board {
            rows: ROWS,
            columns: vec![Vec::with_capacity(ROWS); COLS],
        }
    }

    /// Create an empty board with non-standard dimensions.
    pub fn with_size(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || cols > MAX_COLS {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            columns: vec![Vec::with_capacity(rows); cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// Empty every column
    pub fn reset(&mut self) {
        for column in &mut self.columns {
            column.clear();
        }
    }

    /// Get the cell at a 1-indexed row (bottom is 1) and 0-indexed column.
    ///
    /// Returns `None` when the coordinates are off the board and
    /// `Some(Cell::Empty)` for an unoccupied cell on it.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row == 0 || row > self.rows {
            return None;
        }
        let column = self.columns.get(col)?;
        Some(column.get(row - 1).map_or(Cell::Empty, |p| p.to_cell()))
    }

    /// Number of tokens in a column; 0 for a column off the board
    pub fn column_height(&self, col: usize) -> usize {
        self.columns.get(col).map_or(0, Vec::len)
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.columns
            .get(col)
            .map_or(true, |column| column.len() >= self.rows)
    }

    /// Columns that still accept a token, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols())
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Total number of tokens on the board
    pub fn move_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Drop a token in a column, returns the 1-indexed row where it landed
    pub fn try_drop_piece(&mut self, col: usize, player: Player) -> Result<usize, DropError> {
        let rows = self.rows;
        let column = self.columns.get_mut(col).ok_or(DropError::InvalidColumn)?;
        if column.len() >= rows {
            return Err(DropError::ColumnFull);
        }
        column.push(player);
        Ok(column.len())
    }

    /// Drop a token in a column. Returns false, leaving the board untouched,
    /// if the column is off the board or full.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> bool {
        self.try_drop_piece(col, player).is_ok()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols()).all(|col| self.is_column_full(col))
    }

    /// Check every line of the board for four of `player`'s tokens.
    pub fn has_won(&self, player: Player) -> bool {
        let target = player.to_cell();
        DIRECTIONS.iter().any(|&(dr, dc)| {
            run_starts(self.rows, dr, 1).any(|row| {
                run_starts(self.cols(), dc, 0).any(|col| self.line_matches(row, col, dr, dc, target))
            })
        })
    }

    /// Check if the token at (row, col) is part of a line of four
    pub fn wins_through(&self, row: usize, col: usize) -> bool {
        let target = match self.get(row, col) {
            Some(Cell::Empty) | None => return false,
            Some(cell) => cell,
        };

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let forward = self.count_run(row, col, dr, dc, target);
            let backward = self.count_run(row, col, -dr, -dc, target);
            1 + forward + backward >= CONNECT
        })
    }

    fn line_matches(&self, row: usize, col: usize, dr: isize, dc: isize, target: Cell) -> bool {
        (0..CONNECT as isize).all(|k| {
            step(row, col, dr * k, dc * k).and_then(|(r, c)| self.get(r, c)) == Some(target)
        })
    }

    /// Count matching cells beyond (row, col) in one direction
    fn count_run(&self, row: usize, col: usize, dr: isize, dc: isize, target: Cell) -> usize {
        (1isize..)
            .map_while(|k| {
                let (r, c) = step(row, col, dr * k, dc * k)?;
                (self.get(r, c)? == target).then_some(())
            })
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn step(row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
}

/// Start positions along one axis of `len` cells (numbered from `first`) for
/// which a run of `CONNECT` cells with the given step stays on the board.
fn run_starts(len: usize, step: isize, first: usize) -> RangeInclusive<usize> {
    let span = CONNECT - 1;
    let last = first + len - 1;
    match step {
        0 => first..=last,
        _ if len < CONNECT => 1..=0,
        s if s > 0 => first..=last - span,
        _ => first + span..=last,
    }
}
