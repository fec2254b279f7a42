//! Game board state: a fixed 3×3 grid plus an occupancy counter.

use crate::common::{BoardError, Cell, Mark, Move};
use crate::config::{BOARD_SIZE, CELL_COUNT, LINES};
use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    occupied: usize,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell value at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Returns `true` if (row, col) is inside the grid and holds no mark.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_empty)
    }

    /// Number of cells holding a mark.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Row-major view of the grid.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Move::new(row, col)))
            .filter(|mv| self.cells[mv.row][mv.col].is_empty())
    }

    /// Place `mark` at (row, col). A failed call leaves the board untouched.
    pub fn make_move(&mut self, mark: Mark, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        let cell = &mut self.cells[row][col];
        if !cell.is_empty() {
            return Err(BoardError::CellOccupied { row, col });
        }
        *cell = Cell::from(mark);
        self.occupied += 1;
        Ok(())
    }

    /// The mark that fills a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(r, col)| self.cells[r][col]);
            if a == b && b == c {
                a.mark()
            } else {
                None
            }
        })
    }

    /// Returns `true` when any row, column or diagonal holds three equal marks.
    pub fn is_winning(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns `true` when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied == CELL_COUNT
    }

    /// Reset every cell to empty so a new round can start on the same board.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.occupied = 0;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // column indices
        write!(f, " ")?;
        for c in 0..BOARD_SIZE {
            let sep = if c == 0 { " " } else { "   " };
            write!(f, "{}{}", sep, c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", r)?;
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " | ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
