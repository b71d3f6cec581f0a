//! Toroidal grid representation and generation stepping

use super::{Cell, GameOfLifeRules, GridError};
use itertools::iproduct;
use std::fmt;

/// Offsets of the eight cells surrounding a cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size Game of Life grid whose edges wrap around
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    scratch: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Create a grid with the given live cells. Coordinates outside the grid are ignored.
    pub fn new<I>(rows: usize, cols: usize, initial_live_cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Cell>,
    {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        // The cell buffer caps rows * cols at isize::MAX, so both fit in isize
        debug_assert!(rows <= isize::MAX as usize && cols <= isize::MAX as usize);

        let mut grid = Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
            scratch: vec![false; rows * cols],
            generation: 0,
        };

        for (row, col) in initial_live_cells {
            if let Some(idx) = grid.checked_index(row, col) {
                grid.cells[idx] = true;
            }
        }

        Ok(grid)
    }

    /// Create an all-dead grid
    pub fn empty(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::new(rows, cols, std::iter::empty())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of generations computed since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.cols)?;
        Some(self.index(row, col))
    }

    /// Wrap `(row, col)` onto the torus
    #[inline]
    fn wrap(&self, row: isize, col: isize) -> (isize, isize) {
        (
            row.rem_euclid(self.rows as isize),
            col.rem_euclid(self.cols as isize),
        )
    }

    /// Index of `(row, col)` after wrapping both coordinates onto the torus
    #[inline]
    fn wrapped_index(&self, row: isize, col: isize) -> usize {
        let (r, c) = self.wrap(row, col);
        self.index(r as usize, c as usize)
    }

    /// Get cell value at coordinates; out of bounds cells read as dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// One row of the current generation
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over the rows of the current generation, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Row-major view of the current generation
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Count living neighbors of a cell, wrapping around the edges.
    ///
    /// On grids narrower than three cells the same neighbor (or the cell
    /// itself) can be reached through more than one offset and is counted
    /// once per offset.
    pub fn count_neighbors(&self, row: isize, col: isize) -> u8 {
        // Wrapped coordinates are below the dimensions, so adding an offset cannot overflow
        let (row, col) = self.wrap(row, col);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dr, dc)| self.cells[self.wrapped_index(row + dr, col + dc)])
            .count() as u8
    }

    /// Advance the grid by one generation.
    ///
    /// Every neighbor count reads the current generation; results go to the
    /// scratch buffer, which becomes the current generation afterwards.
    pub fn next_generation(&mut self) {
        for (row, col) in iproduct!(0..self.rows, 0..self.cols) {
            let idx = self.index(row, col);
            let neighbors = self.count_neighbors(row as isize, col as isize);
            self.scratch[idx] = GameOfLifeRules::should_be_alive(self.cells[idx], neighbors);
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }

    /// Advance the grid by several generations
    pub fn advance(&mut self, generations: usize) {
        for _ in 0..generations {
            self.next_generation();
        }
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<Cell> {
        iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(row, col)| self.cells[self.index(row, col)])
            .map(|(row, col)| (row as isize, col as isize))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Fraction of living cells, between 0.0 and 1.0
    pub fn density(&self) -> f64 {
        self.living_count() as f64 / self.cells.len() as f64
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                write!(f, "{}", if cell { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
