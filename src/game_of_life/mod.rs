//! Game of Life core functionality

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use error::GridError;
pub use grid::Grid;
pub use patterns::{blinker, block, glider, random_cells, seeded_rng, Pattern};
pub use rules::GameOfLifeRules;

/// A `(row, col)` position. Signed so translated patterns may fall off the grid.
pub type Cell = (isize, isize);
