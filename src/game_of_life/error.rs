//! Errors raised by the grid engine

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Both dimensions of a grid must be at least 1
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must be positive")]
    InvalidDimensions { rows: usize, cols: usize },
}
