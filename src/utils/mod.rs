//! Console helpers shared by the CLI and the simulation loop

pub mod display;

pub use display::{Color, ColorOutput, Frame, GridFormatter, CLEAR_SCREEN};
