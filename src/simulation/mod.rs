//! Console simulation driver

pub mod runner;

pub use runner::{seed_cells, RunSummary, Simulation};
