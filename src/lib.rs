//! Conway's Game of Life on a toroidal grid
//!
//! The grid engine and seed patterns live in [`game_of_life`]; the
//! [`simulation`] module animates a grid on any writer.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Grid, GridError};
pub use simulation::{RunSummary, Simulation};

use anyhow::Result;

/// Run a full console simulation with the given settings on stdout
pub fn run(settings: Settings) -> Result<RunSummary> {
    let mut rng = game_of_life::seeded_rng(settings.pattern.seed);
    let mut simulation = Simulation::new(settings, &mut rng)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    simulation.run(&mut out)
}
