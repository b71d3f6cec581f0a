//! Frame loop that drives a grid and renders every generation

use crate::config::{OutputFormat, PatternConfig, Settings};
use crate::game_of_life::{blinker, block, glider, random_cells, Cell, Grid, Pattern};
use crate::utils::{GridFormatter, CLEAR_SCREEN};
use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: usize,
    pub final_generation: u64,
    pub final_living: usize,
    pub extinct: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Summary:")?;
        writeln!(f, "  Frames rendered: {}", self.frames)?;
        writeln!(f, "  Final generation: {}", self.final_generation)?;
        writeln!(f, "  Living cells: {}", self.final_living)?;
        writeln!(f, "  Extinct: {}", if self.extinct { "yes" } else { "no" })?;
        Ok(())
    }
}

/// Produce the initial live cells for a configured pattern
pub fn seed_cells<R: Rng + ?Sized>(
    pattern: &PatternConfig,
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Vec<Cell> {
    let (dr, dc) = (pattern.offset_row, pattern.offset_col);
    match pattern.kind {
        Pattern::Glider => glider(dr, dc),
        Pattern::Blinker => blinker(dr, dc),
        Pattern::Block => block(dr, dc),
        Pattern::Random => random_cells(rows, cols, pattern.density, rng),
    }
}

/// A grid together with the display settings used to animate it
pub struct Simulation {
    settings: Settings,
    grid: Grid,
}

impl Simulation {
    /// Build the starting grid from the settings' pattern
    pub fn new<R: Rng + ?Sized>(settings: Settings, rng: &mut R) -> Result<Self> {
        let (rows, cols) = (settings.grid.rows, settings.grid.cols);
        let cells = seed_cells(&settings.pattern, rows, cols, rng);
        let grid = Grid::new(rows, cols, cells).context("Failed to create grid")?;

        Ok(Self { settings, grid })
    }

    /// Wrap an existing grid
    pub fn with_grid(settings: Settings, grid: Grid) -> Self {
        Self { settings, grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Render the configured number of generations to `out`.
    ///
    /// The grid advances between frames only, so the last frame shown is
    /// `generations - 1` steps past the starting state.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        let total = self.settings.display.generations;
        let delay = self.settings.display.delay();

        for frame in 0..total {
            self.render_frame(out, frame + 1, total)?;
            out.flush().context("Failed to flush output")?;

            if frame + 1 < total {
                if !delay.is_zero() {
                    std::thread::sleep(delay);
                }
                self.grid.next_generation();
            }
        }

        Ok(RunSummary {
            frames: total,
            final_generation: self.grid.generation(),
            final_living: self.grid.living_count(),
            extinct: self.grid.is_empty(),
        })
    }

    fn render_frame<W: Write>(&self, out: &mut W, frame: usize, total: usize) -> Result<()> {
        match self.settings.display.format {
            OutputFormat::Text => {
                if self.settings.display.clear_screen {
                    write!(out, "{}", CLEAR_SCREEN)?;
                }
                writeln!(out, "Generation {}/{}", frame, total)?;
                write!(out, "{}", GridFormatter::format_bordered(&self.grid))?;
            }
            OutputFormat::Json => {
                let line = GridFormatter::format_json(&self.grid)
                    .context("Failed to serialize frame")?;
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }
}
