//! Console driver for the toroidal Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use toroidal_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{seeded_rng, Grid, Pattern},
    simulation::seed_cells,
    utils::{ColorOutput, GridFormatter},
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a wraparound grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Overrides shared by the commands that build a grid
#[derive(clap::Args, Debug)]
struct GridArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Number of rows (overrides config)
    #[arg(short, long)]
    rows: Option<usize>,

    /// Number of columns (overrides config)
    #[arg(short = 'k', long)]
    cols: Option<usize>,

    /// Starting pattern (overrides config)
    #[arg(short, long, value_enum)]
    pattern: Option<Pattern>,

    /// Fraction of cells alive for the random pattern (overrides config)
    #[arg(short, long)]
    density: Option<f64>,

    /// Seed for the random pattern (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the simulation in the terminal
    Run {
        #[command(flatten)]
        grid: GridArgs,

        /// Number of generations to display (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Pause between frames in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Do not clear the screen between frames
        #[arg(long)]
        no_clear: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Advance a pattern and print the resulting grid with coordinates
    Inspect {
        #[command(flatten)]
        grid: GridArgs,

        /// Generations to advance before printing
        #[arg(short, long, default_value_t = 0)]
        generations: usize,
    },

    /// Create default and example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            grid,
            generations,
            delay_ms,
            format,
            no_clear,
            verbose,
        } => {
            let overrides = CliOverrides {
                generations,
                delay_ms,
                format,
                no_clear,
                ..grid.overrides()
            };
            run_command(&grid.config, overrides, verbose)
        }
        Commands::Inspect { grid, generations } => {
            inspect_command(&grid.config, grid.overrides(), generations)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

impl GridArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            rows: self.rows,
            cols: self.cols,
            pattern: self.pattern,
            density: self.density,
            seed: self.seed,
            ..Default::default()
        }
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    Ok(settings)
}

fn run_command(config_path: &Path, overrides: CliOverrides, verbose: bool) -> Result<()> {
    let settings = load_settings(config_path, &overrides)?;

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Grid: {}x{}", settings.grid.rows, settings.grid.cols);
        eprintln!("  Pattern: {}", settings.pattern.kind);
        if settings.pattern.kind == Pattern::Random {
            eprintln!("  Density: {}", settings.pattern.density);
        }
        eprintln!("  Generations: {}", settings.display.generations);
        eprintln!("  Delay: {}ms", settings.display.delay_ms);
        eprintln!();
    }

    let summary = toroidal_life::run(settings).context("Simulation failed")?;

    if verbose {
        eprintln!("\n{}", summary);
    }
    if summary.extinct {
        eprintln!("{}", ColorOutput::warning("All cells died"));
    }

    Ok(())
}

fn inspect_command(config_path: &Path, overrides: CliOverrides, generations: usize) -> Result<()> {
    let settings = load_settings(config_path, &overrides)?;

    let (rows, cols) = (settings.grid.rows, settings.grid.cols);
    let mut rng = seeded_rng(settings.pattern.seed);
    let cells = seed_cells(&settings.pattern, rows, cols, &mut rng);
    let mut grid = Grid::new(rows, cols, cells).context("Failed to build starting grid")?;
    grid.advance(generations);

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Grid ({}x{}) after {} generation(s):",
            grid.rows(),
            grid.cols(),
            grid.generation()
        ))
    );
    println!("{}", GridFormatter::format_grid_with_coords(&grid));

    println!("Grid Statistics:");
    println!("  Living cells: {}", grid.living_count());
    println!("  Density: {:.1}%", grid.density() * 100.0);

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration files..."));

    let config_dir = directory.join("config");
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)
        .with_context(|| format!("Failed to create directory {}", examples_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let mut glider_config = Settings::default();
    glider_config.pattern.kind = Pattern::Glider;
    glider_config.grid.rows = 20;
    glider_config.grid.cols = 20;
    glider_config.display.generations = 80;
    glider_config.to_file(examples_dir.join("glider.yaml"))?;

    let mut blinker_config = Settings::default();
    blinker_config.pattern.kind = Pattern::Blinker;
    blinker_config.pattern.offset_row = 2;
    blinker_config.pattern.offset_col = 2;
    blinker_config.grid.rows = 7;
    blinker_config.grid.cols = 7;
    blinker_config.display.generations = 10;
    blinker_config.display.delay_ms = 300;
    blinker_config.to_file(examples_dir.join("blinker.yaml"))?;

    let mut seeded_config = Settings::default();
    seeded_config.pattern.density = 0.3;
    seeded_config.pattern.seed = Some(42);
    seeded_config.to_file(examples_dir.join("seeded_random.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
