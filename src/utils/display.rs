//! Display and output formatting utilities

use crate::game_of_life::{Cell, Grid};
use serde::Serialize;

/// ANSI sequence that clears the terminal and moves the cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const ALIVE: char = '█';
const DEAD: char = ' ';

/// Snapshot of one generation, used for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub generation: u64,
    pub rows: usize,
    pub cols: usize,
    pub living_count: usize,
    pub living_cells: Vec<Cell>,
}

impl Frame {
    pub fn capture(grid: &Grid) -> Self {
        Self {
            generation: grid.generation(),
            rows: grid.rows(),
            cols: grid.cols(),
            living_count: grid.living_count(),
            living_cells: grid.living_cells(),
        }
    }
}

/// Format grids for display
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid as a block of glyphs framed by `+-|` borders
    pub fn format_bordered(grid: &Grid) -> String {
        let border = format!("+{}+\n", "-".repeat(grid.cols()));
        let mut output = String::with_capacity((grid.rows() + 2) * (grid.cols() + 3));

        output.push_str(&border);
        for row in grid.iter_rows() {
            output.push('|');
            output.extend(row.iter().map(|&cell| if cell { ALIVE } else { DEAD }));
            output.push_str("|\n");
        }
        output.push_str(&border);

        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for (row, cells) in grid.iter_rows().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for &cell in cells {
                output.push_str(if cell { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Serialize the current generation as a single line of JSON
    pub fn format_json(grid: &Grid) -> serde_json::Result<String> {
        serde_json::to_string(&Frame::capture(grid))
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bordered_format() {
        let grid = Grid::new(2, 3, vec![(0, 0), (1, 2)]).unwrap();
        let expected = "+---+\n|█  |\n|  █|\n+---+\n";
        assert_eq!(GridFormatter::format_bordered(&grid), expected);
    }

    #[test]
    fn test_grid_with_coords() {
        let grid = Grid::new(3, 3, vec![(1, 1)]).unwrap();
        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··\n"));
    }

    #[test]
    fn test_json_frame() {
        let grid = Grid::new(4, 5, vec![(0, 1), (3, 4)]).unwrap();
        let json = GridFormatter::format_json(&grid).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generation"], 0);
        assert_eq!(value["rows"], 4);
        assert_eq!(value["cols"], 5);
        assert_eq!(value["living_count"], 2);
        assert_eq!(value["living_cells"], serde_json::json!([[0, 1], [3, 4]]));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Blue);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));

        assert!(ColorOutput::warning("careful").contains("careful"));
        assert!(ColorOutput::info("note").contains("note"));
    }
}
