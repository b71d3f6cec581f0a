//! Conway's B3/S23 rule

use super::Grid;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// Return the grid after `generations` steps
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        grid.advance(generations);
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::patterns::{blinker, block, glider};

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
        assert!(!GameOfLifeRules::should_be_alive(false, 8));
    }

    #[test]
    fn test_still_life_block() {
        let cells = vec![(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut grid = Grid::new(4, 4, cells.clone()).unwrap();
        grid.next_generation();

        assert_eq!(grid.living_cells(), cells);
        assert_eq!(grid.living_count(), 4);
    }

    #[test]
    fn test_block_pattern_helper() {
        let grid = Grid::new(6, 6, block(2, 2)).unwrap();
        let evolved = GameOfLifeRules::evolve_generations(grid.clone(), 3);
        assert_eq!(evolved, grid);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = vec![(2, 1), (2, 2), (2, 3)];
        let mut grid = Grid::new(5, 5, horizontal.clone()).unwrap();

        grid.next_generation();
        assert_eq!(grid.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);

        grid.next_generation();
        assert_eq!(grid.living_cells(), horizontal);
    }

    #[test]
    fn test_blinker_pattern_helper() {
        assert_eq!(blinker(1, 1), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_glider_period() {
        let grid = Grid::new(20, 20, glider(0, 0)).unwrap();
        let evolved = GameOfLifeRules::evolve_generations(grid, 4);

        let expected = Grid::new(20, 20, glider(1, 1)).unwrap();
        assert_eq!(evolved, expected);
        assert_eq!(evolved.generation(), 4);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        // After 4 * 20 generations the glider has crossed the whole board
        let start = Grid::new(20, 20, glider(0, 0)).unwrap();
        let evolved = GameOfLifeRules::evolve_generations(start.clone(), 80);
        assert_eq!(evolved, start);
    }

    #[test]
    fn test_lonely_cells_die() {
        let mut grid = Grid::new(5, 5, vec![(0, 0), (2, 2)]).unwrap();
        grid.next_generation();
        assert!(grid.is_empty());
    }
}
