//! Seed patterns: fixed shapes and random fills
//!
//! Every function here returns plain coordinate lists. Nothing is checked
//! against a grid; `Grid::new` drops whatever lands outside it.

use super::Cell;
use itertools::iproduct;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const GLIDER: [Cell; 5] = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
const BLINKER: [Cell; 3] = [(1, 0), (1, 1), (1, 2)];
const BLOCK: [Cell; 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Seed patterns the simulation can start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Glider,
    Blinker,
    Block,
    Random,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pattern::Glider => "glider",
            Pattern::Blinker => "blinker",
            Pattern::Block => "block",
            Pattern::Random => "random",
        };
        write!(f, "{}", name)
    }
}

/// Shift a shape by an offset. Cells whose coordinates overflow are off any grid and dropped.
fn translate(shape: &[Cell], offset_row: isize, offset_col: isize) -> Vec<Cell> {
    shape
        .iter()
        .filter_map(|&(r, c)| Some((r.checked_add(offset_row)?, c.checked_add(offset_col)?)))
        .collect()
}

/// Classic glider, heading down and to the right by one cell every 4 generations
pub fn glider(offset_row: isize, offset_col: isize) -> Vec<Cell> {
    translate(&GLIDER, offset_row, offset_col)
}

/// Horizontal blinker, period 2
pub fn blinker(offset_row: isize, offset_col: isize) -> Vec<Cell> {
    translate(&BLINKER, offset_row, offset_col)
}

/// 2x2 block still life
pub fn block(offset_row: isize, offset_col: isize) -> Vec<Cell> {
    translate(&BLOCK, offset_row, offset_col)
}

/// Pick each cell of a `rows x cols` area independently with probability `density`.
///
/// `density <= 0.0` yields no cells and `density >= 1.0` yields all of them.
pub fn random_cells<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    density: f64,
    rng: &mut R,
) -> Vec<Cell> {
    iproduct!(0..rows, 0..cols)
        .filter(|_| rng.gen::<f64>() < density)
        .map(|(r, c)| (r as isize, c as isize))
        .collect()
}

/// Random generator for seeding patterns
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(x) => ChaCha8Rng::seed_from_u64(x),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_glider_offsets() {
        assert_eq!(glider(0, 0), GLIDER.to_vec());
        assert_eq!(glider(10, -2), vec![(11, 0), (12, 1), (13, -1), (13, 0), (13, 1)]);
    }

    #[test]
    fn test_overflowing_offsets_drop_cells() {
        // Only the glider's top cell (base row 1) stays representable
        assert_eq!(glider(isize::MAX - 1, 0), vec![(isize::MAX, 2)]);
        assert!(block(0, isize::MAX).iter().all(|&(_, c)| c == isize::MAX));
        assert_eq!(block(0, isize::MAX).len(), 2);
        assert_eq!(
            blinker(isize::MIN, 0),
            vec![(isize::MIN + 1, 0), (isize::MIN + 1, 1), (isize::MIN + 1, 2)]
        );
    }

    #[test]
    fn test_random_zero_density() {
        let mut rng = seeded_rng(Some(7));
        assert!(random_cells(10, 10, 0.0, &mut rng).is_empty());
        assert!(random_cells(10, 10, -0.5, &mut rng).is_empty());
    }

    #[test]
    fn test_random_full_density() {
        let mut rng = seeded_rng(Some(7));
        let cells = random_cells(4, 6, 1.0, &mut rng);
        assert_eq!(cells.len(), 24);

        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(unique.len(), 24);
        assert!(cells.iter().all(|&(r, c)| (0..4).contains(&r) && (0..6).contains(&c)));

        assert_eq!(random_cells(3, 3, 2.5, &mut rng).len(), 9);
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let a = random_cells(30, 30, 0.3, &mut seeded_rng(Some(42)));
        let b = random_cells(30, 30, 0.3, &mut seeded_rng(Some(42)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_density_is_roughly_respected() {
        let cells = random_cells(100, 100, 0.25, &mut seeded_rng(Some(1)));
        assert!(cells.len() > 2000 && cells.len() < 3000);
    }

    #[test]
    fn test_pattern_names() {
        assert_eq!(Pattern::Glider.to_string(), "glider");
        assert_eq!(Pattern::Random.to_string(), "random");
    }
}
