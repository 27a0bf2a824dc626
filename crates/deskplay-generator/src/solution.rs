//! Randomized construction of complete solution grids.

use deskplay_core::{Digit, DigitGrid};
use rand::{Rng, seq::SliceRandom as _};

/// Builds a complete solution grid in which every row, column, and 3×3
/// block holds the digits 1-9 exactly once.
///
/// Cells are filled by backtracking in row-major order, trying the nine
/// candidate digits in a freshly shuffled order per cell, so differently
/// seeded `rng`s yield different solutions. Starting from an empty grid
/// the search always completes; inner dead ends are recovered by
/// backtracking and never surface to the caller.
pub fn generate_solution<R: Rng + ?Sized>(rng: &mut R) -> DigitGrid {
    let mut grid = DigitGrid::new();
    let filled = fill(&mut grid, rng);
    debug_assert!(filled, "an empty grid is always completable");
    grid
}

/// Fills the first empty cell and recurses. On failure the cell is
/// restored to empty before the next candidate is tried, so the caller
/// always observes the grid exactly as it left it.
fn fill<R: Rng + ?Sized>(grid: &mut DigitGrid, rng: &mut R) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    let mut candidates = Digit::ALL;
    candidates.shuffle(rng);
    for digit in candidates {
        if !grid.is_placement_allowed(pos, digit) {
            continue;
        }
        grid.set(pos, digit);
        if fill(grid, rng) {
            return true;
        }
        grid.clear(pos);
    }
    false
}
