//! Carving playable puzzles out of complete solutions.

use deskplay_core::{DigitGrid, Position};
use rand::{Rng, RngExt as _};

/// Returns a copy of `solution` with `blanks` randomly chosen cells
/// cleared.
///
/// Cells are picked uniformly at random; a pick landing on an
/// already-empty cell is retried, so exactly `blanks` additional cells end
/// up empty and every surviving cell keeps its value from `solution`.
///
/// No check is made that the result remains solvable, let alone uniquely
/// solvable — carving is purely positional.
///
/// # Panics
///
/// Panics if `blanks` exceeds the number of filled cells in `solution`.
#[must_use]
pub fn carve_puzzle<R: Rng + ?Sized>(
    solution: &DigitGrid,
    blanks: usize,
    rng: &mut R,
) -> DigitGrid {
    assert!(
        blanks <= solution.filled_count(),
        "cannot blank {blanks} cells, only {} are filled",
        solution.filled_count()
    );
    let mut puzzle = solution.clone();
    let mut remaining = blanks;
    while remaining > 0 {
        let pos = Position::new(rng.random_range(0..9), rng.random_range(0..9));
        if puzzle.get(pos).is_some() {
            puzzle.clear(pos);
            remaining -= 1;
        }
    }
    puzzle
}

#[cfg(test)]
mod tests {
    use deskplay_core::Position;
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use crate::solution::generate_solution;

    use super::*;

    #[test]
    fn test_exact_blank_count_and_value_preservation() {
        let mut rng = Pcg64::from_seed([3; 32]);
        let solution = generate_solution(&mut rng);
        let puzzle = carve_puzzle(&solution, 40, &mut rng);

        assert_eq!(puzzle.empty_count(), 40);
        assert_eq!(puzzle.filled_count(), 41);
        for pos in Position::ALL {
            if let Some(digit) = puzzle.get(pos) {
                assert_eq!(Some(digit), solution.get(pos));
            }
        }
    }

    #[test]
    fn test_zero_blanks_is_identity() {
        let mut rng = Pcg64::from_seed([4; 32]);
        let solution = generate_solution(&mut rng);
        assert_eq!(carve_puzzle(&solution, 0, &mut rng), solution);
    }

    #[test]
    fn test_carving_everything_empties_the_grid() {
        let mut rng = Pcg64::from_seed([5; 32]);
        let solution = generate_solution(&mut rng);
        let puzzle = carve_puzzle(&solution, 81, &mut rng);
        assert_eq!(puzzle.empty_count(), 81);
    }

    #[test]
    #[should_panic(expected = "cannot blank")]
    fn test_rejects_more_blanks_than_filled_cells() {
        let mut rng = Pcg64::from_seed([6; 32]);
        let solution = generate_solution(&mut rng);
        let _ = carve_puzzle(&solution, 82, &mut rng);
    }

    proptest! {
        #[test]
        fn prop_any_blank_count_is_honored(blanks in 0_usize..=81, seed in proptest::array::uniform32(0_u8..)) {
            let mut rng = Pcg64::from_seed(seed);
            let solution = generate_solution(&mut rng);
            let puzzle = carve_puzzle(&solution, blanks, &mut rng);
            prop_assert_eq!(puzzle.empty_count(), blanks);
        }
    }
}
