//! Sudoku puzzle construction for the dashboard's game widget.
//!
//! Generation happens in two stages: [`generate_solution`] builds a
//! complete grid by randomized backtracking, then [`carve_puzzle`] blanks
//! a configured number of cells to leave a playable problem. The
//! [`PuzzleGenerator`] facade ties the stages together behind a
//! reproducible [`PuzzleSeed`].
//!
//! # Examples
//!
//! ```
//! use deskplay_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(puzzle.problem.empty_count(), 40);
//!
//! // The printed seed reproduces the exact same puzzle.
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again.problem, puzzle.problem);
//! ```

use deskplay_core::DigitGrid;

pub mod carve;
pub mod seed;
pub mod solution;

pub use self::{
    carve::carve_puzzle,
    seed::{PuzzleSeed, SeedParseError},
    solution::generate_solution,
};

/// Number of cells blanked by default, the dashboard's stock difficulty.
pub const DEFAULT_BLANK_COUNT: usize = 40;

/// A generated puzzle together with its solution and the seed that
/// reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid with the configured number of cells blanked.
    pub problem: DigitGrid,
    /// The complete grid the problem was carved from.
    pub solution: DigitGrid,
    /// The seed that deterministically reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates Sudoku puzzles by building a complete solution and carving
/// cells out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGenerator {
    blank_count: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator blanking [`DEFAULT_BLANK_COUNT`] cells.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blank_count: DEFAULT_BLANK_COUNT,
        }
    }

    /// Sets the number of cells to blank out of the 81-cell solution.
    ///
    /// # Panics
    ///
    /// Panics if `blank_count` exceeds 81.
    #[must_use]
    pub const fn with_blank_count(mut self, blank_count: usize) -> Self {
        assert!(blank_count <= DigitGrid::CELL_COUNT);
        self.blank_count = blank_count;
        self
    }

    /// Returns the configured number of blanked cells.
    #[must_use]
    pub const fn blank_count(&self) -> usize {
        self.blank_count
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// Each call yields a different puzzle; pick up the seed from the
    /// result to regenerate a specific one.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and blank count always reproduce the same problem
    /// and solution.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = generate_solution(&mut rng);
        let problem = carve_puzzle(&solution, self.blank_count, &mut rng);
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}
