//! The Sudoku play session driven by the game widget.

use derive_more::IsVariant;
use deskplay_core::{Digit, DigitGrid, Position};
use deskplay_generator::GeneratedPuzzle;

use crate::GameError;

/// The state of one cell as the widget sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A cell dealt with the puzzle; cannot be changed by the player.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// An empty cell.
    Empty,
}

impl CellState {
    /// Returns the digit shown in this cell, if any.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}

/// One Sudoku play session over a generated puzzle.
///
/// The dealt (given) cells are immutable; the player fills and clears the
/// rest freely, including entries that conflict with the rules — the
/// widget mirrors the paper experience and only the solved check passes
/// judgement. Restarting replaces the whole session state with a new
/// puzzle.
///
/// # Examples
///
/// ```
/// use deskplay_game::SudokuSession;
/// use deskplay_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new().generate();
/// let session = SudokuSession::new(puzzle);
/// assert!(!session.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct SudokuSession {
    givens: DigitGrid,
    current: DigitGrid,
    solution: DigitGrid,
}

impl SudokuSession {
    /// Starts a session on a freshly generated puzzle.
    ///
    /// Every filled cell of the puzzle's problem grid becomes a given; the
    /// solution grid is retained for hints and checks.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        Self {
            current: problem.clone(),
            givens: problem,
            solution,
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        if let Some(digit) = self.givens.get(pos) {
            CellState::Given(digit)
        } else {
            match self.current.get(pos) {
                Some(digit) => CellState::Filled(digit),
                None => CellState::Empty,
            }
        }
    }

    /// Returns the grid as currently visible, givens and entries combined.
    #[must_use]
    pub fn grid(&self) -> &DigitGrid {
        &self.current
    }

    /// Returns the solution grid the puzzle was carved from.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Enters `digit` at `pos`, replacing any previous player entry.
    ///
    /// Entries are accepted even when they conflict with a row, column, or
    /// block peer; use [`SudokuSession::is_entry_consistent`] to warn
    /// before committing one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for a given cell.
    pub fn enter_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        self.ensure_not_given(pos)?;
        self.current.set(pos, digit);
        Ok(())
    }

    /// Clears the player entry at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] for a given cell.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        self.ensure_not_given(pos)?;
        self.current.clear(pos);
        Ok(())
    }

    /// Checks whether entering `digit` at the empty cell `pos` would be
    /// consistent with the current grid.
    #[must_use]
    pub fn is_entry_consistent(&self, pos: Position, digit: Digit) -> bool {
        self.current.is_placement_allowed(pos, digit)
    }

    /// Returns true when the grid is completely filled and every row,
    /// column, and block holds the digits 1-9 exactly once.
    ///
    /// Any valid completion counts, not only the generator's solution,
    /// which handles multi-solution puzzles correctly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current.is_solved()
    }

    /// Replaces the whole session state with a new puzzle, the widget's
    /// restart action.
    pub fn restart(&mut self, puzzle: GeneratedPuzzle) {
        *self = Self::new(puzzle);
    }

    fn ensure_not_given(&self, pos: Position) -> Result<(), GameError> {
        if self.givens.get(pos).is_some() {
            return Err(GameError::CannotModifyGivenCell { position: pos });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use deskplay_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn fixed_session() -> SudokuSession {
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(PuzzleSeed::from_phrase("sudoku session tests"));
        SudokuSession::new(puzzle)
    }

    fn first_empty(session: &SudokuSession) -> Position {
        Position::ALL
            .into_iter()
            .find(|&pos| session.cell(pos).is_empty())
            .expect("a fresh puzzle has empty cells")
    }

    #[test]
    fn test_givens_match_problem_layout() {
        let session = fixed_session();
        let given_count = Position::ALL
            .iter()
            .filter(|&&pos| session.cell(pos).is_given())
            .count();
        assert_eq!(given_count, 41);
        assert_eq!(session.grid().empty_count(), 40);
    }

    #[test]
    fn test_enter_and_clear_player_cell() {
        let mut session = fixed_session();
        let pos = first_empty(&session);

        session.enter_digit(pos, Digit::D3).unwrap();
        assert_eq!(session.cell(pos), CellState::Filled(Digit::D3));

        // Overwriting an entry is allowed, clearing returns to empty.
        session.enter_digit(pos, Digit::D7).unwrap();
        assert_eq!(session.cell(pos), CellState::Filled(Digit::D7));
        session.clear_cell(pos).unwrap();
        assert!(session.cell(pos).is_empty());
    }

    #[test]
    fn test_given_cells_are_protected() {
        let mut session = fixed_session();
        let pos = Position::ALL
            .into_iter()
            .find(|&pos| session.cell(pos).is_given())
            .expect("a fresh puzzle has givens");

        assert_eq!(
            session.enter_digit(pos, Digit::D1),
            Err(GameError::CannotModifyGivenCell { position: pos })
        );
        assert_eq!(
            session.clear_cell(pos),
            Err(GameError::CannotModifyGivenCell { position: pos })
        );
    }

    #[test]
    fn test_conflicting_entry_is_accepted_but_flagged() {
        let mut session = fixed_session();
        let pos = first_empty(&session);
        let conflicting = Digit::ALL
            .into_iter()
            .find(|&digit| !session.is_entry_consistent(pos, digit))
            .expect("some digit conflicts on a carved puzzle");

        assert!(session.enter_digit(pos, conflicting).is_ok());
        assert_eq!(session.cell(pos), CellState::Filled(conflicting));
    }

    #[test]
    fn test_filling_with_solution_solves() {
        let mut session = fixed_session();
        let solution = session.solution().clone();
        for pos in Position::ALL {
            if session.cell(pos).is_empty() {
                let digit = solution.get(pos).expect("solution is complete");
                session.enter_digit(pos, digit).unwrap();
            }
        }
        assert!(session.is_solved());
    }

    #[test]
    fn test_wrong_completion_is_not_solved() {
        let mut session = fixed_session();
        let solution = session.solution().clone();
        let mut wrong_once = false;
        for pos in Position::ALL {
            if session.cell(pos).is_empty() {
                let digit = solution.get(pos).expect("solution is complete");
                let entry = if wrong_once {
                    digit
                } else {
                    wrong_once = true;
                    // Any different digit breaks some house.
                    Digit::ALL
                        .into_iter()
                        .find(|&d| d != digit)
                        .expect("nine digits exist")
                };
                session.enter_digit(pos, entry).unwrap();
            }
        }
        assert!(session.grid().is_full());
        assert!(!session.is_solved());
    }

    #[test]
    fn test_restart_replaces_everything() {
        let mut session = fixed_session();
        let pos = first_empty(&session);
        session.enter_digit(pos, Digit::D5).unwrap();

        let next = PuzzleGenerator::new()
            .generate_with_seed(PuzzleSeed::from_phrase("restarted puzzle"));
        let expected = next.problem.clone();
        session.restart(next);
        assert_eq!(session.grid(), &expected);
    }
}
