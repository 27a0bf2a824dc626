//! Errors reported by the game sessions.

use derive_more::{Display, Error};
use deskplay_core::Position;

/// An invalid operation on a game session.
///
/// All variants are caller mistakes rejected at the session boundary; the
/// underlying cores never see the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A board cell index outside 0-8 was supplied.
    #[display("cell index {index} is out of range")]
    CellOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// The addressed board cell already holds a mark.
    #[display("cell {index} is already occupied")]
    CellOccupied {
        /// Index of the occupied cell.
        index: usize,
    },
    /// The match has already been decided or drawn.
    #[display("the match is already over")]
    MatchOver,
    /// A human move was submitted while the opponent is to move.
    #[display("it is not the human player's turn")]
    NotHumanTurn,
    /// An opponent move was requested while the human is to move.
    #[display("it is not the automated opponent's turn")]
    NotOpponentTurn,
    /// The supplied board and turn cannot arise from alternating play.
    #[display("board and turn are inconsistent with alternating play")]
    InconsistentTurn,
    /// A given (dealt) Sudoku cell cannot be changed or cleared.
    #[display("cannot modify the given cell at {position}")]
    CannotModifyGivenCell {
        /// Position of the given cell.
        position: Position,
    },
}
