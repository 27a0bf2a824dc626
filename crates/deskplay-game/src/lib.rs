//! Widget-facing game sessions for the deskplay dashboard.
//!
//! Each dashboard widget that flips into a game view drives one of the
//! session types here:
//!
//! - [`TicTacToeMatch`] — a match against the perfect-play automated
//!   opponent, with a [`Scoreboard`] of wins and ties that survives
//!   resets.
//! - [`SudokuSession`] — play over a generated puzzle with protected
//!   given cells, free digit entry and clearing, and a solved check that
//!   accepts any valid completion.
//!
//! Sessions own all mutable game state. The underlying cores are pure:
//! they report outcomes and moves back, and the session updates its own
//! counters from those results.

pub mod error;
pub mod sudoku;
pub mod tictactoe;

pub use self::{
    error::GameError,
    sudoku::{CellState, SudokuSession},
    tictactoe::{Scoreboard, TicTacToeMatch},
};
