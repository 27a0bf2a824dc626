//! Core data model for the deskplay game widgets.
//!
//! This crate provides the board and grid value types shared by the
//! automated tic-tac-toe opponent, the Sudoku generator, and the
//! widget-facing session layer.
//!
//! # Overview
//!
//! Two families of types live here:
//!
//! 1. **3×3 grid game** — [`Mark`], [`Board`], [`WIN_LINES`], and
//!    [`Outcome`]: a 9-cell board of tri-state cells with win-line
//!    scanning and terminal-state detection.
//! 2. **Sudoku** — [`Digit`], [`Position`], [`House`], and
//!    [`DigitGrid`]: a 9×9 grid with the placement-legality predicate
//!    (no duplicate in row, column, or 3×3 block) and whole-grid
//!    validation over all 27 houses.
//!
//! Both board types serialize to the plain-array encodings the dashboard
//! persists: a 9-element array of `"X"` / `"O"` / `null`, and a 9×9 array
//! of integers with `0` for empty.
//!
//! # Examples
//!
//! ```
//! use deskplay_core::{Board, Digit, DigitGrid, Mark, Outcome, Position};
//!
//! let board: Board = "XOX OXO XOX".parse().unwrap();
//! assert_eq!(board.outcome(), Outcome::Win(Mark::X));
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Digit::D1);
//! assert!(!grid.is_placement_allowed(Position::new(0, 5), Digit::D1));
//! ```

pub mod board;
pub mod digit;
pub mod grid;
pub mod house;
pub mod mark;
pub mod position;

pub use self::{
    board::{Board, BoardParseError, Outcome, WIN_LINES},
    digit::Digit,
    grid::{DigitGrid, GridParseError, GridValueError},
    house::House,
    mark::Mark,
    position::Position,
};
