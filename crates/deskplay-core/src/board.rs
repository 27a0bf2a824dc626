//! The 3×3 game board, its win lines, and outcome detection.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::Mark;

/// The 8 cell-index triples that decide the game: the 3 rows top to
/// bottom, the 3 columns left to right, then the two diagonals.
///
/// Outcome detection scans the lines in exactly this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of inspecting a board for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Empty cells remain and no line is complete.
    InProgress,
    /// Every cell is occupied and no line is complete.
    Draw,
    /// The contained mark owns a complete line.
    Win(Mark),
}

impl Outcome {
    /// Returns true for [`Outcome::Draw`] and [`Outcome::Win`].
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A 3×3 board stored as 9 cells in row-major order.
///
/// `Board` is plain value data. Hypothetical positions during search are
/// produced with [`Board::with_mark`], which copies the board instead of
/// mutating shared state, so sibling branches never observe each other's
/// moves.
///
/// Serializes as a 9-element array of `"X"` / `"O"` / `null`, the layout
/// the dashboard persists.
///
/// # Examples
///
/// ```
/// use deskplay_core::{Board, Mark, Outcome};
///
/// let board: Board = "XXX OO. ...".parse().unwrap();
/// assert_eq!(board.outcome(), Outcome::Win(Mark::X));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELL_COUNT: usize = 9;

    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// Creates a board from raw cells in row-major order.
    #[must_use]
    pub const fn from_cells(cells: [Option<Mark>; 9]) -> Self {
        Self { cells }
    }

    /// Returns the raw cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Option<Mark>; 9] {
        &self.cells
    }

    /// Returns the contents of the cell at `index` (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 9 or greater.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// Returns true when the cell at `index` is unoccupied.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 9 or greater.
    #[must_use]
    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Returns true when no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the indices of the empty cells in increasing order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    /// Counts the cells holding `mark`.
    #[must_use]
    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(mark)).count()
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the cell is already occupied.
    #[must_use = "with_mark returns a new board; the original is unchanged"]
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        assert!(
            self.cells[index].is_none(),
            "cell {index} is already occupied"
        );
        let mut next = *self;
        next.cells[index] = Some(mark);
        next
    }

    /// Returns the mark owning `line`, if all three of its cells hold the
    /// same mark.
    #[must_use]
    pub fn line_winner(&self, line: [usize; 3]) -> Option<Mark> {
        let first = self.cells[line[0]]?;
        (self.cells[line[1]] == Some(first) && self.cells[line[2]] == Some(first)).then_some(first)
    }

    /// Inspects the board for a finished game.
    ///
    /// The win lines are scanned in the fixed [`WIN_LINES`] order and the
    /// first complete line decides the winner. On a board reached by
    /// alternating play at most one mark can ever complete a line, so the
    /// order cannot change the result; it is fixed anyway so that synthetic
    /// positions evaluate deterministically.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        for line in WIN_LINES {
            if let Some(mark) = self.line_winner(line) {
                return Outcome::Win(mark);
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

/// Error parsing a [`Board`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The input did not contain exactly 9 cell characters.
    #[display("expected 9 cells, got {count}")]
    WrongLength {
        /// Number of cell characters found.
        count: usize,
    },
    /// A character was not one of `X`, `O`, `.`, `_`.
    #[display("invalid cell character {character:?} at cell {index}")]
    InvalidCell {
        /// The offending character.
        character: char,
        /// Cell index at which it appeared.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses a board from 9 cell characters: `X`, `O` (case-insensitive)
    /// or `.` / `_` for empty. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 9];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if count == 9 {
                count += 1;
                break;
            }
            cells[count] = match c {
                '.' | '_' => None,
                _ => Some(Mark::from_char(c).ok_or(BoardParseError::InvalidCell {
                    character: c,
                    index: count,
                })?),
            };
            count += 1;
        }
        if count != 9 {
            return Err(BoardParseError::WrongLength { count });
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.map_or('.', Mark::as_char))?;
            if i % 3 == 2 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
