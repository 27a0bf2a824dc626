//! The 9×9 Sudoku grid and its placement-legality predicate.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Digit, House, Position};

/// A 9×9 grid of digits with empty cells.
///
/// Two lifecycle states share this type: a *complete* grid (every cell
/// filled, every house a permutation of 1-9) as produced by the solution
/// builder, and a *puzzle* (a complete grid with a subset of cells blanked
/// out). The grid is owned wholesale by whichever session holds it and is
/// replaced, not patched, across sessions.
///
/// Serializes as a 9×9 array of small integers with `0` for empty cells,
/// the layout the dashboard persists.
///
/// # Examples
///
/// ```
/// use deskplay_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// let five = Digit::new(5).unwrap();
/// grid.set(Position::new(0, 0), five);
///
/// // 5 now collides along the first row, column, and block.
/// assert!(!grid.is_placement_allowed(Position::new(0, 8), five));
/// assert!(!grid.is_placement_allowed(Position::new(8, 0), five));
/// assert!(!grid.is_placement_allowed(Position::new(2, 2), five));
/// assert!(grid.is_placement_allowed(Position::new(3, 3), five));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitGrid {
    cells: [[Option<Digit>; 9]; 9],
}

impl DigitGrid {
    /// Total number of cells.
    pub const CELL_COUNT: usize = 81;

    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Builds a grid from a 9×9 array of numeric values, `0` meaning empty.
    ///
    /// This is the boundary constructor for data coming back from storage;
    /// any value above 9 is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GridValueError`] naming the first offending cell.
    pub fn from_values(values: [[u8; 9]; 9]) -> Result<Self, GridValueError> {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let value = values[usize::from(pos.row())][usize::from(pos.col())];
            if value == 0 {
                continue;
            }
            let digit = Digit::new(value).ok_or(GridValueError {
                value,
                row: pos.row(),
                col: pos.col(),
            })?;
            grid.set(pos, digit);
        }
        Ok(grid)
    }

    /// Returns the grid as a 9×9 array of numeric values, `0` for empty.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::ALL {
            values[usize::from(pos.row())][usize::from(pos.col())] =
                self.get(pos).map_or(0, Digit::get);
        }
        values
    }

    /// Returns the digit at `pos`, or `None` for an empty cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Places `digit` at `pos`, overwriting any previous digit.
    pub fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = None;
    }

    /// Returns true when every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Counts the filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Counts the empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        Self::CELL_COUNT - self.filled_count()
    }

    /// Returns the first empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.get(pos).is_none())
    }

    /// Checks whether `digit` can be placed at `pos` without duplicating
    /// the digit in the same row, the same column, or the same 3×3 block.
    ///
    /// All 27 cells of the three houses through `pos` are scanned, the
    /// target cell included, so the query is intended for empty target
    /// cells — the only way the solution builder and the play session use
    /// it.
    #[must_use]
    pub fn is_placement_allowed(&self, pos: Position, digit: Digit) -> bool {
        for i in 0..9 {
            if self.get(Position::new(pos.row(), i)) == Some(digit)
                || self.get(Position::new(i, pos.col())) == Some(digit)
            {
                return false;
            }
        }
        let origin = pos.block_origin();
        for dr in 0..3 {
            for dc in 0..3 {
                let cell = Position::new(origin.row() + dr, origin.col() + dc);
                if self.get(cell) == Some(digit) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns true when `house` holds each digit 1-9 exactly once.
    #[must_use]
    pub fn house_is_complete(&self, house: House) -> bool {
        let mut seen = [false; 9];
        for pos in house.positions() {
            let Some(digit) = self.get(pos) else {
                return false;
            };
            let slot = &mut seen[usize::from(digit.get() - 1)];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    /// Returns true when the grid is completely filled and all 27 houses
    /// hold the digits 1-9 exactly once.
    ///
    /// This accepts any valid completion, not only the one a puzzle was
    /// carved from, which handles multi-solution puzzles correctly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        House::ALL.iter().all(|&house| self.house_is_complete(house))
    }
}

/// A numeric cell value outside 0-9 was supplied at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid cell value {value} at ({row}, {col}); expected 0-9")]
pub struct GridValueError {
    /// The offending value.
    pub value: u8,
    /// Row of the offending cell.
    pub row: u8,
    /// Column of the offending cell.
    pub col: u8,
}

/// Error parsing a [`DigitGrid`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cells, got {count}")]
    WrongLength {
        /// Number of cell characters found.
        count: usize,
    },
    /// A character was not a digit or one of `.`, `_`, `0`.
    #[display("invalid cell character {character:?} at cell {index}")]
    InvalidCell {
        /// The offending character.
        character: char,
        /// Linear cell index at which it appeared.
        index: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    /// Parses a grid from 81 cell characters: digits `1`-`9` for filled
    /// cells, `.` / `_` / `0` for empty. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if count == 81 {
                count += 1;
                break;
            }
            match c {
                '.' | '_' | '0' => {}
                _ => {
                    let digit = c
                        .to_digit(10)
                        .and_then(|d| Digit::new(u8::try_from(d).unwrap_or(0)))
                        .ok_or(GridParseError::InvalidCell {
                            character: c,
                            index: count,
                        })?;
                    grid.set(Position::ALL[count], digit);
                }
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::WrongLength { count });
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    /// Formats the grid as nine rows, cells grouped in threes, `_` for
    /// empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

impl Serialize for DigitGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_values().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DigitGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = <[[u8; 9]; 9]>::deserialize(deserializer)?;
        Self::from_values(values).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    #[test]
    fn test_set_get_clear() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(4, 4);
        assert_eq!(grid.get(pos), None);

        grid.set(pos, Digit::D7);
        assert_eq!(grid.get(pos), Some(Digit::D7));
        assert_eq!(grid.filled_count(), 1);

        grid.clear(pos);
        assert_eq!(grid.get(pos), None);
        assert_eq!(grid.empty_count(), 81);
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = DigitGrid::new();
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));

        for col in 0..9 {
            grid.set(Position::new(0, col), Digit::ALL[usize::from(col)]);
        }
        assert_eq!(grid.first_empty(), Some(Position::new(1, 0)));

        let solved: DigitGrid = SOLVED.parse().unwrap();
        assert_eq!(solved.first_empty(), None);
    }

    #[test]
    fn test_placement_rejected_in_row_column_and_block() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(3, 4), Digit::D6);

        // Same row, same column, same block.
        assert!(!grid.is_placement_allowed(Position::new(3, 0), Digit::D6));
        assert!(!grid.is_placement_allowed(Position::new(8, 4), Digit::D6));
        assert!(!grid.is_placement_allowed(Position::new(5, 5), Digit::D6));

        // Different digit, or unrelated cell.
        assert!(grid.is_placement_allowed(Position::new(3, 0), Digit::D5));
        assert!(grid.is_placement_allowed(Position::new(6, 0), Digit::D6));
    }

    #[test]
    fn test_placement_in_partially_solved_grid() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        let pos = Position::new(0, 2);
        let digit = grid.get(pos).unwrap();
        grid.clear(pos);

        assert!(grid.is_placement_allowed(pos, digit));
        for other in Digit::ALL {
            if other != digit {
                assert!(
                    !grid.is_placement_allowed(pos, other),
                    "digit {other} should collide"
                );
            }
        }
    }

    #[test]
    fn test_solved_grid_passes_all_27_houses() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        assert!(grid.is_full());
        assert!(grid.is_solved());
        for house in House::ALL {
            assert!(grid.house_is_complete(house), "{house:?}");
        }
    }

    #[test]
    fn test_duplicate_breaks_solved_check() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        // Overwrite one cell with its row neighbour's digit.
        let neighbour = grid.get(Position::new(0, 1)).unwrap();
        grid.set(Position::new(0, 0), neighbour);
        assert!(!grid.is_solved());
        assert!(!grid.house_is_complete(House::Row(0)));
    }

    #[test]
    fn test_incomplete_grid_is_not_solved() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        grid.clear(Position::new(8, 8));
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        let mut values = [[0_u8; 9]; 9];
        values[2][7] = 10;
        assert_eq!(
            DigitGrid::from_values(values),
            Err(GridValueError {
                value: 10,
                row: 2,
                col: 7
            })
        );
    }

    #[test]
    fn test_values_round_trip() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        assert_eq!(DigitGrid::from_values(grid.to_values()).unwrap(), grid);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(GridParseError::WrongLength { count: 3 })
        );
        assert_eq!(
            "12a".parse::<DigitGrid>(),
            Err(GridParseError::InvalidCell {
                character: 'a',
                index: 2
            })
        );
    }

    #[test]
    fn test_serde_encoding_matches_dashboard_layout() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Digit::D5);
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.starts_with("[[5,0,0,0,0,0,0,0,0],"));

        let round_tripped: DigitGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(round_tripped, grid);

        // Out-of-range values are rejected at the boundary.
        let bad = json.replacen('5', "12", 1);
        assert!(serde_json::from_str::<DigitGrid>(&bad).is_err());
    }

    fn grid_strategy() -> impl Strategy<Value = DigitGrid> {
        proptest::collection::vec(0_u8..=9, 81).prop_map(|values| {
            let mut grid = DigitGrid::new();
            for (i, value) in values.into_iter().enumerate() {
                if let Some(digit) = Digit::new(value) {
                    grid.set(Position::ALL[i], digit);
                }
            }
            grid
        })
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(grid in grid_strategy()) {
            let round_tripped: DigitGrid = grid.to_string().parse().unwrap();
            prop_assert_eq!(round_tripped, grid);
        }

        #[test]
        fn prop_placement_matches_brute_force(grid in grid_strategy(), index in 0_usize..81, value in 1_u8..=9) {
            let pos = Position::ALL[index];
            let digit = Digit::new(value).unwrap();

            let row_hit = (0..9).any(|c| grid.get(Position::new(pos.row(), c)) == Some(digit));
            let col_hit = (0..9).any(|r| grid.get(Position::new(r, pos.col())) == Some(digit));
            let origin = pos.block_origin();
            let block_hit = (0..3).any(|dr| {
                (0..3).any(|dc| {
                    grid.get(Position::new(origin.row() + dr, origin.col() + dc)) == Some(digit)
                })
            });

            prop_assert_eq!(
                grid.is_placement_allowed(pos, digit),
                !(row_hit || col_hit || block_hit)
            );
        }

        #[test]
        fn prop_serde_round_trip(grid in grid_strategy()) {
            let json = serde_json::to_string(&grid).unwrap();
            let round_tripped: DigitGrid = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(round_tripped, grid);
        }
    }
}
