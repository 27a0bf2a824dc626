//! Row, column, and block groupings of the 9×9 grid.

use crate::Position;

/// One of the 27 cell groups that must each contain the digits 1-9 exactly
/// once: a row, a column, or a 3×3 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its index (0-8, top to bottom).
    Row(u8),
    /// A column identified by its index (0-8, left to right).
    Column(u8),
    /// A 3×3 block identified by its index (0-8, row-major over blocks).
    Block(u8),
}

impl House {
    /// All 27 houses: rows, then columns, then blocks.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Block(i as u8);
            i += 1;
        }
        all
    };

    /// Returns the nine positions belonging to this house, in reading
    /// order within the house.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position(i))
    }

    fn position(self, i: u8) -> Position {
        debug_assert!(i < 9);
        match self {
            Self::Row(r) => Position::new(r, i),
            Self::Column(c) => Position::new(i, c),
            Self::Block(b) => Position::new(b / 3 * 3 + i / 3, b % 3 * 3 + i % 3),
        }
    }
}
