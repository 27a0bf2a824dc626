//! Player marks for the 3×3 grid game.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// One of the two symbols placed on the 3×3 board.
///
/// Serializes as the bare string `"X"` or `"O"`, which is the encoding the
/// dashboard persists for each occupied cell.
///
/// # Examples
///
/// ```
/// use deskplay_core::Mark;
///
/// assert_eq!(Mark::X.opponent(), Mark::O);
/// assert_eq!(Mark::O.to_string(), "O");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The cross mark. The human player holds `X` by convention.
    X,
    /// The nought mark. The automated opponent holds `O` by convention.
    O,
}

impl Mark {
    /// Returns the other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Returns the single-character form, `'X'` or `'O'`.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Self::X),
            'O' | 'o' => Some(Self::O),
            _ => None,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
