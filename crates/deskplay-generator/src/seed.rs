//! Reproducible seeds for puzzle generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated puzzle.
///
/// A seed displays as 64 lowercase hex characters and parses back from the
/// same form, so a seed printed alongside a puzzle can reproduce it later.
///
/// # Examples
///
/// ```
/// use deskplay_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily puzzle 2024-06-01");
/// let hex = seed.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// The same phrase always yields the same seed, which makes shareable
    /// puzzles like "daily puzzle" dates cheap to build.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Builds the deterministic generator state for this seed.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

/// Error parsing a [`PuzzleSeed`] from hex text.
#[derive(Debug, Clone, PartialEq, Eq, DeriveDisplay, Error)]
pub enum SeedParseError {
    /// The input was not exactly 64 characters long.
    #[display("expected 64 hex characters, got {length}")]
    WrongLength {
        /// Number of characters found.
        length: usize,
    },
    /// A character was not a hex digit.
    #[display("invalid hex character {character:?} at offset {index}")]
    InvalidHex {
        /// The offending character.
        character: char,
        /// Character offset at which it appeared.
        index: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(SeedParseError::WrongLength {
                length: s.chars().count(),
            });
        }
        let mut bytes = [0; 32];
        for (index, character) in s.chars().enumerate() {
            let Some(value) = character.to_digit(16) else {
                return Err(SeedParseError::InvalidHex { character, index });
            };
            #[expect(clippy::cast_possible_truncation)]
            let value = value as u8;
            bytes[index / 2] = (bytes[index / 2] << 4) | value;
        }
        Ok(Self(bytes))
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
