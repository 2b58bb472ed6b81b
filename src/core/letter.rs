//! Letter representation and the fixed score table

use crate::error::{InputError, Result};
use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Point value of each letter, indexed A through Z
const LETTER_SCORES: [u32; ALPHABET_SIZE] = [
    1,  // A
    3,  // B
    3,  // C
    2,  // D
    1,  // E
    4,  // F
    2,  // G
    4,  // H
    1,  // I
    8,  // J
    5,  // K
    1,  // L
    3,  // M
    1,  // N
    1,  // O
    3,  // P
    10, // Q
    1,  // R
    1,  // S
    1,  // T
    1,  // U
    4,  // V
    4,  // W
    8,  // X
    4,  // Y
    10, // Z
];

/// A single tile letter, always stored upper-case
///
/// Letters compare case-insensitively since construction normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character
    ///
    /// # Errors
    /// Returns `InputError::NonAlphabetic` unless `ch` is an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use scrabble_rack::core::Letter;
    ///
    /// assert_eq!(Letter::new('q').unwrap(), Letter::new('Q').unwrap());
    /// assert!(Letter::new('?').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_uppercase() as u8))
        } else {
            Err(InputError::NonAlphabetic(ch).into())
        }
    }

    /// Parse a string holding exactly one letter
    ///
    /// # Errors
    /// Returns `InvalidInput` if the string is empty, longer than one
    /// character, or not alphabetic.
    pub fn parse(input: &str) -> Result<Self> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(InputError::Empty.into()),
            (Some(ch), None) => Self::new(ch),
            (Some(_), Some(_)) => Err(InputError::NotSingleLetter {
                len: input.chars().count(),
            }
            .into()),
        }
    }

    /// Build a letter from its alphabet index (0 = A)
    ///
    /// # Panics
    /// Panics if `index >= 26`
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < ALPHABET_SIZE, "letter index out of range");
        Self(b'A' + index as u8)
    }

    /// Position in the alphabet (0 = A, 25 = Z)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Get the upper-case character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Point value of this letter
    #[inline]
    #[must_use]
    pub const fn score(self) -> u32 {
        LETTER_SCORES[self.index()]
    }

    /// Iterate over all 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_SIZE).map(Self::from_index)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Score a single letter given as a string
///
/// # Errors
/// Returns `InvalidInput` unless `input` is exactly one alphabetic character.
///
/// # Examples
/// ```
/// use scrabble_rack::core::score_letter;
///
/// assert_eq!(score_letter("G").unwrap(), 2);
/// assert_eq!(score_letter("z").unwrap(), 10);
/// assert!(score_letter("AB").is_err());
/// ```
pub fn score_letter(input: &str) -> Result<u32> {
    Letter::parse(input).map(Letter::score)
}
