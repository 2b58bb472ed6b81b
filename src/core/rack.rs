//! Player racks and their multiset view

use super::letter::{ALPHABET_SIZE, Letter};
use crate::error::{InputError, Result};
use std::fmt;

/// Number of tiles on a rack
pub const RACK_SIZE: usize = 7;

/// Per-letter tile counts
///
/// The multiset view of a rack. It is `Copy`, so every validation works on
/// its own counters and the rack itself is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    /// Count the letters in an iterator
    pub fn from_letters(letters: impl IntoIterator<Item = Letter>) -> Self {
        let mut counts = Self::default();
        for letter in letters {
            counts.0[letter.index()] += 1;
        }
        counts
    }

    /// How many of `letter` are available
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> u8 {
        self.0[letter.index()]
    }

    /// Use up one `letter`
    ///
    /// Returns `false` without changing anything if none are left.
    #[inline]
    pub fn take(&mut self, letter: Letter) -> bool {
        let slot = &mut self.0[letter.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Total number of tiles counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| usize::from(n)).sum()
    }
}

/// Seven tiles drawn for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rack {
    tiles: [Letter; RACK_SIZE],
}

impl Rack {
    /// Create a rack from exactly seven letters
    ///
    /// # Errors
    /// Returns `InputError::WrongRackSize` for any other number of letters.
    pub fn new(letters: impl IntoIterator<Item = Letter>) -> Result<Self> {
        let letters: Vec<Letter> = letters.into_iter().collect();
        let actual = letters.len();
        let tiles: [Letter; RACK_SIZE] = letters
            .try_into()
            .map_err(|_| InputError::WrongRackSize {
                expected: RACK_SIZE,
                actual,
            })?;
        Ok(Self { tiles })
    }

    /// Parse a rack such as `"AEILMNT"`
    ///
    /// Whitespace between tiles is ignored, so `"A E I L M N T"` also works.
    ///
    /// # Errors
    /// Returns `InvalidInput` if any tile is not a letter or the count is not 7.
    ///
    /// # Examples
    /// ```
    /// use scrabble_rack::core::Rack;
    ///
    /// let rack = Rack::parse("aeilmnt").unwrap();
    /// assert_eq!(rack.to_string(), "AEILMNT");
    /// assert!(Rack::parse("ABC").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let letters = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Letter::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(letters)
    }

    pub(crate) const fn from_tiles(tiles: [Letter; RACK_SIZE]) -> Self {
        Self { tiles }
    }

    /// The tiles in draw order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Letter; RACK_SIZE] {
        &self.tiles
    }

    /// A fresh multiset copy of the tiles
    #[must_use]
    pub fn counts(&self) -> LetterCounts {
        LetterCounts::from_letters(self.tiles)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn rack_parse_valid() {
        let rack = Rack::parse("AEILMNT").unwrap();
        assert_eq!(rack.tiles().len(), RACK_SIZE);
        assert_eq!(rack.to_string(), "AEILMNT");
    }

    #[test]
    fn rack_parse_ignores_whitespace_and_case() {
        let rack = Rack::parse("a e i l m n t").unwrap();
        assert_eq!(rack, Rack::parse("AEILMNT").unwrap());
    }

    #[test]
    fn rack_parse_wrong_size() {
        assert!(matches!(
            Rack::parse("AEIL"),
            Err(Error::InvalidInput(InputError::WrongRackSize {
                expected: 7,
                actual: 4
            }))
        ));
        assert!(Rack::parse("AEILMNTS").is_err());
        assert!(Rack::parse("").is_err());
    }

    #[test]
    fn rack_parse_non_letter() {
        assert!(matches!(
            Rack::parse("AEI?MNT"),
            Err(Error::InvalidInput(InputError::NonAlphabetic('?')))
        ));
    }

    #[test]
    fn rack_counts_duplicates() {
        let rack = Rack::parse("EEEABCD").unwrap();
        let counts = rack.counts();
        assert_eq!(counts.get(letter('E')), 3);
        assert_eq!(counts.get(letter('A')), 1);
        assert_eq!(counts.get(letter('Z')), 0);
        assert_eq!(counts.total(), RACK_SIZE);
    }

    #[test]
    fn take_decrements_until_empty() {
        let mut counts = LetterCounts::from_letters([letter('N')]);
        assert!(counts.take(letter('N')));
        assert!(!counts.take(letter('N')));
        assert_eq!(counts.get(letter('N')), 0);
    }

    #[test]
    fn counts_are_independent_copies() {
        let rack = Rack::parse("AEILMNT").unwrap();
        let mut first = rack.counts();
        assert!(first.take(letter('A')));

        let second = rack.counts();
        assert_eq!(second.get(letter('A')), 1);
        assert_eq!(rack.to_string(), "AEILMNT");
    }
}
