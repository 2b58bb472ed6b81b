//! Word representation and word scoring

use super::letter::Letter;
use crate::error::{InputError, Result};
use std::fmt;

/// A validated, upper-case dictionary word
///
/// Every character is guaranteed to be an ASCII letter, so iterating the
/// letters never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `InvalidInput` if:
    /// - The string is empty
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use scrabble_rack::core::Word;
    ///
    /// let word = Word::new("mint").unwrap();
    /// assert_eq!(word.text(), "MINT");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("m1nt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(InputError::Empty.into());
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(InputError::NonAlphabetic(bad).into());
        }

        text.make_ascii_uppercase();
        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; words are never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters in order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text
            .bytes()
            .map(|b| Letter::from_index(usize::from(b - b'A')))
    }

    /// Sum of the letter scores
    #[must_use]
    pub fn score(&self) -> u32 {
        self.letters().map(Letter::score).sum()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Score a word given as a string
///
/// # Errors
/// Returns `InvalidInput` if the word is empty or contains anything other
/// than letters.
///
/// # Examples
/// ```
/// use scrabble_rack::core::score_word;
///
/// assert_eq!(score_word("GUARDIAN").unwrap(), 10);
/// assert_eq!(score_word("guardian").unwrap(), 10);
/// ```
pub fn score_word(input: &str) -> Result<u32> {
    Word::new(input).map(|word| word.score())
}
