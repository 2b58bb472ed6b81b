//! The word dictionary
//!
//! A read-only set of words no longer than a configured maximum. Built once
//! at startup and passed by reference to everything that needs it.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::load_dictionary;

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Default maximum word length; a rack can never spell anything longer
pub const DEFAULT_MAX_LENGTH: usize = crate::core::RACK_SIZE;

/// Set of playable words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
    max_length: usize,
}

impl Dictionary {
    /// Build a dictionary from raw word-list lines
    ///
    /// Lines are trimmed, then anything empty or longer than `max_length`
    /// is dropped. Entries that are not purely alphabetic are skipped.
    /// Survivors are upper-cased and deduplicated.
    ///
    /// # Examples
    /// ```
    /// use scrabble_rack::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_lines(["mint", " Lime ", "", "MINT", "elephant"], 7);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains_str("lime"));
    /// assert!(!dict.contains_str("elephant"));
    /// ```
    pub fn from_lines<'a, I>(lines: I, max_length: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut skipped = 0usize;
        let words = lines
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && line.chars().count() <= max_length)
            .filter_map(|line| match Word::new(line) {
                Ok(word) => Some(word),
                Err(e) => {
                    tracing::debug!(entry = line, error = %e, "skipping dictionary entry");
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            tracing::debug!(skipped, "skipped non-alphabetic dictionary entries");
        }

        Self { words, max_length }
    }

    /// Dictionary built from the embedded word list
    #[must_use]
    pub fn builtin(max_length: usize) -> Self {
        Self::from_lines(WORDS.iter().copied(), max_length)
    }

    /// Check if a word is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Check a raw string, ignoring case
    ///
    /// Returns `false` for anything that is not a valid word.
    #[must_use]
    pub fn contains_str(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains(&w))
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The length filter this dictionary was built with
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::collections::hash_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
