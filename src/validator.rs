//! Rack validation
//!
//! Decides which dictionary words can be spelled from a rack. A word is
//! playable when each of its letters can be matched to a distinct tile, so
//! a word needing two N's is rejected by a rack holding one.

use crate::core::{Rack, Word};
use crate::dictionary::Dictionary;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;

/// Check whether `word` can be spelled with the tiles on `rack`
///
/// Works on a private copy of the rack's letter counts. The scan stops at
/// the first letter with no tile left.
///
/// # Examples
/// ```
/// use scrabble_rack::core::{Rack, Word};
/// use scrabble_rack::validator::can_form;
///
/// let rack = Rack::parse("AEILMNT").unwrap();
/// assert!(can_form(&rack, &Word::new("mint").unwrap()));
/// assert!(!can_form(&rack, &Word::new("nine").unwrap()));
/// ```
#[must_use]
pub fn can_form(rack: &Rack, word: &Word) -> bool {
    let mut remaining = rack.counts();
    word.letters().all(|letter| remaining.take(letter))
}

/// All dictionary words that can be spelled from `rack`
#[must_use]
pub fn valid_words(rack: &Rack, dictionary: &Dictionary) -> FxHashSet<Word> {
    dictionary
        .iter()
        .filter(|word| can_form(rack, word))
        .cloned()
        .collect()
}

/// Sort words by descending score, then alphabetically
#[must_use]
pub fn rank_words<I>(words: I) -> Vec<Word>
where
    I: IntoIterator<Item = Word>,
{
    let mut ranked: Vec<Word> = words.into_iter().collect();
    ranked.sort_by(|a, b| {
        Reverse(a.score())
            .cmp(&Reverse(b.score()))
            .then_with(|| a.cmp(b))
    });
    ranked
}

/// The highest-scoring playable word, if any
#[must_use]
pub fn best_word(rack: &Rack, dictionary: &Dictionary) -> Option<Word> {
    rank_words(valid_words(rack, dictionary)).into_iter().next()
}
