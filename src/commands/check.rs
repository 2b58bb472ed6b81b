//! Rack check command
//!
//! Reports whether a word can be played from a given rack.

use crate::core::{Rack, Word};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::validator::can_form;

/// Result of checking a word against a rack
pub struct CheckReport {
    pub rack: Rack,
    pub word: Word,
    pub on_rack: bool,
    pub in_dictionary: bool,
    pub score: u32,
}

impl CheckReport {
    /// A word is playable when the rack can spell it and the dictionary knows it
    #[must_use]
    pub const fn playable(&self) -> bool {
        self.on_rack && self.in_dictionary
    }
}

/// Check `word` against the seven-letter `rack`
///
/// # Errors
///
/// Returns `InvalidInput` if the rack is not seven letters or the word is
/// not purely alphabetic.
pub fn check_word(rack: &str, word: &str, dictionary: &Dictionary) -> Result<CheckReport> {
    let rack = Rack::parse(rack)?;
    let word = Word::new(word)?;

    Ok(CheckReport {
        on_rack: can_form(&rack, &word),
        in_dictionary: dictionary.contains(&word),
        score: word.score(),
        rack,
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_lines(["mint", "lime", "aim", "zoo", "nine"], 7)
    }

    #[test]
    fn playable_word() {
        let report = check_word("AEILMNT", "mint", &dictionary()).unwrap();
        assert!(report.on_rack);
        assert!(report.in_dictionary);
        assert!(report.playable());
        assert_eq!(report.score, 6);
    }

    #[test]
    fn word_missing_tiles() {
        let report = check_word("AEILMNT", "nine", &dictionary()).unwrap();
        assert!(!report.on_rack);
        assert!(report.in_dictionary);
        assert!(!report.playable());
    }

    #[test]
    fn word_not_in_dictionary() {
        let report = check_word("AEILMNT", "tame", &dictionary()).unwrap();
        assert!(report.on_rack);
        assert!(!report.in_dictionary);
        assert!(!report.playable());
    }

    #[test]
    fn invalid_inputs() {
        assert!(check_word("AEI", "mint", &dictionary()).is_err());
        assert!(check_word("AEILMNT", "m1nt", &dictionary()).is_err());
    }
}
