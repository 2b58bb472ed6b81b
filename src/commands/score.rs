//! Word scoring command
//!
//! Scores a word and breaks the total down letter by letter.

use crate::core::{Letter, Word};
use crate::error::Result;

/// Result of scoring a word
pub struct ScoreReport {
    pub word: Word,
    pub letters: Vec<(Letter, u32)>,
    pub total: u32,
}

/// Score a word with a per-letter breakdown
///
/// # Errors
///
/// Returns `InvalidInput` if the word is empty or not purely alphabetic.
pub fn score_breakdown(input: &str) -> Result<ScoreReport> {
    let word = Word::new(input)?;
    let letters: Vec<(Letter, u32)> = word.letters().map(|l| (l, l.score())).collect();
    let total = letters.iter().map(|&(_, score)| score).sum();

    Ok(ScoreReport {
        word,
        letters,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_sums_to_word_score() {
        let report = score_breakdown("guardian").unwrap();

        assert_eq!(report.word.text(), "GUARDIAN");
        assert_eq!(report.total, 10);
        assert_eq!(report.total, report.word.score());
        assert_eq!(report.letters.len(), 8);
        assert_eq!(report.letters[0], (Letter::new('G').unwrap(), 2));
    }

    #[test]
    fn breakdown_rejects_invalid_word() {
        assert!(score_breakdown("").is_err());
        assert!(score_breakdown("abc-def").is_err());
    }
}
