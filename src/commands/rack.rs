//! Rack drawing command
//!
//! Draws a rack and lists the words it can spell, best first.

use crate::core::{Rack, Word, assign_tiles_with};
use crate::dictionary::Dictionary;
use crate::validator::{rank_words, valid_words};
use rand::Rng;

/// Result of drawing a rack
pub struct RackReport {
    pub rack: Rack,
    /// Playable words ranked by score, truncated to the requested count
    pub words: Vec<Word>,
    pub total_valid: usize,
}

/// Draw a rack and rank its playable words
///
/// `top` limits how many words are kept; `None` keeps them all.
#[must_use]
pub fn draw_rack<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    rng: &mut R,
    top: Option<usize>,
) -> RackReport {
    let rack = assign_tiles_with(rng);
    report_for(rack, dictionary, top)
}

/// Rank the playable words for an existing rack
#[must_use]
pub fn report_for(rack: Rack, dictionary: &Dictionary, top: Option<usize>) -> RackReport {
    let mut words = rank_words(valid_words(&rack, dictionary));
    let total_valid = words.len();
    if let Some(limit) = top {
        words.truncate(limit);
    }

    RackReport {
        rack,
        words,
        total_valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::can_form;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn report_ranks_and_truncates() {
        let dictionary = Dictionary::from_lines(["mint", "lime", "aim", "zoo", "mat"], 7);
        let rack = Rack::parse("AEILMNT").unwrap();

        let report = report_for(rack, &dictionary, Some(2));
        assert_eq!(report.total_valid, 4);
        assert_eq!(report.words.len(), 2);
        assert_eq!(report.words[0].text(), "LIME");
        assert_eq!(report.words[1].text(), "MINT");
    }

    #[test]
    fn drawn_rack_words_are_all_playable() {
        let dictionary = Dictionary::builtin(7);
        let mut rng = StdRng::seed_from_u64(5);

        let report = draw_rack(&dictionary, &mut rng, None);
        assert_eq!(report.words.len(), report.total_valid);
        assert!(report.words.iter().all(|w| can_form(&report.rack, w)));
        assert!(
            report
                .words
                .windows(2)
                .all(|pair| pair[0].score() >= pair[1].score())
        );
    }
}
