//! Core domain types for the word game
//!
//! Letters, words, racks and the tile bag. Everything here is pure data and
//! scoring; the only randomness is the rack draw, which takes the RNG as an
//! argument.

mod letter;
mod rack;
mod tiles;
mod word;

pub use letter::{ALPHABET_SIZE, Letter, score_letter};
pub use rack::{LetterCounts, RACK_SIZE, Rack};
pub use tiles::{TileBag, assign_tiles, assign_tiles_with};
pub use word::{Word, score_word};
