//! Word list loading
//!
//! Reads a newline-delimited word list from disk into a [`Dictionary`].

use super::Dictionary;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file, keeping words of at most `max_length` letters
///
/// The file is read once; lines are trimmed, filtered by length and
/// upper-cased (see [`Dictionary::from_lines`]).
///
/// # Errors
///
/// Returns `Error::ResourceUnavailable` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use scrabble_rack::dictionary::load_dictionary;
///
/// let dict = load_dictionary("dictionary.txt", 7).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P, max_length: usize) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::from_lines(content.lines(), max_length);

    tracing::info!(
        path = %path.display(),
        max_length,
        "Loaded {} words into dictionary",
        dictionary.len()
    );

    Ok(dictionary)
}
