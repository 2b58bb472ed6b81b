//! Runtime configuration
//!
//! Gathers the dictionary source, word length limit and RNG seed that the
//! CLI collects from flags and environment variables.

use crate::dictionary::{DEFAULT_MAX_LENGTH, Dictionary, load_dictionary};
use anyhow::{Context, Result, ensure};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::path::PathBuf;

/// Default word list path, relative to the working directory
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

/// Keyword selecting the embedded word list
pub const BUILTIN_KEYWORD: &str = "builtin";

/// Longest word length the loader accepts
pub const MAX_LENGTH_LIMIT: usize = 15;

/// Where the word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The list compiled into the binary
    Builtin,
    /// A newline-delimited file on disk
    File(PathBuf),
}

impl DictionarySource {
    /// Interpret a `--dictionary` argument
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case(BUILTIN_KEYWORD) {
            Self::Builtin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl Default for DictionarySource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_DICTIONARY_PATH))
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "{BUILTIN_KEYWORD}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Settings for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dictionary: DictionarySource,
    pub max_length: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: DictionarySource::default(),
            max_length: DEFAULT_MAX_LENGTH,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Build a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `max_length` is outside `1..=15`.
    pub fn new(dictionary: DictionarySource, max_length: usize, seed: Option<u64>) -> Result<Self> {
        ensure!(
            (1..=MAX_LENGTH_LIMIT).contains(&max_length),
            "max length must be between 1 and {MAX_LENGTH_LIMIT}, got {max_length}"
        );
        Ok(Self {
            dictionary,
            max_length,
            seed,
        })
    }

    /// Load the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if the word list file cannot be read.
    pub fn load_dictionary(&self) -> Result<Dictionary> {
        match &self.dictionary {
            DictionarySource::Builtin => {
                let dictionary = Dictionary::builtin(self.max_length);
                tracing::info!(
                    max_length = self.max_length,
                    "Loaded {} builtin words into dictionary",
                    dictionary.len()
                );
                Ok(dictionary)
            }
            DictionarySource::File(path) => load_dictionary(path, self.max_length)
                .with_context(|| {
                    format!(
                        "cannot start without a dictionary (use --dictionary {BUILTIN_KEYWORD} for the bundled list)"
                    )
                }),
        }
    }

    /// RNG for rack draws, seeded when a seed was given
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assign_tiles_with;

    #[test]
    fn dictionary_source_from_arg() {
        assert_eq!(DictionarySource::from_arg("builtin"), DictionarySource::Builtin);
        assert_eq!(DictionarySource::from_arg("BUILTIN"), DictionarySource::Builtin);
        assert_eq!(
            DictionarySource::from_arg("words.txt"),
            DictionarySource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_length, 7);
        assert_eq!(config.dictionary.to_string(), DEFAULT_DICTIONARY_PATH);
        assert!(config.seed.is_none());
    }

    #[test]
    fn max_length_is_validated() {
        assert!(GameConfig::new(DictionarySource::Builtin, 0, None).is_err());
        assert!(GameConfig::new(DictionarySource::Builtin, 16, None).is_err());
        assert!(GameConfig::new(DictionarySource::Builtin, 15, None).is_ok());
    }

    #[test]
    fn builtin_dictionary_loads() {
        let config = GameConfig::new(DictionarySource::Builtin, 7, None).unwrap();
        let dictionary = config.load_dictionary().unwrap();
        assert!(!dictionary.is_empty());
        assert_eq!(dictionary.max_length(), 7);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DictionarySource::File(dir.path().join("absent.txt"));
        let config = GameConfig::new(source, 7, None).unwrap();

        let err = config.load_dictionary().unwrap_err();
        assert!(err.to_string().contains("cannot start without a dictionary"));
        assert!(err.chain().any(|cause| cause.to_string().contains("absent.txt")));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig::new(DictionarySource::Builtin, 7, Some(99)).unwrap();
        let a = assign_tiles_with(&mut config.rng());
        let b = assign_tiles_with(&mut config.rng());
        assert_eq!(a, b);
    }
}
