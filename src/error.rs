//! Error types shared by the library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in the library
#[derive(Debug, Error)]
pub enum Error {
    /// Caller-supplied letters, words or racks were malformed
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The word list could not be read
    #[error("dictionary {} is unavailable: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a piece of input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,

    #[error("expected exactly one letter, got {len} characters")]
    NotSingleLetter { len: usize },

    #[error("'{0}' is not a letter")]
    NonAlphabetic(char),

    #[error("a rack holds exactly {expected} tiles, got {actual}")]
    WrongRackSize { expected: usize, actual: usize },
}

impl Error {
    /// Returns the input error if this is an `InvalidInput`
    #[must_use]
    pub const fn input_error(&self) -> Option<&InputError> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::ResourceUnavailable { .. } => None,
        }
    }
}
