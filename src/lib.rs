//! Scrabble Rack
//!
//! Letter and word scoring, a length-filtered dictionary, weighted rack
//! drawing, and rack validation for a Scrabble-like word game.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabble_rack::core::{Rack, score_word};
//! use scrabble_rack::dictionary::Dictionary;
//! use scrabble_rack::validator::valid_words;
//!
//! let dictionary = Dictionary::from_lines(["mint", "lime", "aim", "zoo", "nine"], 7);
//! let rack = Rack::parse("AEILMNT").unwrap();
//!
//! let words = valid_words(&rack, &dictionary);
//! assert_eq!(words.len(), 3);
//! assert_eq!(score_word("GUARDIAN").unwrap(), 10);
//! ```

// Core domain types
pub mod core;

// Library error type
pub mod error;

// Word lists
pub mod dictionary;

// Rack validation
pub mod validator;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, InputError, Result};
