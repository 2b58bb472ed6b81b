//! Interactive play mode
//!
//! Draws a rack, reads a word from the player, and scores it if the rack
//! can spell it and the dictionary knows it. A fresh rack is drawn after
//! every accepted word.

use crate::core::{Rack, Word, assign_tiles_with};
use crate::dictionary::Dictionary;
use crate::error::{Error, InputError};
use crate::output::formatters::format_rack;
use crate::validator::{can_form, rank_words, valid_words};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::io::{BufRead, Write};

/// Something the player typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewRack,
    Hint,
    Words,
    Play(String),
}

impl Command {
    /// Parse a line of player input
    ///
    /// Commands start with `/` so they never clash with real words.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "/quit" | "/q" | "/exit" => Self::Quit,
            "/new" | "/n" => Self::NewRack,
            "/hint" | "/h" => Self::Hint,
            "/words" | "/w" => Self::Words,
            _ => Self::Play(input.to_string()),
        }
    }
}

/// Why a played word was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Invalid(InputError),
    NotOnRack,
    NotInDictionary,
}

/// What happened after handling one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted { word: Word, score: u32, total: u32 },
    Rejected(Rejection),
    NewRack(Rack),
    Hint(Option<Word>),
    Words(Vec<Word>),
    Quit,
}

/// State of one player's game
pub struct PlaySession<'a, R: Rng> {
    dictionary: &'a Dictionary,
    rng: R,
    rack: Rack,
    valid: FxHashSet<Word>,
    history: Vec<(Word, u32)>,
    total: u32,
}

impl<'a, R: Rng> PlaySession<'a, R> {
    /// Start a session with a freshly drawn rack
    pub fn new(dictionary: &'a Dictionary, mut rng: R) -> Self {
        let rack = assign_tiles_with(&mut rng);
        Self::with_rack(dictionary, rng, rack)
    }

    /// Start a session from a known rack
    pub fn with_rack(dictionary: &'a Dictionary, rng: R, rack: Rack) -> Self {
        Self {
            valid: valid_words(&rack, dictionary),
            dictionary,
            rng,
            rack,
            history: Vec::new(),
            total: 0,
        }
    }

    /// The rack currently in play
    pub const fn rack(&self) -> &Rack {
        &self.rack
    }

    /// Number of words the current rack can spell
    pub fn playable_count(&self) -> usize {
        self.valid.len()
    }

    /// Running score
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Words accepted so far with their scores
    pub fn history(&self) -> &[(Word, u32)] {
        &self.history
    }

    /// Handle one line of input
    pub fn handle(&mut self, input: &str) -> Outcome {
        match Command::parse(input) {
            Command::Quit => Outcome::Quit,
            Command::NewRack => Outcome::NewRack(self.redraw()),
            Command::Hint => Outcome::Hint(self.ranked().into_iter().next()),
            Command::Words => Outcome::Words(self.ranked()),
            Command::Play(text) => self.play(&text),
        }
    }

    fn play(&mut self, text: &str) -> Outcome {
        let word = match Word::new(text) {
            Ok(word) => word,
            Err(Error::InvalidInput(reason)) => {
                return Outcome::Rejected(Rejection::Invalid(reason));
            }
            Err(e) => unreachable!("word parsing does no I/O: {e}"),
        };

        if !self.valid.contains(&word) {
            let reason = if can_form(&self.rack, &word) {
                Rejection::NotInDictionary
            } else {
                Rejection::NotOnRack
            };
            return Outcome::Rejected(reason);
        }

        let score = word.score();
        self.total += score;
        self.history.push((word.clone(), score));
        self.redraw();

        Outcome::Accepted {
            word,
            score,
            total: self.total,
        }
    }

    fn ranked(&self) -> Vec<Word> {
        rank_words(self.valid.iter().cloned())
    }

    fn redraw(&mut self) -> Rack {
        self.rack = assign_tiles_with(&mut self.rng);
        self.valid = valid_words(&self.rack, self.dictionary);
        self.rack
    }
}

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: Rng>(dictionary: &Dictionary, rng: R) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = PlaySession::new(dictionary, rng);
    play_loop(&mut session, stdin.lock(), stdout.lock())
}

/// Drive a session from any reader and writer
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_loop<R, I, O>(session: &mut PlaySession<'_, R>, mut input: I, mut out: O) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Scrabble Rack - Play Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Spell a word from your seven tiles to score it.")?;
    writeln!(out, "Commands: /new for a new rack, /hint, /words, /quit to exit\n")?;

    let mut turn = 1;
    let mut show_rack = true;

    loop {
        if show_rack {
            writeln!(out, "────────────────────────────────────────────────────────────")?;
            writeln!(
                out,
                "Turn {turn}: {}   ({} playable words)",
                format_rack(session.rack()),
                session.playable_count()
            )?;
            writeln!(out, "────────────────────────────────────────────────────────────")?;
        }
        show_rack = false;

        write!(out, "Your word: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match session.handle(&line) {
            Outcome::Quit => break,
            Outcome::Accepted { word, score, total } => {
                writeln!(
                    out,
                    "✅ {} scores {} (total {})\n",
                    word.text().bright_white().bold(),
                    score.to_string().bright_yellow().bold(),
                    total
                )?;
                turn += 1;
                show_rack = true;
            }
            Outcome::Rejected(reason) => {
                let message = match reason {
                    Rejection::Invalid(e) => format!("Not a word: {e}"),
                    Rejection::NotOnRack => "Your rack can't spell that".to_string(),
                    Rejection::NotInDictionary => "Not in the dictionary".to_string(),
                };
                writeln!(out, "❌ {}\n", message.red())?;
            }
            Outcome::NewRack(_) => {
                writeln!(out, "🔄 New rack drawn\n")?;
                show_rack = true;
            }
            Outcome::Hint(Some(word)) => {
                writeln!(
                    out,
                    "💡 Try {} for {} points\n",
                    word.text().bright_cyan(),
                    word.score()
                )?;
            }
            Outcome::Hint(None) => writeln!(out, "💡 Nothing playable; try /new\n")?,
            Outcome::Words(words) => {
                if words.is_empty() {
                    writeln!(out, "No playable words on this rack.\n")?;
                } else {
                    for word in &words {
                        writeln!(out, "  • {:<8} {:>3}", word.text(), word.score())?;
                    }
                    writeln!(out)?;
                }
            }
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! {} words for {} points.\n",
        session.history().len(),
        session.total()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::from_lines(["mint", "lime", "aim", "zoo", "nine", "tame"], 7)
    }

    fn session(dictionary: &Dictionary) -> PlaySession<'_, StdRng> {
        let rack = Rack::parse("AEILMNT").unwrap();
        PlaySession::with_rack(dictionary, StdRng::seed_from_u64(1), rack)
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse(" /Q \n"), Command::Quit);
        assert_eq!(Command::parse("/new"), Command::NewRack);
        assert_eq!(Command::parse("/hint"), Command::Hint);
        assert_eq!(Command::parse("/words"), Command::Words);
        assert_eq!(Command::parse("new\n"), Command::Play("new".to_string()));
    }

    #[test]
    fn accepted_word_scores_and_redraws() {
        let dictionary = dictionary();
        let mut session = session(&dictionary);

        let outcome = session.handle("mint\n");
        assert_eq!(
            outcome,
            Outcome::Accepted {
                word: Word::new("MINT").unwrap(),
                score: 6,
                total: 6
            }
        );
        assert_eq!(session.total(), 6);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn rejects_word_rack_cannot_spell() {
        let dictionary = dictionary();
        let mut session = session(&dictionary);

        assert_eq!(session.handle("nine"), Outcome::Rejected(Rejection::NotOnRack));
        assert_eq!(session.handle("zoo"), Outcome::Rejected(Rejection::NotOnRack));
        assert_eq!(session.total(), 0);
    }

    #[test]
    fn rejects_word_missing_from_dictionary() {
        let dictionary = dictionary();
        let mut session = session(&dictionary);

        assert_eq!(
            session.handle("mail"),
            Outcome::Rejected(Rejection::NotInDictionary)
        );
    }

    #[test]
    fn rejects_non_alphabetic_input() {
        let dictionary = dictionary();
        let mut session = session(&dictionary);

        assert_eq!(
            session.handle("m1nt"),
            Outcome::Rejected(Rejection::Invalid(InputError::NonAlphabetic('1')))
        );
        assert_eq!(
            session.handle("   "),
            Outcome::Rejected(Rejection::Invalid(InputError::Empty))
        );
    }

    #[test]
    fn hint_and_words() {
        let dictionary = dictionary();
        let mut session = session(&dictionary);

        assert_eq!(session.playable_count(), 4);
        assert_eq!(
            session.handle("/hint"),
            Outcome::Hint(Some(Word::new("LIME").unwrap()))
        );
        match session.handle("/words") {
            Outcome::Words(words) => {
                let texts: Vec<&str> = words.iter().map(Word::text).collect();
                assert_eq!(texts, ["LIME", "MINT", "TAME", "AIM"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn scripted_game_loop() {
        let dictionary = dictionary();
        let mut session = session(&dictionary);
        let input = b"zoo\nmint\n/quit\n".as_slice();
        let mut output = Vec::new();

        play_loop(&mut session, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Turn 1"));
        assert!(text.contains("Your rack can't spell that"));
        assert!(text.contains("MINT"));
        assert!(text.contains("Turn 2"));
        assert!(text.contains("Thanks for playing"));
        assert_eq!(session.total(), 6);
    }

    #[test]
    fn loop_ends_on_end_of_input() {
        let dictionary = dictionary();
        let mut session = session(&dictionary);
        let mut output = Vec::new();

        play_loop(&mut session, b"".as_slice(), &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("Thanks for playing"));
    }
}
