//! Scrabble Rack - CLI
//!
//! Draw racks, score words, and play an interactive word game in the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scrabble_rack::{
    commands::{check_word, draw_rack, run_play, score_breakdown},
    config::{DEFAULT_DICTIONARY_PATH, DictionarySource, GameConfig},
    dictionary::{DEFAULT_MAX_LENGTH, Dictionary},
    output::{print_check_report, print_rack_report, print_score_report},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "scrabble_rack",
    about = "Draw Scrabble racks, score words, and find what a rack can spell",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: path to a file (one word per line) or 'builtin'
    #[arg(
        short,
        long,
        global = true,
        env = "SCRABBLE_DICTIONARY",
        default_value = DEFAULT_DICTIONARY_PATH
    )]
    dictionary: String,

    /// Longest word kept from the word list
    #[arg(
        short,
        long,
        global = true,
        env = "SCRABBLE_MAX_LENGTH",
        default_value_t = DEFAULT_MAX_LENGTH
    )]
    max_length: usize,

    /// Seed for reproducible rack draws
    #[arg(long, global = true, env = "SCRABBLE_SEED")]
    seed: Option<u64>,

    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Draw a rack and list the words it can spell
    Rack {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,

        /// Show every playable word
        #[arg(short, long, conflicts_with = "top")]
        all: bool,
    },

    /// Score a word
    Score {
        /// The word to score
        word: String,
    },

    /// Check whether a word can be played from a rack
    Check {
        /// Seven rack letters, e.g. AEILMNT
        rack: String,

        /// The word to check
        word: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GameConfig::new(
        DictionarySource::from_arg(&cli.dictionary),
        cli.max_length,
        cli.seed,
    )?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Score { word } => run_score_command(&word),
        Commands::Play => {
            let dictionary = config.load_dictionary()?;
            run_play(&dictionary, config.rng())
        }
        Commands::Rack { top, all } => {
            let dictionary = config.load_dictionary()?;
            run_rack_command(&config, &dictionary, (!all).then_some(top));
            Ok(())
        }
        Commands::Check { rack, word } => {
            let dictionary = config.load_dictionary()?;
            run_check_command(&rack, &word, &dictionary)
        }
    }
}

fn run_score_command(word: &str) -> Result<()> {
    let report = score_breakdown(word).with_context(|| format!("cannot score '{word}'"))?;
    print_score_report(&report);
    Ok(())
}

fn run_rack_command(config: &GameConfig, dictionary: &Dictionary, top: Option<usize>) {
    let mut rng = config.rng();
    let report = draw_rack(dictionary, &mut rng, top);
    print_rack_report(&report);
}

fn run_check_command(rack: &str, word: &str, dictionary: &Dictionary) -> Result<()> {
    let report = check_word(rack, word, dictionary)
        .with_context(|| format!("cannot check '{word}' against rack '{rack}'"))?;
    print_check_report(&report);
    Ok(())
}
