//! Command implementations

pub mod check;
pub mod play;
pub mod rack;
pub mod score;

pub use check::{CheckReport, check_word};
pub use play::{PlaySession, run_play};
pub use rack::{RackReport, draw_rack};
pub use score::{ScoreReport, score_breakdown};
