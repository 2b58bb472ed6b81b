//! Formatting utilities for terminal output

use crate::core::{Letter, Rack};

/// Render a number with Unicode subscript digits
#[must_use]
pub fn subscript(value: u32) -> String {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

    value
        .to_string()
        .bytes()
        .map(|b| DIGITS[usize::from(b - b'0')])
        .collect()
}

/// Format a tile as its letter with the point value in subscript, e.g. `Q₁₀`
#[must_use]
pub fn format_tile(letter: Letter) -> String {
    format!("{letter}{}", subscript(letter.score()))
}

/// Format a rack as space-separated tiles
#[must_use]
pub fn format_rack(rack: &Rack) -> String {
    rack.tiles()
        .iter()
        .map(|&tile| format_tile(tile))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a bar of filled blocks proportional to `value / max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
