//! Display functions for command results

use super::formatters::{create_progress_bar, format_rack, format_tile};
use crate::commands::{CheckReport, RackReport, ScoreReport};
use colored::Colorize;

/// Print a drawn rack and its best words
pub fn print_rack_report(report: &RackReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "RACK:".bright_cyan().bold(),
        format_rack(&report.rack).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if report.words.is_empty() {
        println!("\n{}", "No playable words on this rack.".red());
        return;
    }

    println!(
        "\n📊 {} playable words, showing {}:",
        report.total_valid,
        report.words.len()
    );

    let best = report.words.first().map_or(1, |w| w.score()).max(1);
    for word in &report.words {
        let bar = create_progress_bar(f64::from(word.score()), f64::from(best), 20);
        println!(
            "   {:<8} [{}] {}",
            word.text().bright_white(),
            bar.green(),
            format!("{:>3}", word.score()).bright_yellow()
        );
    }
}

/// Print a word's score breakdown
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Scoring: {}", report.word.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let tiles: Vec<String> = report
        .letters
        .iter()
        .map(|&(letter, _)| format_tile(letter))
        .collect();
    println!("\n   {}", tiles.join(" "));

    let sum: Vec<String> = report.letters.iter().map(|(_, s)| s.to_string()).collect();
    println!(
        "   {} = {}",
        sum.join(" + "),
        report.total.to_string().green().bold()
    );
}

/// Print whether a word can be played from a rack
pub fn print_check_report(report: &CheckReport) {
    let mark = |ok: bool| if ok { "✓".green() } else { "✗".red() };

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking {} against {}",
        report.word.text().bright_yellow().bold(),
        format_rack(&report.rack)
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n   {} Spelled from rack", mark(report.on_rack));
    println!("   {} In dictionary", mark(report.in_dictionary));
    println!();

    if report.playable() {
        println!(
            "{}",
            format!("✅ Playable for {} points", report.score).green().bold()
        );
    } else {
        println!("{}", "❌ Not playable".red().bold());
    }
}
