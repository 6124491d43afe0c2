//! Display functions for command results

use super::formatters::{colored_tile, create_progress_bar, format_keyboard, format_row};
use crate::commands::{CheckResult, StatsReport};
use crate::core::MAX_GUESSES;
use crate::game::{Board, KeyboardTracker};
use colored::Colorize;
use std::io::{self, Write};

/// Write every board row, submitted or not
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for row in board.rows() {
        writeln!(out, "  {}", format_row(row))?;
    }
    Ok(())
}

/// Write the keyboard with known letter statuses
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_keyboard<W: Write>(out: &mut W, keyboard: &KeyboardTracker) -> io::Result<()> {
    for line in format_keyboard(keyboard) {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// Print the result of a one-shot check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Answer: {}   Guess: {}",
        result.answer.shout().bright_yellow().bold(),
        result.guess.shout().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: String = result
        .guess
        .text()
        .chars()
        .zip(result.feedback.statuses())
        .map(|(letter, &status)| colored_tile(letter, status).to_string())
        .collect();
    println!("\n  {tiles}   {}", result.feedback.to_emoji());
    println!(
        "\n  Positioned: {}   Misplaced: {}",
        result.positioned().to_string().green().bold(),
        result.misplaced().to_string().yellow().bold()
    );

    if result.feedback.is_perfect() {
        println!("  {}", "✅ Exact match".green().bold());
    }
    if !result.known_word {
        println!(
            "  {}",
            "⚠ Not in the word list: a game would reject this guess".red()
        );
    }
}

/// Print streak statistics
pub fn print_stats(report: &StatsReport) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "WADDLE STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    let bar = create_progress_bar(f64::from(report.streak), f64::from(report.record), 20);
    println!(
        "\n   Streak:  {}",
        report.streak.to_string().bright_yellow().bold()
    );
    println!("   Record:  {}", report.record.to_string().green().bold());
    println!("   [{}]", bar.green());

    match report.game_in_progress {
        Some(guesses) => println!(
            "\n   Game in progress: {guesses}/{MAX_GUESSES} guesses used"
        ),
        None => println!("\n   No game in progress"),
    }
}
