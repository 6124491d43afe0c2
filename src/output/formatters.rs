//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::game::{Board, KeyboardTracker, LAYOUT, Row};
use colored::{ColoredString, Colorize};

/// A letter tile colored by its status
#[must_use]
pub fn colored_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        LetterStatus::Pending => tile.as_str().bold(),
        LetterStatus::Outcast => tile.as_str().white().on_bright_black(),
        LetterStatus::IllPositioned => tile.as_str().black().on_yellow().bold(),
        LetterStatus::Positioned => tile.as_str().black().on_green().bold(),
    }
}

/// One board row as colored tiles
#[must_use]
pub fn format_row(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| colored_tile(cell.display_char(), cell.status).to_string())
        .collect()
}

/// Keyboard rows with each key colored by its best known status
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardTracker) -> Vec<String> {
    LAYOUT
        .iter()
        .enumerate()
        .map(|(indent, keys)| {
            let tiles: String = keys
                .chars()
                .map(|key| colored_tile(key, keyboard.status_of(key)).to_string())
                .collect();
            format!("{}{tiles}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Emoji squares for every submitted row, one line each
///
/// # Examples
/// ```
/// use waddle::core::{Feedback, Word};
/// use waddle::game::Board;
/// use waddle::output::formatters::emoji_grid;
///
/// let mut board = Board::new();
/// let answer = Word::new("crane").unwrap();
/// let guess = Word::new("react").unwrap();
/// board.fill_active_row(&guess);
/// board.apply_evaluation(0, &Feedback::evaluate(&answer, &guess));
/// assert_eq!(emoji_grid(&board), "🟨🟨🟩🟨⬜");
/// ```
#[must_use]
pub fn emoji_grid(board: &Board) -> String {
    board
        .rows()
        .iter()
        .filter(|row| row.is_locked())
        .map(|row| {
            row.cells()
                .iter()
                .map(|cell| cell.status.emoji())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    #[test]
    fn emoji_grid_skips_open_rows() {
        let answer = Word::new("crane").unwrap();
        let mut board = Board::new();
        for guess in ["slate", "crane"] {
            let guess = Word::new(guess).unwrap();
            let row = board.active_row().unwrap();
            board.fill_active_row(&guess);
            board.apply_evaluation(row, &Feedback::evaluate(&answer, &guess));
        }
        assert_eq!(emoji_grid(&board), "⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn empty_board_has_empty_grid() {
        assert_eq!(emoji_grid(&Board::new()), "");
    }

    #[test]
    fn keyboard_has_three_rows() {
        let lines = format_keyboard(&KeyboardTracker::new());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('Q'));
        assert!(lines[2].starts_with("    "));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_without_maximum() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
