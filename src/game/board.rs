//! The 6×5 letter grid
//!
//! Rows lock strictly top to bottom. Only the row under the cursor is
//! editable, and only while it is unlocked. Every out-of-range edit is a
//! silent no-op.

use crate::core::{Feedback, LetterStatus, MAX_GUESSES, WORD_LENGTH, Word};

/// Number of rows on the board
pub const ROWS: usize = MAX_GUESSES;
/// Number of cells per row
pub const COLUMNS: usize = WORD_LENGTH;

/// One letter slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Lowercase ASCII letter, if one has been typed
    pub letter: Option<u8>,
    pub status: LetterStatus,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Uppercase letter for display, or a space
    #[must_use]
    pub fn display_char(&self) -> char {
        self.letter.map_or(' ', |b| char::from(b.to_ascii_uppercase()))
    }
}

/// A row of five cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; COLUMNS],
    locked: bool,
}

impl Row {
    #[must_use]
    pub const fn cells(&self) -> &[Cell; COLUMNS] {
        &self.cells
    }

    #[must_use]
    pub const fn cell(&self, column: usize) -> &Cell {
        &self.cells[column]
    }

    /// True once a guess in this row has been submitted and evaluated
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Typed letters in order, skipping blanks
    #[must_use]
    pub fn word(&self) -> String {
        self.cells
            .iter()
            .filter_map(|cell| cell.letter.map(char::from))
            .collect()
    }
}

/// Position of the next editable cell
///
/// `column == COLUMNS` means the row is full and waiting for a submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

/// The whole letter grid plus cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; ROWS],
    cursor: Cursor,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    #[must_use]
    pub const fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Index of the row that is currently editable
    #[must_use]
    pub fn active_row(&self) -> Option<usize> {
        let row = self.cursor.row;
        (row < ROWS && !self.rows[row].locked).then_some(row)
    }

    /// Number of rows that have been submitted
    #[must_use]
    pub fn locked_rows(&self) -> usize {
        self.rows.iter().take_while(|row| row.locked).count()
    }

    /// Words of every submitted row, top to bottom
    #[must_use]
    pub fn submitted_words(&self) -> Vec<String> {
        self.rows
            .iter()
            .take_while(|row| row.locked)
            .map(Row::word)
            .collect()
    }

    /// Write a letter at the cursor and advance it
    ///
    /// Returns false (and changes nothing) when the row is full or locked, or
    /// when `ch` is not an ASCII letter.
    pub fn type_letter(&mut self, ch: char) -> bool {
        let Some(row) = self.active_row() else {
            return false;
        };
        if self.cursor.column >= COLUMNS || !ch.is_ascii_alphabetic() {
            return false;
        }

        self.rows[row].cells[self.cursor.column].letter = Some(ch.to_ascii_lowercase() as u8);
        self.cursor.column += 1;
        true
    }

    /// Clear the letter before the cursor
    ///
    /// A cursor parked past the last cell steps back onto it first. If the
    /// cell under the cursor is already blank, the cursor moves left once
    /// more before clearing, so a row edited in the middle still deletes
    /// backwards.
    pub fn backspace(&mut self) -> bool {
        let Some(row) = self.active_row() else {
            return false;
        };

        if self.cursor.column >= COLUMNS {
            self.cursor.column = COLUMNS - 1;
        }

        if self.cursor.column > 0 && self.rows[row].cells[self.cursor.column].is_empty() {
            self.cursor.column -= 1;
        }

        self.rows[row].cells[self.cursor.column].letter = None;
        true
    }

    /// Letters typed so far in the active row
    #[must_use]
    pub fn current_word(&self) -> String {
        self.active_row()
            .map(|row| self.rows[row].word())
            .unwrap_or_default()
    }

    /// Move the cursor to another cell of the active row
    pub fn select_cell(&mut self, row: usize, column: usize) -> bool {
        if self.active_row() != Some(row) || column >= COLUMNS {
            return false;
        }
        self.cursor.column = column;
        true
    }

    /// The cell to highlight as the typing position, if any
    ///
    /// Nothing is highlighted when the active row is full or when no row is
    /// editable.
    #[must_use]
    pub fn highlighted_cell(&self) -> Option<Cursor> {
        self.active_row()?;
        (self.cursor.column < COLUMNS).then_some(self.cursor)
    }

    /// Fill the active row with `word`, replacing anything typed
    pub fn fill_active_row(&mut self, word: &Word) -> bool {
        let Some(row) = self.active_row() else {
            return false;
        };
        for (cell, &letter) in self.rows[row].cells.iter_mut().zip(word.letters()) {
            cell.letter = Some(letter);
        }
        self.cursor.column = COLUMNS;
        true
    }

    /// Record evaluated statuses on the active row and lock it
    ///
    /// The cursor moves to the start of the next row unless the guess was
    /// perfect or this was the last row. Returns false if `row` is not the
    /// active row or is not completely filled.
    pub fn apply_evaluation(&mut self, row: usize, feedback: &Feedback) -> bool {
        if self.active_row() != Some(row) || self.rows[row].cells.iter().any(Cell::is_empty) {
            return false;
        }

        for (cell, &status) in self.rows[row].cells.iter_mut().zip(feedback.statuses()) {
            cell.status = status;
        }
        self.rows[row].locked = true;

        if !feedback.is_perfect() && row + 1 < ROWS {
            self.cursor = Cursor {
                row: row + 1,
                column: 0,
            };
        }
        true
    }

    /// Seed the active row from an earlier one
    ///
    /// Columns are scanned right to left: positioned letters of `source` are
    /// copied, every other cell is blanked and the cursor is set to it, so the
    /// cursor ends on the leftmost blank.
    pub fn duplicate_row(&mut self, source: usize) -> bool {
        let Some(row) = self.active_row() else {
            return false;
        };
        if source >= row || !self.rows[source].locked {
            return false;
        }

        let from = self.rows[source].cells;
        self.cursor.column = 0;

        for column in (0..COLUMNS).rev() {
            let cell = &mut self.rows[row].cells[column];
            if from[column].status == LetterStatus::Positioned {
                cell.letter = from[column].letter;
            } else {
                cell.letter = None;
                self.cursor.column = column;
            }
        }
        true
    }

    /// Back to an empty, fully unlocked board
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(board: &mut Board, word: &str) {
        for ch in word.chars() {
            board.type_letter(ch);
        }
    }

    fn submit(board: &mut Board, answer: &str) -> Feedback {
        let guess = Word::new(board.current_word()).unwrap();
        let feedback = Feedback::evaluate(&Word::new(answer).unwrap(), &guess);
        let row = board.active_row().unwrap();
        assert!(board.apply_evaluation(row, &feedback));
        feedback
    }

    #[test]
    fn typing_fills_row_and_stops_when_full() {
        let mut board = Board::new();
        type_word(&mut board, "Crane");
        assert_eq!(board.current_word(), "crane");
        assert_eq!(board.cursor(), Cursor { row: 0, column: 5 });

        assert!(!board.type_letter('x'));
        assert_eq!(board.current_word(), "crane");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut board = Board::new();
        assert!(!board.type_letter('3'));
        assert!(!board.type_letter('é'));
        assert_eq!(board.cursor().column, 0);
    }

    #[test]
    fn backspace_from_full_row() {
        let mut board = Board::new();
        type_word(&mut board, "crane");

        board.backspace();
        assert_eq!(board.current_word(), "cran");
        assert_eq!(board.cursor().column, 4);

        board.backspace();
        assert_eq!(board.current_word(), "cra");
        assert_eq!(board.cursor().column, 3);
    }

    #[test]
    fn backspace_on_filled_cell_clears_it_in_place() {
        let mut board = Board::new();
        type_word(&mut board, "crane");
        assert!(board.select_cell(0, 2));

        board.backspace();
        assert_eq!(board.row(0).word(), "crne");
        assert_eq!(board.cursor().column, 2);

        // Cell 2 is now blank, so the next backspace steps left first
        board.backspace();
        assert_eq!(board.row(0).word(), "cne");
        assert_eq!(board.cursor().column, 1);
    }

    #[test]
    fn backspace_at_start_is_harmless() {
        let mut board = Board::new();
        board.backspace();
        assert_eq!(board.cursor(), Cursor::default());
        assert_eq!(board.current_word(), "");
    }

    #[test]
    fn apply_evaluation_locks_and_advances() {
        let mut board = Board::new();
        type_word(&mut board, "react");
        submit(&mut board, "crane");

        assert!(board.row(0).is_locked());
        assert_eq!(board.cursor(), Cursor { row: 1, column: 0 });
        assert_eq!(board.row(0).cell(2).status, LetterStatus::Positioned);
        assert_eq!(board.submitted_words(), vec!["react".to_string()]);
    }

    #[test]
    fn locked_rows_are_immutable() {
        let mut board = Board::new();
        type_word(&mut board, "react");
        submit(&mut board, "crane");
        let locked = *board.row(0);

        assert!(!board.select_cell(0, 1));
        assert!(!board.apply_evaluation(0, &Feedback::PERFECT));
        board.backspace();
        type_word(&mut board, "zz");
        assert_eq!(*board.row(0), locked);
    }

    #[test]
    fn apply_evaluation_rejects_incomplete_row() {
        let mut board = Board::new();
        type_word(&mut board, "rea");
        assert!(!board.apply_evaluation(0, &Feedback::PERFECT));
        assert!(!board.row(0).is_locked());
    }

    #[test]
    fn perfect_guess_leaves_no_active_row() {
        let mut board = Board::new();
        type_word(&mut board, "crane");
        submit(&mut board, "crane");

        assert_eq!(board.active_row(), None);
        assert_eq!(board.highlighted_cell(), None);
        assert!(!board.type_letter('a'));
    }

    #[test]
    fn last_row_stays_put_after_submit() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            type_word(&mut board, "lolly");
            submit(&mut board, "crane");
        }
        assert_eq!(board.locked_rows(), ROWS);
        assert_eq!(board.cursor().row, ROWS - 1);
        assert_eq!(board.active_row(), None);
    }

    #[test]
    fn highlight_only_inside_row() {
        let mut board = Board::new();
        assert_eq!(board.highlighted_cell(), Some(Cursor { row: 0, column: 0 }));
        type_word(&mut board, "crane");
        assert_eq!(board.highlighted_cell(), None);
        board.select_cell(0, 4);
        assert_eq!(board.highlighted_cell(), Some(Cursor { row: 0, column: 4 }));
    }

    #[test]
    fn select_cell_out_of_range() {
        let mut board = Board::new();
        assert!(!board.select_cell(0, 5));
        assert!(!board.select_cell(1, 0));
        assert!(board.select_cell(0, 3));
        assert_eq!(board.cursor().column, 3);
    }

    #[test]
    fn duplicate_row_copies_positioned_letters() {
        let mut board = Board::new();
        // Against CRATE: C R A positioned, N outcast, E positioned
        type_word(&mut board, "crane");
        submit(&mut board, "crate");

        type_word(&mut board, "xy");
        assert!(board.duplicate_row(0));

        assert_eq!(board.row(1).word(), "crae");
        assert!(board.row(1).cell(3).is_empty());
        assert_eq!(board.cursor(), Cursor { row: 1, column: 3 });
    }

    #[test]
    fn duplicate_row_cursor_ends_on_leftmost_blank() {
        let mut board = Board::new();
        // Against CRANE: R, A and N are positioned
        type_word(&mut board, "brand");
        submit(&mut board, "crane");
        assert!(board.duplicate_row(0));

        assert_eq!(board.row(1).word(), "ran");
        assert_eq!(board.cursor(), Cursor { row: 1, column: 0 });
    }

    #[test]
    fn duplicate_row_needs_earlier_locked_row() {
        let mut board = Board::new();
        assert!(!board.duplicate_row(0));
        assert!(!board.duplicate_row(3));

        type_word(&mut board, "react");
        submit(&mut board, "crane");
        assert!(!board.duplicate_row(1));
        assert!(board.duplicate_row(0));
    }

    #[test]
    fn fill_and_reset() {
        let mut board = Board::new();
        assert!(board.fill_active_row(&Word::new("hello").unwrap()));
        assert_eq!(board.current_word(), "hello");
        assert_eq!(board.cursor().column, COLUMNS);

        board.reset();
        assert_eq!(board, Board::new());
    }
}
