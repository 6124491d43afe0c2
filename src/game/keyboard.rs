//! On-screen keyboard status
//!
//! Each key shows the best status its letter has ever earned in the current
//! game. Statuses only move up; a new game resets every key to pending.

use crate::core::{Feedback, LetterStatus, Word};

/// Letter rows of the on-screen keyboard, top to bottom
pub const LAYOUT: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const ALPHABET: usize = 26;

/// Best status seen per letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardTracker {
    statuses: [LetterStatus; ALPHABET],
}

impl KeyboardTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_lowercase() as u8 - b'a'))
    }

    /// Raise `letter` to `status` if that is more informative than what it has
    ///
    /// Non-letters are ignored.
    ///
    /// # Examples
    /// ```
    /// use waddle::core::LetterStatus;
    /// use waddle::game::KeyboardTracker;
    ///
    /// let mut keys = KeyboardTracker::new();
    /// keys.merge('e', LetterStatus::Positioned);
    /// keys.merge('e', LetterStatus::Outcast);
    /// assert_eq!(keys.status_of('E'), LetterStatus::Positioned);
    /// ```
    pub fn merge(&mut self, letter: char, status: LetterStatus) {
        if let Some(i) = Self::index(letter) {
            self.statuses[i] = self.statuses[i].merge(status);
        }
    }

    /// Merge every letter of an evaluated guess
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            self.merge(char::from(letter), status);
        }
    }

    #[must_use]
    pub fn status_of(&self, letter: char) -> LetterStatus {
        Self::index(letter).map_or(LetterStatus::Pending, |i| self.statuses[i])
    }

    /// Force every key back to pending
    pub fn reset(&mut self) {
        self.statuses = [LetterStatus::Pending; ALPHABET];
    }
}
