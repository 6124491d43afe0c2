//! Guess evaluation
//!
//! `Feedback` is the per-position outcome of comparing a guess with the
//! secret answer. Duplicate letters are shared fairly: a letter can never earn
//! more positioned/ill-positioned marks than it has occurrences in the answer,
//! and exact matches are credited before misplaced ones.

use super::{LetterStatus, WORD_LENGTH, Word};
use std::fmt;

/// Evaluated feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterStatus::Positioned; WORD_LENGTH]);

    /// Wrap already-known statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Evaluate `guess` against the secret `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume them from a working
    ///    multiset of the answer's letters
    /// 2. Second pass: left to right over the remaining positions, mark a
    ///    letter ill-positioned while the multiset still holds a copy of it,
    ///    otherwise outcast
    ///
    /// # Examples
    /// ```
    /// use waddle::core::{Feedback, LetterStatus, Word};
    ///
    /// let answer = Word::new("allow").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    /// let feedback = Feedback::evaluate(&answer, &guess);
    ///
    /// assert_eq!(feedback.to_emoji(), "🟨🟨🟩⬜⬜");
    /// assert_eq!(feedback.status_at(3), LetterStatus::Outcast);
    /// ```
    #[must_use]
    pub fn evaluate(answer: &Word, guess: &Word) -> Self {
        let mut result = [LetterStatus::Outcast; WORD_LENGTH];
        let mut available = answer.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if g == a {
                result[i] = LetterStatus::Positioned;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        for (i, &g) in guess.letters().iter().enumerate() {
            if result[i] == LetterStatus::Positioned {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterStatus::IllPositioned;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Statuses in guess letter order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status of the letter at `position` (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions carrying `status`
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|status| status.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
