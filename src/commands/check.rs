//! One-shot evaluation command
//!
//! Scores a guess against a given answer without starting a game.

use crate::core::{Feedback, LetterStatus, Word, WordError};
use crate::dictionary::Dictionary;

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub answer: Word,
    pub guess: Word,
    pub feedback: Feedback,
    /// Whether a game would accept the guess
    pub known_word: bool,
}

impl CheckResult {
    /// Letters of the guess that are in the answer but misplaced
    #[must_use]
    pub fn misplaced(&self) -> usize {
        self.feedback.count(LetterStatus::IllPositioned)
    }

    /// Letters of the guess in the right place
    #[must_use]
    pub fn positioned(&self) -> usize {
        self.feedback.count(LetterStatus::Positioned)
    }
}

/// Evaluate `guess` against `answer`
///
/// The guess does not have to be in the dictionary; `known_word` reports
/// whether it is.
///
/// # Errors
///
/// Returns `WordError` if either word is not five ASCII letters.
///
/// # Examples
/// ```
/// use waddle::commands::check_guess;
/// use waddle::dictionary::LocalDictionary;
///
/// let dictionary = LocalDictionary::embedded().unwrap();
/// let result = check_guess("crane", "react", &dictionary).unwrap();
/// assert_eq!(result.feedback.to_emoji(), "🟨🟨🟩🟨⬜");
/// ```
pub fn check_guess<D: Dictionary>(
    answer: &str,
    guess: &str,
    dictionary: &D,
) -> Result<CheckResult, WordError> {
    let answer = Word::new(answer)?;
    let guess = Word::new(guess)?;
    let feedback = Feedback::evaluate(&answer, &guess);

    let known_word = dictionary.is_valid_word(guess.text()).unwrap_or_else(|e| {
        tracing::warn!(word = guess.text(), error = %e, "dictionary lookup failed");
        false
    });

    Ok(CheckResult {
        answer,
        guess,
        feedback,
        known_word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{IllPositioned, Outcast, Positioned};
    use crate::dictionary::LocalDictionary;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> LocalDictionary {
        LocalDictionary::new(&words_from_slice(&["react"]), words_from_slice(&["crane"])).unwrap()
    }

    #[test]
    fn scores_guess() {
        let result = check_guess("crane", "react", &dictionary()).unwrap();
        assert_eq!(
            result.feedback,
            Feedback::new([IllPositioned, IllPositioned, Positioned, IllPositioned, Outcast])
        );
        assert_eq!(result.positioned(), 1);
        assert_eq!(result.misplaced(), 3);
        assert!(result.known_word);
    }

    #[test]
    fn unknown_guess_is_still_scored() {
        let result = check_guess("crane", "nacre", &dictionary()).unwrap();
        assert!(!result.known_word);
        assert_eq!(result.misplaced() + result.positioned(), 5);
    }

    #[test]
    fn malformed_words_rejected() {
        assert!(check_guess("cran", "react", &dictionary()).is_err());
        assert!(check_guess("crane", "re4ct", &dictionary()).is_err());
    }
}
