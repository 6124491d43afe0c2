//! Player-facing message texts

use crate::core::{MAX_GUESSES, Word};
use rand::prelude::IndexedRandom;

/// Praise options by number of guesses used (index 0 = solved in one)
pub const PRAISES: [&[&str]; MAX_GUESSES] = [
    &["INCREDULOUS", "FANTASTIC"],
    &["WOW", "STUPENDOUS", "EXCEPTIONAL"],
    &["EXCELLENT", "SUPERB", "WONDERFUL"],
    &["WELL DONE"],
    &["CORRECT"],
    &["CORRECT (PHEW)"],
];

pub const NOT_ENOUGH_LETTERS: &str = "NOT ENOUGH LETTERS";

/// Pick a praise word for a win after `guesses` guesses (1-6)
#[must_use]
pub fn praise(guesses: usize) -> &'static str {
    let options = PRAISES[guesses.clamp(1, MAX_GUESSES) - 1];
    options.choose(&mut rand::rng()).copied().unwrap_or("CORRECT")
}

#[must_use]
pub fn win_message(guesses: usize, answer: &Word) -> String {
    format!("{}: {} 😊", praise(guesses), answer.shout())
}

#[must_use]
pub fn loss_message(answer: &Word) -> String {
    format!("THE WORD WAS {} 😭", answer.shout())
}

#[must_use]
pub fn not_a_word(word: &str) -> String {
    format!("NOT A WORD: {} 😔", word.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn praise_matches_guess_count() {
        for guesses in 1..=MAX_GUESSES {
            assert!(PRAISES[guesses - 1].contains(&praise(guesses)));
        }
        assert_eq!(praise(6), "CORRECT (PHEW)");
        assert_eq!(praise(99), "CORRECT (PHEW)");
    }

    #[test]
    fn message_texts() {
        let answer = Word::new("crane").unwrap();
        assert_eq!(win_message(5, &answer), "CORRECT: CRANE 😊");
        assert_eq!(loss_message(&answer), "THE WORD WAS CRANE 😭");
        assert_eq!(not_a_word("xyzzy"), "NOT A WORD: XYZZY 😔");
    }
}
