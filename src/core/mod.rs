//! Core domain types for the game
//!
//! Pure value types with no I/O: letter statuses, validated words and the
//! guess evaluator. Everything here is deterministic and cheap to test.

mod feedback;
mod status;
mod word;

pub use feedback::Feedback;
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};

/// Number of guesses a player gets per game
pub const MAX_GUESSES: usize = 6;
