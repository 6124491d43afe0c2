//! Dictionary provider
//!
//! The game only needs three things from a dictionary: a validity check for
//! guesses, a source of secret answers, and an optional, asynchronous
//! explanation of a word once a game ends. [`Dictionary`] is that contract;
//! [`LocalDictionary`] implements it over in-memory word lists.

mod local;
mod query;

pub use local::LocalDictionary;
pub use query::{ExplainQuery, ExplainReply, QueryState};

use crate::core::Word;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a dictionary provider
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The provider could not answer a lookup
    #[error("dictionary lookup failed: {0}")]
    Lookup(String),

    /// A dictionary needs at least one answer word
    #[error("no answer words available")]
    NoAnswers,

    /// Reading a word list or definitions file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The dictionary collaborator used by a game session
pub trait Dictionary {
    /// Whether `word` (lowercase) is accepted as a guess
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Lookup` when the provider cannot decide.
    /// Callers treat that as "not a word".
    fn is_valid_word(&self, word: &str) -> Result<bool, DictionaryError>;

    /// Draw a fresh secret answer
    fn random_word(&self) -> Word;

    /// Start looking up a human-readable explanation of `word`
    ///
    /// The lookup runs in the background; the returned query is polled for
    /// the result and cancelled by dropping it.
    fn explain_word(&self, word: &Word) -> ExplainQuery;
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_valid_word(&self, word: &str) -> Result<bool, DictionaryError> {
        (**self).is_valid_word(word)
    }

    fn random_word(&self) -> Word {
        (**self).random_word()
    }

    fn explain_word(&self, word: &Word) -> ExplainQuery {
        (**self).explain_word(word)
    }
}
