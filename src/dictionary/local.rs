//! In-memory dictionary over word lists

use super::{Dictionary, DictionaryError, ExplainQuery};
use crate::core::Word;
use crate::wordlists::{
    ALLOWED, ANSWERS,
    loader::{load_definitions, words_from_slice},
};
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use std::sync::Arc;

/// Dictionary backed by a guess list, an answer list and optional explanations
///
/// Explanations are looked up on the rayon thread pool so the caller never
/// waits on them.
#[derive(Debug, Clone)]
pub struct LocalDictionary {
    allowed: FxHashSet<String>,
    answers: Vec<Word>,
    definitions: Arc<FxHashMap<String, String>>,
}

impl LocalDictionary {
    /// Build a dictionary from explicit lists
    ///
    /// Every answer is also accepted as a guess.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::NoAnswers` if `answers` is empty.
    ///
    /// # Examples
    /// ```
    /// use waddle::core::Word;
    /// use waddle::dictionary::{Dictionary, LocalDictionary};
    ///
    /// let answers = vec![Word::new("crane").unwrap()];
    /// let dictionary = LocalDictionary::new(&[], answers).unwrap();
    /// assert!(dictionary.is_valid_word("crane").unwrap());
    /// assert_eq!(dictionary.random_word().text(), "crane");
    /// ```
    pub fn new(allowed: &[Word], answers: Vec<Word>) -> Result<Self, DictionaryError> {
        if answers.is_empty() {
            return Err(DictionaryError::NoAnswers);
        }

        let allowed = allowed
            .iter()
            .chain(&answers)
            .map(|word| word.text().to_string())
            .collect();

        Ok(Self {
            allowed,
            answers,
            definitions: Arc::new(FxHashMap::default()),
        })
    }

    /// Dictionary over the embedded word lists
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::NoAnswers` if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(&words_from_slice(ALLOWED), words_from_slice(ANSWERS))
    }

    /// Attach an explanation table (lowercase word -> text)
    #[must_use]
    pub fn with_definitions(mut self, definitions: FxHashMap<String, String>) -> Self {
        self.definitions = Arc::new(definitions);
        self
    }

    /// Attach explanations read from a `word<TAB>text` file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read.
    pub fn with_definitions_file(self, path: &Path) -> Result<Self, DictionaryError> {
        let definitions = load_definitions(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            entries = definitions.len(),
            "loaded word explanations"
        );
        Ok(self.with_definitions(definitions))
    }

    /// Number of words accepted as guesses
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Number of words that can be drawn as answers
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}

impl Dictionary for LocalDictionary {
    fn is_valid_word(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.allowed.contains(&word.to_ascii_lowercase()))
    }

    fn random_word(&self) -> Word {
        let index = rand::rng().random_range(0..self.answers.len());
        self.answers[index].clone()
    }

    fn explain_word(&self, word: &Word) -> ExplainQuery {
        if self.definitions.is_empty() {
            return ExplainQuery::ready(None);
        }

        let (reply, query) = ExplainQuery::channel();
        let definitions = Arc::clone(&self.definitions);
        let key = word.text().to_string();

        rayon::spawn(move || {
            if reply.is_cancelled() {
                return;
            }
            let text = definitions.get(&key).cloned();
            reply.send(text);
        });

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::QueryState;
    use crate::wordlists::loader::words_from_slice;
    use std::time::{Duration, Instant};

    fn small() -> LocalDictionary {
        LocalDictionary::new(
            &words_from_slice(&["crane", "slate"]),
            words_from_slice(&["hello", "world"]),
        )
        .unwrap()
    }

    fn wait_for(query: &ExplainQuery) -> QueryState {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let state = query.poll();
            if state != QueryState::Pending || Instant::now() > deadline {
                return state;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn empty_answers_rejected() {
        assert!(matches!(
            LocalDictionary::new(&words_from_slice(&["crane"]), Vec::new()),
            Err(DictionaryError::NoAnswers)
        ));
    }

    #[test]
    fn answers_are_valid_guesses() {
        let dictionary = small();
        assert!(dictionary.is_valid_word("crane").unwrap());
        assert!(dictionary.is_valid_word("hello").unwrap());
        assert!(dictionary.is_valid_word("WORLD").unwrap());
        assert!(!dictionary.is_valid_word("xxxxx").unwrap());
        assert_eq!(dictionary.allowed_count(), 4);
        assert_eq!(dictionary.answer_count(), 2);
    }

    #[test]
    fn random_word_comes_from_answers() {
        let dictionary = small();
        for _ in 0..20 {
            let word = dictionary.random_word();
            assert!(["hello", "world"].contains(&word.text()));
        }
    }

    #[test]
    fn explain_without_definitions_is_immediately_empty() {
        let dictionary = small();
        let query = dictionary.explain_word(&Word::new("hello").unwrap());
        assert_eq!(query.poll(), QueryState::Ready(None));
    }

    #[test]
    fn explain_looks_up_in_background() {
        let mut table = FxHashMap::default();
        table.insert("hello".to_string(), "A greeting.".to_string());
        let dictionary = small().with_definitions(table);

        let found = dictionary.explain_word(&Word::new("hello").unwrap());
        assert_eq!(
            wait_for(&found),
            QueryState::Ready(Some("A greeting.".to_string()))
        );

        let missing = dictionary.explain_word(&Word::new("world").unwrap());
        assert_eq!(wait_for(&missing), QueryState::Ready(None));
    }

    #[test]
    fn embedded_lists_load() {
        let dictionary = LocalDictionary::embedded().unwrap();
        assert!(dictionary.answer_count() > 0);
        assert!(dictionary.is_valid_word("crane").unwrap());
    }
}
