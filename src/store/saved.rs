//! Typed view of the persisted game state
//!
//! Keys written to the store:
//! - `Streak`, `Record`: non-negative integers, record never below streak
//! - `Answer`: the secret word, only while a game is in progress
//! - `Words`: guesses submitted so far in that game (0-5), same lifetime
//!
//! [`load_session`] reads everything once at start-up and [`persist`] writes
//! it back at each state-machine transition. Neither fails: storage problems
//! are logged and the game carries on in memory.

use super::KeyValueStore;
use crate::core::{MAX_GUESSES, Word};
use serde_json::Value;
use tracing::warn;

pub const STREAK_KEY: &str = "Streak";
pub const RECORD_KEY: &str = "Record";
pub const ANSWER_KEY: &str = "Answer";
pub const WORDS_KEY: &str = "Words";

/// A game that was interrupted before it finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    pub answer: String,
    pub words: Vec<String>,
}

/// Everything kept between launches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedSession {
    pub streak: u32,
    pub record: u32,
    pub game: Option<SavedGame>,
    /// Game keys were present but could not be decoded; they should be cleared
    pub unreadable_game: bool,
}

impl SavedGame {
    /// Parse the stored words, rejecting anything a live game could not
    /// have produced
    ///
    /// A resumable game has a valid answer, at most five valid guesses and
    /// none of them equal to the answer.
    #[must_use]
    pub fn validate(&self) -> Option<(Word, Vec<Word>)> {
        let answer = Word::new(&self.answer).ok()?;
        if self.words.len() >= MAX_GUESSES {
            return None;
        }

        let words = self
            .words
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()
            .ok()?;

        if words.contains(&answer) {
            return None;
        }

        Some((answer, words))
    }
}

fn read<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Value> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "failed to read saved value");
            None
        }
    }
}

fn read_count<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> u32 {
    read(store, key)
        .and_then(|value| value.as_u64())
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// Decode the stored guesses; a missing list means no guesses yet
fn read_words(value: Option<Value>) -> Option<Vec<String>> {
    match value {
        None => Some(Vec::new()),
        Some(value) => serde_json::from_value(value).ok(),
    }
}

/// Read the saved session; absent or unreadable values fall back to defaults
pub fn load_session<S: KeyValueStore + ?Sized>(store: &S) -> SavedSession {
    let streak = read_count(store, STREAK_KEY);
    let record = read_count(store, RECORD_KEY).max(streak);

    let (game, unreadable_game) = match (read(store, ANSWER_KEY), read(store, WORDS_KEY)) {
        (None, None) => (None, false),
        (Some(Value::String(answer)), words) => match read_words(words) {
            Some(words) => (Some(SavedGame { answer, words }), false),
            None => {
                warn!("saved guesses are unreadable, discarding the game");
                (None, true)
            }
        },
        _ => {
            warn!("saved game is unreadable, discarding it");
            (None, true)
        }
    };

    SavedSession {
        streak,
        record,
        game,
        unreadable_game,
    }
}

fn write<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, value: Value) {
    if let Err(e) = store.set(key, value) {
        warn!(key, error = %e, "failed to save value");
    }
}

fn clear<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) {
    if let Err(e) = store.remove(key) {
        warn!(key, error = %e, "failed to clear saved value");
    }
}

/// Write the session back; a finished game clears `Answer` and `Words`
pub fn persist<S: KeyValueStore + ?Sized>(store: &mut S, session: &SavedSession) {
    write(store, STREAK_KEY, Value::from(session.streak));
    write(store, RECORD_KEY, Value::from(session.record));

    match &session.game {
        Some(game) => {
            write(store, WORDS_KEY, Value::from(game.words.clone()));
            write(store, ANSWER_KEY, Value::from(game.answer.clone()));
        }
        None => {
            clear(store, WORDS_KEY);
            clear(store, ANSWER_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};
    use serde_json::json;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        fn set(&mut self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }
    }

    fn game(answer: &str, words: &[&str]) -> SavedGame {
        SavedGame {
            answer: answer.to_string(),
            words: words.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn first_run_is_empty() {
        assert_eq!(load_session(&MemoryStore::new()), SavedSession::default());
    }

    #[test]
    fn persist_then_load() {
        let mut store = MemoryStore::new();
        let session = SavedSession {
            streak: 2,
            record: 5,
            game: Some(game("crane", &["slate", "react"])),
            unreadable_game: false,
        };
        persist(&mut store, &session);

        assert_eq!(store.get(ANSWER_KEY).unwrap(), Some(json!("crane")));
        assert_eq!(
            store.get(WORDS_KEY).unwrap(),
            Some(json!(["slate", "react"]))
        );
        assert_eq!(load_session(&store), session);
    }

    #[test]
    fn finished_game_clears_progress() {
        let mut store = MemoryStore::new();
        persist(
            &mut store,
            &SavedSession {
                streak: 1,
                record: 1,
                game: Some(game("crane", &["slate"])),
                unreadable_game: false,
            },
        );
        persist(
            &mut store,
            &SavedSession {
                streak: 2,
                record: 2,
                game: None,
                unreadable_game: false,
            },
        );

        assert!(!store.contains(ANSWER_KEY));
        assert!(!store.contains(WORDS_KEY));
        assert_eq!(store.get(STREAK_KEY).unwrap(), Some(json!(2)));
    }

    #[test]
    fn record_is_never_below_streak() {
        let mut store = MemoryStore::new();
        store.set(STREAK_KEY, json!(4)).unwrap();
        store.set(RECORD_KEY, json!(1)).unwrap();

        let loaded = load_session(&store);
        assert_eq!(loaded.streak, 4);
        assert_eq!(loaded.record, 4);
    }

    #[test]
    fn garbage_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set(STREAK_KEY, json!(-3)).unwrap();
        store.set(RECORD_KEY, json!("many")).unwrap();
        store.set(WORDS_KEY, json!("crane")).unwrap();

        let loaded = load_session(&store);
        assert_eq!(loaded.streak, 0);
        assert_eq!(loaded.record, 0);
        assert_eq!(loaded.game, None);
        assert!(loaded.unreadable_game);
    }

    #[test]
    fn malformed_guesses_discard_the_game() {
        let mut store = MemoryStore::new();
        store.set(ANSWER_KEY, json!("crane")).unwrap();
        store.set(WORDS_KEY, json!(42)).unwrap();

        let loaded = load_session(&store);
        assert_eq!(loaded.game, None);
        assert!(loaded.unreadable_game);

        store.set(WORDS_KEY, json!(["slate", 7])).unwrap();
        assert!(load_session(&store).unreadable_game);
    }

    #[test]
    fn answer_without_guesses_is_a_fresh_saved_game() {
        let mut store = MemoryStore::new();
        store.set(ANSWER_KEY, json!("crane")).unwrap();

        let loaded = load_session(&store);
        assert_eq!(loaded.game, Some(game("crane", &[])));
        assert!(!loaded.unreadable_game);
    }

    #[test]
    fn broken_store_degrades_to_defaults() {
        let mut store = BrokenStore;
        assert_eq!(load_session(&store), SavedSession::default());
        persist(&mut store, &SavedSession::default());
    }

    #[test]
    fn validate_accepts_live_game() {
        let (answer, words) = game("crane", &["slate", "REACT"]).validate().unwrap();
        assert_eq!(answer.text(), "crane");
        assert_eq!(words[1].text(), "react");
    }

    #[test]
    fn validate_rejects_impossible_games() {
        assert!(game("cran", &[]).validate().is_none());
        assert!(game("crane", &["sl4te"]).validate().is_none());
        assert!(game("crane", &["slate", "crane"]).validate().is_none());
        let six = ["slate"; MAX_GUESSES];
        assert!(game("crane", &six).validate().is_none());
    }
}
