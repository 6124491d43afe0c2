//! Key-value persistence
//!
//! The game keeps a handful of values between launches (streak, record and
//! the in-progress game). Storage is an opaque [`KeyValueStore`]; the typed
//! view of what is stored lives in [`saved`].

mod file;
pub mod saved;

pub use file::JsonFileStore;
pub use saved::{SavedGame, SavedSession, load_session, persist};

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed store file {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed store of JSON values
pub trait KeyValueStore {
    /// Read a value, `None` if the key is absent
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Write or replace a value
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the value cannot be written.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Delete a value; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backing storage cannot be updated.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Store that lives only as long as the process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}
