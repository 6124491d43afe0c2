//! Waddle
//!
//! A Wordle-style word guessing game: six tries to find a five-letter word,
//! with per-letter feedback, a keyboard tracker, streak bookkeeping and an
//! interrupted game resumed on the next launch.
//!
//! # Quick Start
//!
//! ```rust
//! use waddle::config::SessionConfig;
//! use waddle::dictionary::LocalDictionary;
//! use waddle::game::{GameSession, SubmitOutcome};
//! use waddle::store::MemoryStore;
//! use waddle::wordlists::loader::words_from_slice;
//!
//! let dictionary =
//!     LocalDictionary::new(&words_from_slice(&["slate"]), words_from_slice(&["crane"])).unwrap();
//! let mut game = GameSession::start(dictionary, MemoryStore::new(), SessionConfig::immediate());
//!
//! for letter in "crane".chars() {
//!     game.type_letter(letter);
//! }
//! assert!(matches!(game.submit(), Ok(SubmitOutcome::Won(_))));
//! assert_eq!(game.streak(), 1);
//! ```

// Core domain types
pub mod core;

// Board, keyboard and the session state machine
pub mod game;

// Word checks, answers and explanations
pub mod dictionary;

// Word lists
pub mod wordlists;

// Persistence
pub mod store;

pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
