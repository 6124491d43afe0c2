//! Streak statistics command

use crate::store::{KeyValueStore, SavedSession, load_session, persist};

/// What the store knows about the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsReport {
    pub streak: u32,
    pub record: u32,
    /// Guesses made in an unfinished game, if there is one
    pub game_in_progress: Option<usize>,
}

impl From<&SavedSession> for StatsReport {
    fn from(saved: &SavedSession) -> Self {
        Self {
            streak: saved.streak,
            record: saved.record,
            game_in_progress: saved.game.as_ref().map(|game| game.words.len()),
        }
    }
}

/// Read the current statistics
pub fn read_stats<S: KeyValueStore>(store: &S) -> StatsReport {
    StatsReport::from(&load_session(store))
}

/// Zero the streak and record; an unfinished game is kept
pub fn reset_stats<S: KeyValueStore>(store: &mut S) -> StatsReport {
    let saved = SavedSession {
        streak: 0,
        record: 0,
        ..load_session(store)
    };
    persist(store, &saved);
    tracing::info!("streak and record reset");
    StatsReport::from(&saved)
}
