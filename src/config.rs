//! Session configuration

use std::time::Duration;

/// Delay before a win message replaces the keyboard
pub const DEFAULT_WIN_DELAY: Duration = Duration::from_millis(1000);
/// Delay before a loss message replaces the keyboard
pub const DEFAULT_LOSS_DELAY: Duration = Duration::from_millis(1);

/// Tunables for a game session
///
/// The delays give board colouring time to settle before the end-of-game
/// message takes over the keyboard area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub win_message_delay: Duration,
    pub loss_message_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            win_message_delay: DEFAULT_WIN_DELAY,
            loss_message_delay: DEFAULT_LOSS_DELAY,
        }
    }
}

impl SessionConfig {
    /// No delays at all, handy for line-based play and tests
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            win_message_delay: Duration::ZERO,
            loss_message_delay: Duration::ZERO,
        }
    }
}
