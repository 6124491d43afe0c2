//! Delayed messages
//!
//! A [`ScheduledMessage`] is a message with a due time. Nothing sleeps: the
//! event loop calls `take_due` with the current time, and dropping the value
//! cancels it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledMessage {
    text: String,
    due: Instant,
}

impl ScheduledMessage {
    #[must_use]
    pub fn new(text: String, now: Instant, delay: Duration) -> Self {
        Self {
            text,
            due: now + delay,
        }
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    /// The message text if it is due, otherwise the message back
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged while the message is not due yet.
    pub fn take_due(self, now: Instant) -> Result<String, Self> {
        if self.is_due(now) { Ok(self.text) } else { Err(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_delay() {
        let start = Instant::now();
        let message = ScheduledMessage::new("hi".to_string(), start, Duration::from_secs(1));

        assert!(!message.is_due(start));
        let message = message.take_due(start + Duration::from_millis(999)).unwrap_err();
        assert!(!message.is_due(start + Duration::from_millis(999)));
        assert_eq!(
            message.take_due(start + Duration::from_secs(1)),
            Ok("hi".to_string())
        );
    }

    #[test]
    fn zero_delay_is_due_immediately() {
        let now = Instant::now();
        let message = ScheduledMessage::new("now".to_string(), now, Duration::ZERO);
        assert!(message.is_due(now));
    }
}
