//! Cancellable explanation lookups
//!
//! A lookup is a one-shot channel plus a shared cancellation flag. The
//! session keeps the [`ExplainQuery`] end and polls it from its event loop;
//! the provider's worker keeps the [`ExplainReply`] end. Dropping the query
//! cancels the lookup, and a reply that arrives afterwards goes nowhere.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Result of polling a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    /// Still waiting for the provider
    Pending,
    /// Lookup finished; `None` means no explanation is available
    Ready(Option<String>),
}

/// Session-side handle of an in-flight lookup
#[derive(Debug)]
pub struct ExplainQuery {
    receiver: Receiver<Option<String>>,
    cancelled: Arc<AtomicBool>,
}

/// Provider-side handle used to deliver the explanation
#[derive(Debug)]
pub struct ExplainReply {
    sender: Sender<Option<String>>,
    cancelled: Arc<AtomicBool>,
}

impl ExplainQuery {
    /// Create a connected reply/query pair
    #[must_use]
    pub fn channel() -> (ExplainReply, Self) {
        let (sender, receiver) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        (
            ExplainReply {
                sender,
                cancelled: Arc::clone(&cancelled),
            },
            Self {
                receiver,
                cancelled,
            },
        )
    }

    /// A query that is already answered, for synchronous providers
    ///
    /// # Examples
    /// ```
    /// use waddle::dictionary::{ExplainQuery, QueryState};
    ///
    /// let query = ExplainQuery::ready(Some("a bird".to_string()));
    /// assert_eq!(query.poll(), QueryState::Ready(Some("a bird".to_string())));
    /// ```
    #[must_use]
    pub fn ready(text: Option<String>) -> Self {
        let (reply, query) = Self::channel();
        reply.send(text);
        query
    }

    /// Check for a result without blocking
    ///
    /// A provider that went away without replying counts as "no explanation".
    #[must_use]
    pub fn poll(&self) -> QueryState {
        match self.receiver.try_recv() {
            Ok(text) => QueryState::Ready(text),
            Err(TryRecvError::Empty) => QueryState::Pending,
            Err(TryRecvError::Disconnected) => QueryState::Ready(None),
        }
    }

    /// Abandon the lookup; any late reply is discarded
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ExplainQuery {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

impl ExplainReply {
    /// True once the session has given up on this lookup
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Deliver the result; silently dropped if the query was cancelled
    pub fn send(self, text: Option<String>) {
        if self.is_cancelled() {
            return;
        }
        // The receiver may disappear between the check and the send
        let _ = self.sender.send(text);
    }
}
