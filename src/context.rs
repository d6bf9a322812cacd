//! Cancellation and deadline propagation for context-aware operations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A cancellation/deadline carrier passed through the context-aware
/// statement operations.
///
/// The proxy forwards the context to the wrapped statement untouched; it is
/// the statement's job to observe the deadline or the cancellation flag while
/// it blocks. A context with neither never expires.
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    token: Option<CancelToken>,
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            token: None,
        }
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context paired with a token that cancels it.
    pub fn cancellable() -> (Self, CancelToken) {
        let token = CancelToken::new();
        let cx = Self {
            deadline: None,
            token: Some(token.clone()),
        };
        (cx, token)
    }

    /// The instant after which the operation should give up, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True once the paired token fired or the deadline passed.
    pub fn is_cancelled(&self) -> bool {
        if self.token.as_ref().is_some_and(CancelToken::is_cancelled) {
            return true;
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Shared flag that cancels every [`Context`] carrying it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel all contexts holding this token. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_never_expires() {
        let cx = Context::background();
        assert!(cx.deadline().is_none());
        assert!(!cx.is_cancelled());
    }

    #[test]
    fn token_cancels_every_clone() {
        let (cx, token) = Context::cancellable();
        let other = cx.clone();
        assert!(!cx.is_cancelled());

        token.cancel();
        token.cancel();
        assert!(cx.is_cancelled());
        assert!(other.is_cancelled());
    }

    #[test]
    fn elapsed_deadline_cancels() {
        let cx = Context::with_deadline(Instant::now() - Duration::from_millis(1));
        assert!(cx.is_cancelled());
        assert!(cx.deadline().is_some());
    }
}
