//! Cooperative cancellation for long-running fetches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// A cloneable flag checked by the retry loop before every attempt and
/// raced against every backoff sleep.
///
/// Clones share the same flag: cancel one and all observe it.
///
/// # Example
///
/// ```rust
/// use vend_api::clients::CancelToken;
///
/// let token = CancelToken::new();
/// let observer = token.clone();
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<Shared>);

#[derive(Debug, Default)]
struct Shared {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation and wakes every task waiting in
    /// [`cancelled`](Self::cancelled).
    pub fn cancel(&self) {
        self.0.cancelled.store(true, Ordering::Release);
        self.0.notify.notify_waiters();
    }

    /// Returns `true` once [`cancel`](Self::cancel) was called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.cancelled.load(Ordering::Acquire)
    }

    /// Resolves once the token is cancelled. Returns immediately if it
    /// already is.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.0.notify.notified();
            tokio::pin!(notified);
            // Register before reading the flag so a concurrent `cancel`
            // cannot slip between the check and the wait.
            notified.as_mut().enable();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancelled_resolves_immediately_when_already_cancelled() {
        let token = CancelToken::new();
        token.cancel();

        tokio::time::timeout(Duration::from_secs(1), token.cancelled())
            .await
            .expect("already-cancelled token should resolve");
    }

    #[tokio::test]
    async fn test_cancelled_wakes_waiter_on_another_clone() {
        let token = CancelToken::new();
        let canceller = token.clone();

        let waiter = tokio::spawn(async move { token.cancelled().await });
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake after cancel")
            .unwrap();
    }

    #[tokio::test]
    async fn test_uncancelled_token_keeps_waiting() {
        let token = CancelToken::new();

        let outcome = tokio::time::timeout(Duration::from_millis(50), token.cancelled()).await;

        assert!(outcome.is_err());
        assert!(!token.is_cancelled());
    }
}
