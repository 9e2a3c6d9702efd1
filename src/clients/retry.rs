//! Backoff and retry policy for API requests.
//!
//! Delays grow polynomially with the attempt number (`attempt^3.5 + 5`
//! seconds) and are never jittered. [`RetryPolicy`] bounds how long the
//! client keeps trying before giving up with
//! [`HttpError::MaxRetries`](crate::clients::HttpError::MaxRetries).

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ConfigError;

/// Returns how long to wait before retrying after `attempt` failed tries.
///
/// Attempt `0` is treated as `1`. The delay is `attempt^3.5 + 5` seconds,
/// strictly increasing and uncapped; it saturates at [`Duration::MAX`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use vend_api::clients::backoff_duration;
///
/// assert_eq!(backoff_duration(0), Duration::from_secs(6));
/// assert_eq!(backoff_duration(1), Duration::from_secs(6));
/// assert!(backoff_duration(3) > backoff_duration(2));
/// ```
#[must_use]
pub fn backoff_duration(attempt: u32) -> Duration {
    let attempt = f64::from(attempt.max(1));
    let seconds = attempt.powf(3.5) + 5.0;
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

type BackoffFn = dyn Fn(u32) -> Duration + Send + Sync;

/// Bounds on the retry loop of [`HttpClient`](crate::clients::HttpClient).
///
/// - `max_attempts`: total tries per request, including the first one
/// - `max_elapsed`: optional wall-clock budget; a retry whose delay would
///   overrun it is not attempted
/// - backoff: delay function, [`backoff_duration`] unless replaced
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use vend_api::clients::RetryPolicy;
///
/// let policy = RetryPolicy::new(3)
///     .unwrap()
///     .with_max_elapsed(Duration::from_secs(600))
///     .with_backoff(|_| Duration::from_millis(10));
///
/// assert_eq!(policy.max_attempts(), 3);
/// assert_eq!(policy.delay(7), Duration::from_millis(10));
/// ```
#[derive(Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    max_elapsed: Option<Duration>,
    backoff: Arc<BackoffFn>,
}

impl RetryPolicy {
    /// Number of tries used by [`RetryPolicy::default`].
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

    /// Creates a policy allowing `max_attempts` tries per request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRetryPolicy`] if `max_attempts` is zero.
    pub fn new(max_attempts: u32) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::InvalidRetryPolicy {
                reason: "max_attempts must be at least 1".to_string(),
            });
        }
        Ok(Self {
            max_attempts,
            max_elapsed: None,
            backoff: Arc::new(backoff_duration),
        })
    }

    /// Caps the total time spent on one request, sleeps included.
    #[must_use]
    pub const fn with_max_elapsed(mut self, max_elapsed: Duration) -> Self {
        self.max_elapsed = Some(max_elapsed);
        self
    }

    /// Replaces the delay function.
    #[must_use]
    pub fn with_backoff<F>(mut self, backoff: F) -> Self
    where
        F: Fn(u32) -> Duration + Send + Sync + 'static,
    {
        self.backoff = Arc::new(backoff);
        self
    }

    /// Returns the maximum number of tries per request.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the wall-clock budget per request, if any.
    #[must_use]
    pub const fn max_elapsed(&self) -> Option<Duration> {
        self.max_elapsed
    }

    /// Returns the delay to wait after `attempt` failed tries.
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        (self.backoff)(attempt)
    }

    /// Returns `true` if another try is allowed after `attempt` tries that
    /// took `elapsed` so far and would next sleep for `delay`.
    #[must_use]
    pub fn allows_retry(&self, attempt: u32, elapsed: Duration, delay: Duration) -> bool {
        if attempt >= self.max_attempts {
            return false;
        }
        self.max_elapsed
            .map_or(true, |budget| elapsed.saturating_add(delay) <= budget)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            max_elapsed: None,
            backoff: Arc::new(backoff_duration),
        }
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("max_elapsed", &self.max_elapsed)
            .finish_non_exhaustive()
    }
}
