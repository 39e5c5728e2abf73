//! Attempt budget and pause schedule for the posting loop.

use std::time::Duration;
use tokio_retry2::strategy::{FixedInterval, jitter_range};
use verdant_error::ConfigError;

/// How many primary attempts to make and how long to pause between them.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use verdant_bot::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// let delays: Vec<Duration> = policy.delays().collect();
/// assert_eq!(delays.len(), 9);
/// assert!(delays.iter().all(|d| *d == Duration::from_secs(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_ms: u64,
    jitter: bool,
}

impl RetryPolicy {
    /// Primary attempts made before falling back.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
    /// Pause between failed attempts.
    pub const DEFAULT_BACKOFF_MS: u64 = 2000;

    /// Fixed pause policy without jitter.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero.
    #[track_caller]
    pub fn new(max_attempts: u32, backoff_ms: u64) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be at least 1"));
        }
        Ok(Self {
            max_attempts,
            backoff_ms,
            jitter: false,
        })
    }

    /// Randomize each pause between zero and the configured backoff.
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Primary attempt budget.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Configured pause between attempts.
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    /// Whether pauses are randomized.
    pub fn jitter(&self) -> bool {
        self.jitter
    }

    /// Pauses to take after each failed primary attempt but the last.
    ///
    /// Yields `max_attempts - 1` durations; the fallback follows the final
    /// failure immediately.
    pub fn delays(&self) -> Box<dyn Iterator<Item = Duration> + Send> {
        let count = self.max_attempts.saturating_sub(1) as usize;
        let schedule = FixedInterval::from_millis(self.backoff_ms);
        if self.jitter {
            Box::new(schedule.map(jitter_range(0.0, 1.0)).take(count))
        } else {
            Box::new(schedule.take(count))
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            backoff_ms: Self::DEFAULT_BACKOFF_MS,
            jitter: false,
        }
    }
}
