//! Exponential backoff retry policy for outgoing requests.

use std::time::Duration;

use crate::error::is_retryable_status;
use crate::http::HttpResponse;

/// Retry policy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts (0 = no retries).
    pub max_retries: u32,
    /// Delay before the first retry; doubles on every further attempt.
    pub base_interval: Duration,
    /// Upper bound for any single delay, including `Retry-After` values.
    pub max_retry_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 4,
            base_interval: Duration::from_secs(1),
            max_retry_interval: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_retries: u32, max_retry_interval: Duration) -> Self {
        Self {
            max_retries,
            max_retry_interval,
            ..Self::default()
        }
    }

    /// Whether a response with this status should be sent again at `attempt`.
    #[must_use]
    pub fn should_retry_status(&self, attempt: u32, status: u16) -> bool {
        attempt < self.max_retries && is_retryable_status(status)
    }

    /// Whether a transport failure should be retried at `attempt`.
    #[must_use]
    pub fn should_retry_transport(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }

    /// Delay before retry number `attempt` (zero-based).
    ///
    /// A numeric `Retry-After` header on the response is honoured; otherwise
    /// the delay is `min(base_interval * 2^attempt, max_retry_interval)`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32, response: Option<&HttpResponse>) -> Duration {
        let retry_after = response
            .and_then(|r| r.header("Retry-After"))
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let delay = retry_after.unwrap_or_else(|| {
            self.base_interval
                .saturating_mul(2u32.saturating_pow(attempt))
        });
        delay.min(self.max_retry_interval)
    }
}
