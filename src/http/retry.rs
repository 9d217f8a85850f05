//! Retry policies for HTTP requests.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Method, StatusCode};
use std::time::Duration;

/// Whether a request may be retried at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// No retries. Used for POST.
    #[default]
    None,
    /// Retry on transport failures and retryable statuses.
    Idempotent,
}

impl RetryPolicy {
    pub fn for_method(method: &Method) -> Self {
        if *method == Method::POST {
            RetryPolicy::None
        } else {
            RetryPolicy::Idempotent
        }
    }
}

/// Backoff schedule and retryable statuses.
///
/// The number of retries lives in [`ClientOptions::retry`](super::ClientOptions::retry);
/// this only decides how long to wait and what is worth retrying.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add ±25% jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(300),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![408, 413, 429, 500, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Fixed delay between retries, no jitter. Handy in tests.
    pub fn constant(delay: Duration) -> Self {
        Self {
            initial_delay: delay,
            max_delay: delay,
            backoff_factor: 1.0,
            jitter: false,
            ..Self::default()
        }
    }

    pub fn is_retryable_status(&self, status: StatusCode) -> bool {
        self.retryable_statuses.contains(&status.as_u16())
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }

    /// Server-requested delay from `Retry-After` (seconds), capped at `max_delay`.
    ///
    /// Only honoured on 413, 429 and 503.
    pub fn retry_after(&self, status: StatusCode, headers: &HeaderMap) -> Option<Duration> {
        if !matches!(status.as_u16(), 413 | 429 | 503) {
            return None;
        }
        let secs: f64 = headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()?;
        if !secs.is_finite() || secs < 0.0 {
            return None;
        }
        Some(Duration::from_secs_f64(secs).min(self.max_delay))
    }
}
