//! Retry wrapper for generation requests.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::thread;
use std::time::Duration;

use crate::domain::{AppError, GenerationApiConfig};
use crate::ports::{GenerationClient, GenerationRequest, GenerationResponse};

const MAX_DELAY: Duration = Duration::from_secs(30);

/// Backoff schedule for transient generation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &GenerationApiConfig) -> Self {
        let base_delay = Duration::from_millis(config.retry_delay_ms);
        Self { max_attempts: config.max_attempts.max(1), base_delay, max_delay: MAX_DELAY.max(base_delay) }
    }

    /// Delay before retry number `retry` (1-based).
    ///
    /// A hint from the service replaces the doubling backoff. Either way the
    /// result never exceeds `max_delay`.
    pub fn delay(&self, retry: u32, hint: Option<Duration>) -> Duration {
        let delay = hint.unwrap_or_else(|| {
            let exponent = retry.saturating_sub(1).min(6);
            let backoff = self.base_delay.saturating_mul(1 << exponent);
            backoff.saturating_add(jitter(backoff / 4))
        });
        delay.min(self.max_delay)
    }
}

/// Uniform random delay below `cap`.
fn jitter(cap: Duration) -> Duration {
    let cap_ms = cap.as_millis() as u64;
    if cap_ms == 0 {
        return Duration::ZERO;
    }
    let random = RandomState::new().build_hasher().finish();
    Duration::from_millis(random % cap_ms)
}

/// Sends through `inner`, retrying failures that [`AppError::is_transient`] accepts.
pub struct RetryingGenerationClient {
    inner: Box<dyn GenerationClient>,
    policy: RetryPolicy,
}

impl RetryingGenerationClient {
    pub fn new(inner: Box<dyn GenerationClient>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl GenerationClient for RetryingGenerationClient {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        let mut attempt = 1;
        loop {
            match self.inner.generate(request.clone()) {
                Err(error) if error.is_transient() && attempt < self.policy.max_attempts => {
                    let delay = self.policy.delay(attempt, retry_after(&error));
                    tracing::warn!(
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        %error,
                        "transient generation failure, retrying"
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

fn retry_after(error: &AppError) -> Option<Duration> {
    match error {
        AppError::GenerationApi { retry_after, .. } => *retry_after,
        _ => None,
    }
}
