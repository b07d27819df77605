//! Bounded exponential backoff, applied only to rate-limited calls

use std::future::Future;
use std::time::Duration;

use shared::{request_debug, request_warn, ProviderOutcome, RequestId};

use crate::config::GeneratorConfig;

/// Retry schedule for a single model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.max_retries, config.backoff_base)
    }

    /// Delay before retry number `attempt` (1-based): `2^attempt × base`
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Full backoff schedule when every attempt is rate limited
    pub fn schedule(&self) -> Vec<Duration> {
        (1..=self.max_retries).map(|attempt| self.delay_for(attempt)).collect()
    }

    /// Decide whether `outcome` warrants another attempt after `retries_so_far` retries
    pub fn should_retry(&self, outcome: &ProviderOutcome, retries_so_far: u32) -> Option<Duration> {
        if outcome.is_retryable() && retries_so_far < self.max_retries {
            Some(self.delay_for(retries_so_far + 1))
        } else {
            None
        }
    }

    /// Run `call` until it stops being rate limited or retries run out.
    ///
    /// Timeouts and other failures are returned immediately; after
    /// `max_retries` retries the last `RateLimited` is returned.
    pub async fn call_with_retry<F, Fut>(
        &self,
        request_id: RequestId,
        model: &str,
        mut call: F,
    ) -> ProviderOutcome
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ProviderOutcome>,
    {
        let mut retries = 0;
        loop {
            let outcome = call().await;
            match self.should_retry(&outcome, retries) {
                Some(delay) => {
                    retries += 1;
                    request_warn!(
                        request_id,
                        model = model,
                        "⚠️ Rate limited. Retrying in {}ms ({}/{})",
                        delay.as_millis(),
                        retries,
                        self.max_retries
                    );
                    tokio::time::sleep(delay).await;
                }
                None => {
                    request_debug!(
                        request_id,
                        model = model,
                        "Attempt settled after {} retries: {}",
                        retries,
                        outcome
                    );
                    return outcome;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}
