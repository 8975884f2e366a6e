//! Exponential backoff retry for transient failures.
//!
//! Retries are driven by an explicit [`RetryPolicy`] and a caller-supplied
//! predicate deciding which errors are worth another attempt. Attempts are
//! strictly sequential: the next attempt never starts before the backoff
//! delay for the previous failure has elapsed.

use std::future::Future;
use std::time::Duration;

/// Bounded backoff policy consumed by [`with_retry`].
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay after the first failure.
    pub base_delay: Duration,
    /// Growth factor applied per subsequent failure.
    pub multiplier: f64,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            multiplier: 2.0,
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Delay to sleep after `failed_attempts` failures (1-based).
    pub fn delay_for(&self, failed_attempts: u32) -> Duration {
        let exp = failed_attempts.saturating_sub(1) as i32;
        let millis = self.base_delay.as_millis() as f64 * self.multiplier.powi(exp);
        let delay = Duration::from_millis(millis as u64);
        delay.min(self.max_delay)
    }
}

/// Run `op` under `policy`, re-attempting while `should_retry` accepts the
/// error and attempts remain. Returns the last error otherwise.
pub async fn with_retry<T, E, F, Fut, P>(
    policy: &RetryPolicy,
    mut op: F,
    should_retry: P,
) -> std::result::Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    P: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!("request succeeded on attempt {attempt}");
                }
                return Ok(value);
            }
            Err(err) => {
                if attempt >= policy.max_attempts || !should_retry(&err) {
                    return Err(err);
                }
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    "attempt {}/{} failed, retrying in {:?}: {}",
                    attempt,
                    policy.max_attempts,
                    delay,
                    err
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
