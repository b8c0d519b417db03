//! Capped exponential backoff with jitter.

use std::time::Duration;

use rand::Rng;

/// Default maximum number of retries after the initial attempt.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay before the first retry.
const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(1000);

/// Default ceiling on the computed backoff delay.
const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(10_000);

/// Default growth factor between successive delays.
const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

/// Fraction of the base delay added as uniform random jitter.
/// Jitter prevents synchronized retry storms across concurrent callers.
const JITTER_FRACTION: f64 = 0.3;

/// Retry policy for edge function calls.
///
/// Delays grow exponentially from `initial_delay` by `backoff_multiplier`
/// per attempt, capped at `max_delay`, with up to 30% uniform random
/// jitter added on top.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Maximum number of additional attempts after the first.
    pub max_retries: u32,
    /// Base delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound on the computed base delay.
    pub max_delay: Duration,
    /// Multiplier applied per attempt index.
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: DEFAULT_INITIAL_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
        }
    }
}

impl RetryPolicy {
    /// Compute the base (pre-jitter) delay for the given attempt.
    ///
    /// `attempt` is the one-based retry index: attempt 1 is the first retry.
    /// The result is `min(initial_delay * multiplier^attempt, max_delay)`.
    pub fn base_delay(&self, attempt: u32) -> Duration {
        let exponential =
            self.initial_delay.as_millis() as f64 * self.backoff_multiplier.powi(attempt as i32);
        let capped = exponential.min(self.max_delay.as_millis() as f64);
        Duration::from_millis(capped as u64)
    }

    /// Compute the actual sleep duration for the given attempt: the base
    /// delay plus a uniform random jitter in `[0, 0.3 * base]`.
    pub fn jittered_delay(&self, attempt: u32) -> Duration {
        let base = self.base_delay(attempt);
        let jitter = base.mul_f64(rand::thread_rng().gen_range(0.0..=JITTER_FRACTION));
        base + jitter
    }
}
