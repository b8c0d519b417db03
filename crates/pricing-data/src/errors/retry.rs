/// Classification for retry policy.
///
/// Used to determine how the edge function client should respond to a
/// failed attempt.
///
/// # Behavior Summary
///
/// | Class | Retry? | Typical causes |
/// |-------|--------|----------------|
/// | `WithBackoff` | Yes, after a jittered exponential delay | timeout, transport failure, 5xx, 429 |
/// | `Never` | No, fail fast | other 4xx, malformed response, missing configuration |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Retry with capped exponential backoff and jitter.
    ///
    /// Used for transient errors where the next attempt has a reasonable
    /// chance of succeeding: per-attempt timeouts, connection-level
    /// transport failures, server errors (5xx), and rate limiting (429).
    WithBackoff,

    /// Never retry - the request is fundamentally broken and retrying
    /// won't help. Client errors other than 429, responses that fail to
    /// decode, and missing configuration all fall here.
    Never,
}
