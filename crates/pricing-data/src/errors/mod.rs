//! Error types and retry classification for the pricing data crate.
//!
//! This module provides:
//! - [`PricingDataError`]: The main error enum for all pricing data operations
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while fetching pricing data.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method, which determines whether the
/// edge function client should retry the attempt.
#[derive(Error, Debug)]
pub enum PricingDataError {
    /// Required configuration is missing or empty.
    /// This is a terminal error - retrying won't help.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An attempt did not complete within the per-attempt timeout.
    /// Should retry with exponential backoff.
    #[error("Timeout calling edge function '{function}'")]
    Timeout {
        /// The edge function that timed out
        function: String,
    },

    /// The request failed at the transport level before a response was
    /// received (connection reset, DNS failure, broken socket).
    /// Should retry with exponential backoff.
    #[error("Transport error calling edge function '{function}': {message}")]
    Transport {
        /// The edge function being called
        function: String,
        /// The transport-level error message
        message: String,
    },

    /// The edge function responded with a non-success HTTP status.
    /// Retryable only for server errors (5xx) and rate limiting (429).
    #[error("Edge function '{function}' returned HTTP {status}: {body}")]
    Status {
        /// The edge function that returned the status
        function: String,
        /// The HTTP status code
        status: u16,
        /// The response body text, for diagnostics
        body: String,
    },

    /// The response arrived with a success status but could not be decoded,
    /// or the edge function reported an application-level failure.
    /// This is a terminal error - the payload won't improve on retry.
    #[error("Invalid response from edge function '{function}': {message}")]
    InvalidResponse {
        /// The edge function that produced the response
        function: String,
        /// Description of what was wrong with the payload
        message: String,
    },

    /// All attempts were exhausted without success.
    /// Carries the last observed error as its source.
    #[error("Edge function '{function}' failed after {attempts} attempts")]
    RetriesExhausted {
        /// The edge function being called
        function: String,
        /// Total number of attempts made (initial attempt + retries)
        attempts: u32,
        /// The last error observed before giving up
        #[source]
        source: Box<PricingDataError>,
    },
}

impl PricingDataError {
    /// Returns the retry classification for this error.
    ///
    /// Timeouts, transport failures, server errors (5xx), and rate limiting
    /// (429) are transient and classified [`RetryClass::WithBackoff`].
    /// Everything else fails fast with [`RetryClass::Never`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fairfence_pricing_data::errors::{PricingDataError, RetryClass};
    ///
    /// let error = PricingDataError::Timeout { function: "get-pricing".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = PricingDataError::Status {
    ///     function: "get-pricing".to_string(),
    ///     status: 404,
    ///     body: String::new(),
    /// };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            // Transient errors - retry with backoff
            Self::Timeout { .. } | Self::Transport { .. } => RetryClass::WithBackoff,

            // Server errors and rate limiting are transient; any other
            // status (remaining 4xx) is a permanent client error.
            Self::Status { status, .. } => {
                if *status == 429 || (500..600).contains(status) {
                    RetryClass::WithBackoff
                } else {
                    RetryClass::Never
                }
            }

            // Terminal errors - never retry
            Self::Configuration(_)
            | Self::InvalidResponse { .. }
            | Self::RetriesExhausted { .. } => RetryClass::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> PricingDataError {
        PricingDataError::Status {
            function: "get-pricing".to_string(),
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_timeout_retries_with_backoff() {
        let error = PricingDataError::Timeout {
            function: "get-pricing".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_transport_error_retries_with_backoff() {
        let error = PricingDataError::Transport {
            function: "get-pricing".to_string(),
            message: "connection reset by peer".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_server_errors_retry_with_backoff() {
        for status in [500, 502, 503, 599] {
            assert_eq!(status_error(status).retry_class(), RetryClass::WithBackoff);
        }
    }

    #[test]
    fn test_rate_limited_retries_with_backoff() {
        assert_eq!(status_error(429).retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_client_errors_never_retry() {
        for status in [400, 401, 403, 404, 422] {
            assert_eq!(status_error(status).retry_class(), RetryClass::Never);
        }
    }

    #[test]
    fn test_status_600_never_retries() {
        assert_eq!(status_error(600).retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_configuration_never_retries() {
        let error = PricingDataError::Configuration("SUPABASE_URL is not set".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_invalid_response_never_retries() {
        let error = PricingDataError::InvalidResponse {
            function: "get-pricing".to_string(),
            message: "expected object".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_retries_exhausted_never_retries() {
        let error = PricingDataError::RetriesExhausted {
            function: "get-pricing".to_string(),
            attempts: 4,
            source: Box::new(status_error(503)),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_error_display() {
        let error = PricingDataError::Timeout {
            function: "get-pricing".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Timeout calling edge function 'get-pricing'"
        );

        let error = PricingDataError::RetriesExhausted {
            function: "get-pricing".to_string(),
            attempts: 3,
            source: Box::new(status_error(503)),
        };
        assert_eq!(
            format!("{}", error),
            "Edge function 'get-pricing' failed after 3 attempts"
        );
    }
}
