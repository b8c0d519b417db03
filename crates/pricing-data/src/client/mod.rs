//! Retrying edge function client.
//!
//! [`EdgeFunctionClient`] invokes a named Supabase Edge Function over HTTP,
//! applying a per-attempt timeout and a capped-exponential-backoff-with-jitter
//! retry policy for transient failures. Retryability is decided by
//! [`PricingDataError::retry_class`], never by matching on message text.

mod backoff;
mod retry;

pub use backoff::RetryPolicy;

pub(crate) use retry::run_with_retry;

use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::errors::PricingDataError;

/// Environment variable holding the Supabase project base URL.
pub const BASE_URL_ENV: &str = "SUPABASE_URL";

/// Environment variable holding the service role access token.
pub const ACCESS_TOKEN_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Default per-attempt HTTP timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the edge function endpoint.
///
/// Constructed once at process start and injected into
/// [`EdgeFunctionClient::new`]; the values are never re-read per call.
#[derive(Clone, Debug)]
pub struct EdgeFunctionConfig {
    /// Base address of the Supabase project, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Bearer token attached to every request.
    pub access_token: String,
}

impl EdgeFunctionConfig {
    /// Create a config from explicit values.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Read the config from the environment, failing fast when either value
    /// is missing or empty. Misconfiguration is never retried.
    pub fn from_env() -> Result<Self, PricingDataError> {
        let base_url = require_env(BASE_URL_ENV)?;
        let access_token = require_env(ACCESS_TOKEN_ENV)?;
        Ok(Self {
            base_url,
            access_token,
        })
    }
}

fn require_env(name: &str) -> Result<String, PricingDataError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PricingDataError::Configuration(format!(
            "{} is not set",
            name
        ))),
    }
}

/// Per-call options for [`EdgeFunctionClient::call`].
#[derive(Clone, Debug)]
pub struct CallOptions {
    /// HTTP method, GET by default.
    pub method: Method,
    /// Extra headers merged on top of the authorization and content-type
    /// headers the client always sends.
    pub headers: HeaderMap,
    /// Optional JSON body, serialized for non-GET methods only.
    pub body: Option<serde_json::Value>,
    /// Per-attempt timeout; an attempt exceeding it is aborted and treated
    /// as a retryable timeout error.
    pub timeout: Duration,
    /// Backoff policy applied across attempts.
    pub retry: RetryPolicy,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

/// HTTP client for Supabase Edge Functions with transparent retries.
///
/// # Example
///
/// ```ignore
/// let config = EdgeFunctionConfig::from_env()?;
/// let client = EdgeFunctionClient::new(config);
/// let response: GetPricingResponse = client.call("get-pricing", CallOptions::default()).await?;
/// ```
pub struct EdgeFunctionClient {
    http: Client,
    config: EdgeFunctionConfig,
}

impl EdgeFunctionClient {
    /// Create a new client with the given connection settings.
    pub fn new(config: EdgeFunctionConfig) -> Self {
        let http = Client::builder().build().unwrap_or_else(|_| Client::new());
        Self { http, config }
    }

    /// Invoke the named edge function and decode its JSON response.
    ///
    /// The caller receives either the decoded payload or a single error
    /// after a non-retryable failure or retry exhaustion; there are no
    /// partial results.
    pub async fn call<T: DeserializeOwned>(
        &self,
        function: &str,
        options: CallOptions,
    ) -> Result<T, PricingDataError> {
        let url = format!(
            "{}/functions/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            function
        );

        run_with_retry(function, &options.retry, |_attempt| {
            self.execute(function, &url, &options)
        })
        .await
    }

    /// Issue a single HTTP attempt and map its failure modes onto the
    /// structured error taxonomy.
    async fn execute<T: DeserializeOwned>(
        &self,
        function: &str,
        url: &str,
        options: &CallOptions,
    ) -> Result<T, PricingDataError> {
        let mut request = self
            .http
            .request(options.method.clone(), url)
            .bearer_auth(&self.config.access_token)
            .header(CONTENT_TYPE, "application/json")
            .headers(options.headers.clone())
            .timeout(options.timeout);

        if options.method != Method::GET {
            if let Some(body) = &options.body {
                request = request.json(body);
            }
        }

        let response = request.send().await.map_err(|error| {
            if error.is_timeout() {
                PricingDataError::Timeout {
                    function: function.to_string(),
                }
            } else {
                PricingDataError::Transport {
                    function: function.to_string(),
                    message: error.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PricingDataError::Status {
                function: function.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|error| PricingDataError::InvalidResponse {
                function: function.to_string(),
                message: error.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_fails_fast_when_unset() {
        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var(ACCESS_TOKEN_ENV);

        let result = EdgeFunctionConfig::from_env();
        assert!(matches!(result, Err(PricingDataError::Configuration(_))));
    }

    #[test]
    fn test_default_call_options() {
        let options = CallOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert_eq!(options.retry.max_retries, 3);
    }
}
