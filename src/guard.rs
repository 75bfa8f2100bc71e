//! Per-request boundary between an HTTP layer and the extractor.
//!
//! The guard runs the extractor once for a request and records the outcome
//! as a structured `tracing` event tagged with the request id. It does NOT:
//! - check the key against a credential store
//! - pick an HTTP status code for a rejection
//!
//! Both stay with the calling handler.
//!
//! # Integration Flow
//!
//! ```text
//! HTTP Request
//!   ↓
//! Framework hands over its headers (http::HeaderMap or HeaderSet)
//!   ↓
//! ApiKeyGuard::authenticate(request_id, &headers)
//!   ↓
//! Ok(ApiKey)        → handler verifies the key and continues
//! Err(AuthError)    → handler rejects the request
//! ```

use crate::error::AuthError;
use crate::extract::ApiKeyExtractor;
use crate::headers::HeaderLookup;
use crate::key::ApiKey;

/// Runs an [`ApiKeyExtractor`] and logs each outcome.
///
/// Success is logged at `debug` with the key length; rejection is logged at
/// `warn` with the error. The key text is never logged.
///
/// # Examples
///
/// ```
/// use apikey_auth::{ApiKeyGuard, AuthError, HeaderSet};
///
/// let guard = ApiKeyGuard::default();
///
/// let mut headers = HeaderSet::new();
/// headers.insert("Authorization", "ApiKey abc123xyz");
/// let key = guard.authenticate("req-001", &headers).expect("well-formed header");
/// assert_eq!(key.expose_secret(), "abc123xyz");
///
/// let result = guard.authenticate("req-002", &HeaderSet::new());
/// assert_eq!(result.unwrap_err(), AuthError::NoAuthHeader);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApiKeyGuard {
    extractor: ApiKeyExtractor,
}

impl ApiKeyGuard {
    /// Creates a guard around the given extractor.
    pub fn new(extractor: ApiKeyExtractor) -> Self {
        Self { extractor }
    }

    /// Returns the wrapped extractor.
    pub fn extractor(&self) -> &ApiKeyExtractor {
        &self.extractor
    }

    /// Extracts the API key for one request.
    ///
    /// # Arguments
    ///
    /// * `request_id` - Identifier attached to the emitted log event
    /// * `headers` - The request headers
    ///
    /// # Errors
    ///
    /// Returns the extractor's [`AuthError`] unchanged.
    pub fn authenticate<H>(&self, request_id: &str, headers: &H) -> Result<ApiKey, AuthError>
    where
        H: HeaderLookup + ?Sized,
    {
        let header = self.extractor.config().header();

        match self.extractor.extract(headers) {
            Ok(key) => {
                tracing::debug!(request_id = %request_id, header, key_len = key.len(), "api key extracted");
                Ok(ApiKey::new(key))
            }
            Err(err) => {
                tracing::warn!(request_id = %request_id, header, error = %err, "api key rejected");
                Err(err)
            }
        }
    }
}
