//! Parsing of `ApiKey <token>` credentials.
//!
//! # Compile-Time Rejection Example
//!
//! The extracted key is a plain `String`, and an error carries no key:
//!
//! ```compile_fail
//! use apikey_auth::{extract_api_key, HeaderSet};
//!
//! let headers = HeaderSet::new();
//! let key: &str = extract_api_key(&headers); // Result, not a key
//! ```

use crate::config::ExtractorConfig;
use crate::error::AuthError;
use crate::headers::{HeaderLookup, HeaderText};

/// Extracts the API key from an `Authorization: ApiKey <token>` header.
///
/// Only the first `Authorization` value is consulted. The value is split
/// at its first whitespace character; the part before must be exactly
/// `ApiKey` and the part after is returned verbatim.
///
/// This function is pure: it only reads `headers` and never logs.
///
/// # Errors
///
/// - [`AuthError::NoAuthHeader`] if the header is missing or empty
/// - [`AuthError::MalformedHeader`] if the scheme is not `ApiKey` or no key follows it
///
/// # Examples
///
/// ```
/// use apikey_auth::{extract_api_key, AuthError, HeaderSet};
///
/// let mut headers = HeaderSet::new();
/// headers.insert("Authorization", "ApiKey abc123xyz");
/// assert_eq!(extract_api_key(&headers), Ok("abc123xyz".to_string()));
///
/// headers.insert("Authorization", "Bearer abc123xyz");
/// assert_eq!(extract_api_key(&headers), Err(AuthError::MalformedHeader));
///
/// assert_eq!(extract_api_key(&HeaderSet::new()), Err(AuthError::NoAuthHeader));
/// ```
pub fn extract_api_key<H>(headers: &H) -> Result<String, AuthError>
where
    H: HeaderLookup + ?Sized,
{
    ApiKeyExtractor::default().extract(headers)
}

/// An extractor bound to one header name and one scheme token.
///
/// [`extract_api_key`] is this type with [`ExtractorConfig::default`].
/// Extractors hold no mutable state and can be shared across threads.
///
/// # Examples
///
/// ```
/// use apikey_auth::{ApiKeyExtractor, ExtractorConfig, HeaderSet};
///
/// let extractor = ApiKeyExtractor::new(
///     ExtractorConfig::default().with_header("Proxy-Authorization"),
/// );
///
/// let mut headers = HeaderSet::new();
/// headers.insert("proxy-authorization", "ApiKey k-42");
///
/// assert_eq!(extractor.extract(&headers).as_deref(), Ok("k-42"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApiKeyExtractor {
    config: ExtractorConfig,
}

impl ApiKeyExtractor {
    /// Creates an extractor for the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this extractor applies.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts the key from the configured header.
    ///
    /// # Errors
    ///
    /// See [`extract_api_key`]. A value that is present but not valid
    /// header text is reported as [`AuthError::MalformedHeader`].
    pub fn extract<H>(&self, headers: &H) -> Result<String, AuthError>
    where
        H: HeaderLookup + ?Sized,
    {
        let value = match headers.header_value(self.config.header()) {
            None | Some(HeaderText::Text("")) => return Err(AuthError::NoAuthHeader),
            Some(HeaderText::Opaque) => return Err(AuthError::MalformedHeader),
            Some(HeaderText::Text(value)) => value,
        };

        let (scheme, key) = value
            .split_once(char::is_whitespace)
            .ok_or(AuthError::MalformedHeader)?;

        if scheme != self.config.scheme() || key.is_empty() {
            return Err(AuthError::MalformedHeader);
        }

        Ok(key.to_string())
    }
}
