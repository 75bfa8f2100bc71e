//! Extraction of API-key credentials from HTTP request headers.
//!
//! A request authenticates with a header of the form
//! `Authorization: ApiKey <token>`. This crate locates that header, checks
//! its shape, and returns the token or a precise [`AuthError`]. It does not
//! decide whether the token is a valid key; that lookup belongs to the caller.
//!
//! # Core Types
//!
//! - [`extract_api_key`]: The pure extraction function
//! - [`AuthError`]: Why no key could be extracted
//! - [`HeaderLookup`]: Read-only header access, implemented for [`http::HeaderMap`] and [`HeaderSet`]
//! - [`ApiKeyExtractor`] / [`ExtractorConfig`]: Extraction with a configured header and scheme
//! - [`ApiKeyGuard`]: Per-request wrapper that logs outcomes via `tracing`
//! - [`ApiKey`]: The extracted key, redacted in logs and output
//!
//! # Examples
//!
//! ```
//! use apikey_auth::{extract_api_key, AuthError, HeaderSet};
//!
//! let mut headers = HeaderSet::new();
//! headers.insert("authorization", "ApiKey my-secret-key-123");
//! assert_eq!(extract_api_key(&headers).as_deref(), Ok("my-secret-key-123"));
//!
//! headers.insert("Authorization", "ApiKey");
//! assert_eq!(extract_api_key(&headers), Err(AuthError::MalformedHeader));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod extract;
mod guard;
mod headers;
mod key;

#[cfg(test)]
mod test_utils;

pub use config::{ExtractorConfig, API_KEY_SCHEME, AUTHORIZATION_HEADER};
pub use error::AuthError;
pub use extract::{extract_api_key, ApiKeyExtractor};
pub use guard::ApiKeyGuard;
pub use headers::{HeaderLookup, HeaderSet, HeaderText};
pub use key::ApiKey;
