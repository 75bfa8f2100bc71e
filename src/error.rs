use std::fmt;

/// Reasons an `Authorization` header did not yield an API key.
///
/// Both kinds describe client input, not a system fault. Neither is
/// retryable: the same headers always produce the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The `Authorization` header is missing or its value is empty
    NoAuthHeader,
    /// The header is present but is not of the form `ApiKey <token>`
    MalformedHeader,
}

impl AuthError {
    /// Returns `true` if the request carried no credential at all.
    pub fn is_missing(&self) -> bool {
        matches!(self, AuthError::NoAuthHeader)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NoAuthHeader => write!(f, "no authorization header included"),
            AuthError::MalformedHeader => write!(f, "malformed authorization header"),
        }
    }
}

impl std::error::Error for AuthError {}
