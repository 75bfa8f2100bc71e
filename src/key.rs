use std::fmt;

/// An API key taken from a request, redacted in all formatted output.
///
/// The key has only been checked for shape, not for validity. Comparing
/// it against a credential store is the caller's job.
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow`, `Clone`, or `Copy`
/// - Debug and Display output is always `[REDACTED]`
/// - Access requires the explicit [`expose_secret`](Self::expose_secret) call
///
/// # Examples
///
/// ```
/// use apikey_auth::ApiKey;
///
/// let key = ApiKey::new("sk-1234567890");
///
/// assert_eq!(format!("{:?}", key), "[REDACTED]");
/// assert_eq!(format!("{}", key), "[REDACTED]");
/// assert_eq!(key.expose_secret(), "sk-1234567890");
/// ```
// Do NOT add Clone, Copy, or Default derives: keys must not be duplicated casually.
pub struct ApiKey {
    // Must stay private so the only access path is expose_secret()
    inner: String,
}

impl ApiKey {
    /// Wraps an extracted key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { inner: key.into() }
    }

    /// Returns the key text.
    ///
    /// The verbose name marks every place key material leaves the wrapper.
    /// Do not log or display the returned value.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    /// Consumes the wrapper and returns the key text.
    pub fn into_inner(self) -> String {
        self.inner
    }

    /// Returns the key length in bytes. Safe to log.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the key is empty. Extracted keys never are.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    /// Always `[REDACTED]`, in every build profile.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    /// Always `[REDACTED]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
