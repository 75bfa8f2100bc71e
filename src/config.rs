/// Header consulted by default.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Scheme token expected by default.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Which header to read and which scheme token it must start with.
///
/// The defaults describe `Authorization: ApiKey <token>`. Scheme matching is
/// always exact and case-sensitive; header name lookup is case-insensitive.
///
/// # Examples
///
/// ```
/// use apikey_auth::ExtractorConfig;
///
/// let config = ExtractorConfig::default();
/// assert_eq!(config.header(), "Authorization");
/// assert_eq!(config.scheme(), "ApiKey");
///
/// let proxy = ExtractorConfig::default().with_header("Proxy-Authorization");
/// assert_eq!(proxy.header(), "Proxy-Authorization");
/// assert_eq!(proxy.scheme(), "ApiKey");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    header: String,
    scheme: String,
}

impl ExtractorConfig {
    /// Creates a configuration for the given header name and scheme token.
    pub fn new(header: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            scheme: scheme.into(),
        }
    }

    /// Replaces the header name.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Replaces the scheme token.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Returns the header name to look up.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the expected scheme token.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new(AUTHORIZATION_HEADER, API_KEY_SCHEME)
    }
}
