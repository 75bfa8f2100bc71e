//! Read-only access to request headers.
//!
//! The extractor never touches a framework request directly. It asks a
//! [`HeaderLookup`] for the first value stored under a name, so any header
//! representation can be plugged in:
//! - [`http::HeaderMap`], the type most Rust HTTP stacks hand out
//! - [`HeaderSet`], an owned collection for callers without one

use std::collections::HashMap;

use http::HeaderMap;

/// The first value stored for a header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderText<'a> {
    /// The value as text
    Text(&'a str),
    /// The value exists but is not valid header text (e.g. non-ASCII bytes)
    Opaque,
}

/// Case-insensitive, read-only header lookup.
///
/// Implementations return only the FIRST value stored for `name`. Later
/// values for the same name are never consulted by the extractor.
///
/// # Examples
///
/// ```
/// use apikey_auth::{HeaderLookup, HeaderSet, HeaderText};
///
/// let mut headers = HeaderSet::new();
/// headers.append("Authorization", "ApiKey first");
/// headers.append("Authorization", "ApiKey second");
///
/// assert_eq!(
///     headers.header_value("authorization"),
///     Some(HeaderText::Text("ApiKey first"))
/// );
/// assert_eq!(headers.header_value("X-Missing"), None);
/// ```
pub trait HeaderLookup {
    /// Returns the first value for `name`, or `None` if the header is absent.
    fn header_value(&self, name: &str) -> Option<HeaderText<'_>>;
}

impl<T: HeaderLookup + ?Sized> HeaderLookup for &T {
    fn header_value(&self, name: &str) -> Option<HeaderText<'_>> {
        (**self).header_value(name)
    }
}

impl HeaderLookup for HeaderMap {
    fn header_value(&self, name: &str) -> Option<HeaderText<'_>> {
        // `get` yields the first value and `None` for names that are not valid tokens
        self.get(name).map(|value| match value.to_str() {
            Ok(text) => HeaderText::Text(text),
            Err(_) => HeaderText::Opaque,
        })
    }
}

/// An owned header collection keyed case-insensitively.
///
/// Each name maps to an ordered list of values, matching HTTP semantics
/// where a header may be repeated. Names are stored lowercased.
///
/// # Examples
///
/// ```
/// use apikey_auth::HeaderSet;
///
/// let headers: HeaderSet = [("Authorization", "ApiKey abc123xyz")]
///     .into_iter()
///     .collect();
///
/// assert!(headers.contains("AUTHORIZATION"));
/// assert_eq!(headers.get_all("authorization"), ["ApiKey abc123xyz"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: HashMap<String, Vec<String>>,
}

impl HeaderSet {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to a single value, dropping any values already stored.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(normalize(name.as_ref()), vec![value.into()]);
    }

    /// Adds a value for `name` after any values already stored.
    pub fn append(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .entry(normalize(name.as_ref()))
            .or_default()
            .push(value.into());
    }

    /// Returns every value stored for `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&normalize(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` if at least one value is stored for `name`.
    pub fn contains(&self, name: &str) -> bool {
        !self.get_all(name).is_empty()
    }

    /// Returns the number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no headers are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderLookup for HeaderSet {
    fn header_value(&self, name: &str) -> Option<HeaderText<'_>> {
        self.get_all(name)
            .first()
            .map(|value| HeaderText::Text(value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderSet
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = HeaderSet::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}

impl From<&HeaderMap> for HeaderSet {
    /// Copies every text value. Values that are not valid header text are skipped.
    fn from(map: &HeaderMap) -> Self {
        map.iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|text| (name.as_str(), text)))
            .collect()
    }
}

fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::AUTHORIZATION;
    use http::HeaderValue;

    #[test]
    fn header_set_new_is_empty() {
        let headers = HeaderSet::new();
        assert!(headers.is_empty());
        assert_eq!(headers.len(), 0);
        assert_eq!(headers.header_value("Authorization"), None);
    }

    #[test]
    fn header_set_lookup_ignores_case() {
        let mut headers = HeaderSet::new();
        headers.insert("X-Custom", "value");

        assert!(headers.contains("x-custom"));
        assert!(headers.contains("X-CUSTOM"));
        assert_eq!(
            headers.header_value("x-CuStOm"),
            Some(HeaderText::Text("value"))
        );
    }

    #[test]
    fn header_set_append_preserves_order() {
        let mut headers = HeaderSet::new();
        headers.append("Accept", "text/html");
        headers.append("accept", "application/json");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get_all("ACCEPT"), ["text/html", "application/json"]);
        assert_eq!(
            headers.header_value("Accept"),
            Some(HeaderText::Text("text/html"))
        );
    }

    #[test]
    fn header_set_insert_replaces_values() {
        let mut headers = HeaderSet::new();
        headers.append("Authorization", "ApiKey old-1");
        headers.append("Authorization", "ApiKey old-2");
        headers.insert("authorization", "ApiKey new");

        assert_eq!(headers.get_all("Authorization"), ["ApiKey new"]);
    }

    #[test]
    fn header_set_keeps_empty_values() {
        let mut headers = HeaderSet::new();
        headers.insert("Authorization", "");

        assert!(headers.contains("Authorization"));
        assert_eq!(headers.header_value("Authorization"), Some(HeaderText::Text("")));
    }

    #[test]
    fn header_map_returns_first_value() {
        let mut map = HeaderMap::new();
        map.append(AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        map.append(AUTHORIZATION, HeaderValue::from_static("ApiKey second"));

        assert_eq!(
            map.header_value("Authorization"),
            Some(HeaderText::Text("ApiKey first"))
        );
    }

    #[test]
    fn header_map_reports_opaque_values() {
        let mut map = HeaderMap::new();
        map.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xffkey").expect("obs-text is a valid header value"),
        );

        assert_eq!(map.header_value("authorization"), Some(HeaderText::Opaque));
    }

    #[test]
    fn header_map_invalid_name_is_absent() {
        let map = HeaderMap::new();
        assert_eq!(map.header_value("not a header name"), None);
    }

    #[test]
    fn header_set_from_header_map_skips_opaque_values() {
        let mut map = HeaderMap::new();
        map.append(AUTHORIZATION, HeaderValue::from_static("ApiKey abc"));
        map.append("x-binary", HeaderValue::from_bytes(b"\xfe").expect("valid value"));

        let headers = HeaderSet::from(&map);

        assert_eq!(headers.get_all("Authorization"), ["ApiKey abc"]);
        assert!(!headers.contains("x-binary"));
    }

    #[test]
    fn lookup_through_reference() {
        fn first<L: HeaderLookup>(lookup: L) -> Option<String> {
            match lookup.header_value("authorization") {
                Some(HeaderText::Text(text)) => Some(text.to_string()),
                _ => None,
            }
        }

        let headers: HeaderSet = [("Authorization", "ApiKey k")].into_iter().collect();
        assert_eq!(first(&headers), Some("ApiKey k".to_string()));
    }
}
