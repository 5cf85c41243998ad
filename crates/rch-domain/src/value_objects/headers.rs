//! Header multimap
//!
//! Thin wrapper over [`http::HeaderMap`]. Names are validated and normalized
//! to lowercase by [`HeaderName`]; values are validated by [`HeaderValue`], so
//! a map can never carry a malformed name or a CR/LF-injected value.

use std::fmt;

pub use http::header::{HeaderName, HeaderValue, InvalidHeaderName, InvalidHeaderValue};
use http::header::AsHeaderName;

/// Multimap of header names to their values
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    inner: http::HeaderMap<HeaderValue>,
}

impl HeaderMap {
    /// Create an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values of a header, replacing any previous values
    ///
    /// Returns the replaced values, empty if the header was absent.
    pub fn insert<I>(&mut self, name: HeaderName, values: I) -> Vec<HeaderValue>
    where
        I: IntoIterator<Item = HeaderValue>,
    {
        let previous: Vec<HeaderValue> = self.inner.get_all(&name).iter().cloned().collect();
        self.inner.remove(&name);
        for value in values {
            self.inner.append(name.clone(), value);
        }
        previous
    }

    /// Add a value to a header, keeping previous values
    pub fn append(&mut self, name: HeaderName, value: HeaderValue) {
        self.inner.append(name, value);
    }

    /// Parse and append a header given as text
    pub fn try_append(&mut self, name: &str, value: &str) -> Result<(), http::Error> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.inner.append(name, value);
        Ok(())
    }

    /// Values of a header, in insertion order
    pub fn get_all<K: AsHeaderName>(&self, name: K) -> Vec<&HeaderValue> {
        self.inner.get_all(name).iter().collect()
    }

    /// Values of a header as text
    pub fn values<K: AsHeaderName>(&self, name: K) -> Vec<&str> {
        self.inner
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect()
    }

    /// First value of a header as text
    pub fn first<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.inner.get(name).and_then(|value| value.to_str().ok())
    }

    /// Whether the header is present
    pub fn contains<K: AsHeaderName>(&self, name: K) -> bool {
        self.inner.contains_key(name)
    }

    /// Copy every header of `other` into this map, replacing same-named headers
    pub fn merge(&mut self, other: &HeaderMap) {
        for name in other.inner.keys() {
            self.insert(name.clone(), other.inner.get_all(name).iter().cloned());
        }
    }

    /// Iterate over `(name, value)` pairs, one per value
    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.inner.iter()
    }

    /// Distinct header names
    pub fn names(&self) -> impl Iterator<Item = &HeaderName> {
        self.inner.keys()
    }

    /// Number of distinct headers
    pub fn len(&self) -> usize {
        self.inner.keys_len()
    }

    /// Whether the map holds no headers
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Borrow the underlying transport map
    pub fn as_http(&self) -> &http::HeaderMap<HeaderValue> {
        &self.inner
    }
}

impl fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl From<http::HeaderMap<HeaderValue>> for HeaderMap {
    fn from(inner: http::HeaderMap<HeaderValue>) -> Self {
        Self { inner }
    }
}

impl From<HeaderMap> for http::HeaderMap<HeaderValue> {
    fn from(headers: HeaderMap) -> Self {
        headers.inner
    }
}

impl FromIterator<(HeaderName, HeaderValue)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (HeaderName, HeaderValue)>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<N, V, const L: usize> TryFrom<[(N, Vec<V>); L]> for HeaderMap
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    type Error = http::Error;

    fn try_from(entries: [(N, Vec<V>); L]) -> Result<Self, Self::Error> {
        let mut headers = HeaderMap::new();
        for (name, values) in entries {
            let name = HeaderName::from_bytes(name.as_ref().as_bytes())?;
            let values = values
                .iter()
                .map(|value| HeaderValue::from_str(value.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            headers.insert(name, values);
        }
        Ok(headers)
    }
}
