//! Default header factory

use rch_domain::ports::HeaderFactory;
use rch_domain::value_objects::headers::InvalidHeaderName;
use rch_domain::{HeaderMap, HeaderName};

/// Header factory used when an interface registers none
///
/// Keeps the outgoing headers and copies the incoming headers listed in
/// `propagate`, replacing outgoing values of the same name. With nothing to
/// propagate it returns the outgoing headers unchanged.
#[derive(Debug, Clone, Default)]
pub struct DefaultHeaderFactory {
    propagate: Vec<HeaderName>,
}

impl DefaultHeaderFactory {
    /// Create a pass-through factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory propagating the named incoming headers
    ///
    /// Fails if a name is not a valid HTTP header name.
    pub fn propagating<I, S>(headers: I) -> Result<Self, InvalidHeaderName>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let propagate = headers
            .into_iter()
            .map(|name| HeaderName::from_bytes(name.as_ref().as_bytes()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { propagate })
    }

    /// Names of the propagated headers
    pub fn propagated(&self) -> &[HeaderName] {
        &self.propagate
    }
}

impl HeaderFactory for DefaultHeaderFactory {
    fn update(&self, incoming: &HeaderMap, outgoing: &HeaderMap) -> HeaderMap {
        let mut headers = outgoing.clone();
        for name in &self.propagate {
            if incoming.contains(name) {
                headers.insert(name.clone(), incoming.get_all(name).into_iter().cloned());
            }
        }
        headers
    }
}
