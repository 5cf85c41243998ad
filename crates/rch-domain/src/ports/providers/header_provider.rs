//! Per-method header provider port

use std::fmt::Debug;

use serde_json::Value;

use crate::error::Result;
use crate::value_objects::{CallTarget, HeaderMap};

/// Produces the headers attached to every invocation of one call target
///
/// Providers are immutable once bound. Any state they need (the callable
/// instance used for computed values, property sources) is captured at
/// construction.
pub trait HeaderProvider: Send + Sync + Debug {
    /// The call target this provider is bound to
    fn target(&self) -> &CallTarget;

    /// Add this provider's headers to `headers`, replacing same-named entries
    fn add_headers(&self, arguments: &[Value], headers: &mut HeaderMap) -> Result<()>;

    /// Headers for an invocation with the given arguments
    fn headers(&self, arguments: &[Value]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        self.add_headers(arguments, &mut headers)?;
        Ok(headers)
    }
}
