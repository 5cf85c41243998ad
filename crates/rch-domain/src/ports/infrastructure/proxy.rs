//! Callable client instance port

use serde_json::Value;

use crate::error::BoxError;

/// Context passed to a default method computing a header value
#[derive(Debug, Clone, Copy)]
pub struct ComputeRequest<'a> {
    /// Name of the header being computed
    pub header_name: &'a str,
    /// Arguments of the invocation the header is computed for
    pub arguments: &'a [Value],
}

/// The client instance an interface was proxied into
///
/// Used only to execute default method bodies that compute header values.
pub trait ClientProxy: Send + Sync {
    /// Whether the instance exposes a default method with this name
    fn has_default_method(&self, method: &str) -> bool;

    /// Run a default method and return the header values it computes
    fn invoke_default(
        &self,
        method: &str,
        request: &ComputeRequest<'_>,
    ) -> Result<Vec<String>, BoxError>;
}
