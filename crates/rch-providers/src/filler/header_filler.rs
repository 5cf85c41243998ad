//! Single-header filler
//!
//! Produces the values of one header for an invocation, from literals,
//! properties or a default method of the client.

use std::fmt;
use std::sync::Arc;

use rch_domain::error::{BoxError, Error, Result};
use rch_domain::ports::{ClientProxy, ComputeRequest, PropertySource};
use rch_domain::{HeaderName, HeaderValue};
use serde_json::Value;
use tracing::warn;

use super::expression::ValueExpression;

/// Fills one header of an outgoing request
pub struct HeaderFiller {
    name: HeaderName,
    declared: String,
    expressions: Vec<ValueExpression>,
    required: bool,
    proxy: Arc<dyn ClientProxy>,
    properties: Option<Arc<dyn PropertySource>>,
}

impl HeaderFiller {
    pub(crate) fn new(
        name: HeaderName,
        declared: String,
        expressions: Vec<ValueExpression>,
        required: bool,
        proxy: Arc<dyn ClientProxy>,
        properties: Option<Arc<dyn PropertySource>>,
    ) -> Self {
        Self {
            name,
            declared,
            expressions,
            required,
            proxy,
            properties,
        }
    }

    /// Header name
    pub fn name(&self) -> &HeaderName {
        &self.name
    }

    /// Values of the header for an invocation
    ///
    /// `Ok(None)` means the header is skipped: it produced no value, or an
    /// optional header failed. Property and computed values are checked
    /// against HTTP header value rules; a value that fails the check counts
    /// as a failure of the header.
    pub fn values(&self, arguments: &[Value]) -> Result<Option<Vec<HeaderValue>>> {
        let mut values = Vec::with_capacity(self.expressions.len());
        for expression in &self.expressions {
            match expression {
                ValueExpression::Literal(value) => values.push(value.clone()),
                ValueExpression::Property(key) => {
                    let Some(raw) = self.properties.as_ref().and_then(|p| p.property(key)) else {
                        return self.skip_or_fail(format!("property '{key}' is not defined"), None);
                    };
                    match HeaderValue::from_str(&raw) {
                        Ok(value) => values.push(value),
                        Err(e) => {
                            return self.skip_or_fail(
                                format!("property '{key}' is not a valid header value"),
                                Some(e.into()),
                            );
                        }
                    }
                }
                ValueExpression::Compute(method) => {
                    let request = ComputeRequest {
                        header_name: &self.declared,
                        arguments,
                    };
                    let computed = match self.proxy.invoke_default(method, &request) {
                        Ok(computed) => computed,
                        Err(e) => {
                            return self
                                .skip_or_fail(format!("default method '{method}' failed"), Some(e));
                        }
                    };
                    for raw in computed {
                        match HeaderValue::from_str(&raw) {
                            Ok(value) => values.push(value),
                            Err(e) => {
                                let message = format!(
                                    "default method '{method}' returned an invalid header value"
                                );
                                return self.skip_or_fail(message, Some(e.into()));
                            }
                        }
                    }
                }
            }
        }
        Ok((!values.is_empty()).then_some(values))
    }

    fn skip_or_fail(
        &self,
        message: String,
        source: Option<BoxError>,
    ) -> Result<Option<Vec<HeaderValue>>> {
        if self.required {
            return Err(match source {
                Some(source) => {
                    Error::header_computation_with_source(&self.declared, message, source)
                }
                None => Error::header_computation(&self.declared, message),
            });
        }
        match &source {
            Some(source) => {
                warn!(
                    header = %self.declared,
                    error = %source,
                    "{message}; skipping optional header"
                );
            }
            None => warn!(header = %self.declared, "{message}; skipping optional header"),
        }
        Ok(None)
    }
}

impl fmt::Debug for HeaderFiller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderFiller")
            .field("name", &self.name)
            .field("expressions", &self.expressions)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}
