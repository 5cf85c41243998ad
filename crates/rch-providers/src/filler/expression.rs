//! Header value expressions
//!
//! Each value of a header annotation is one of:
//!
//! | Form | Meaning |
//! |------|---------|
//! | `{method}` | computed by the client's default method `method` |
//! | `${key}` | looked up in the plugin's property source |
//! | anything else | literal value |

use rch_domain::constants::{COMPUTE_VALUE_PREFIX, PROPERTY_VALUE_PREFIX, VALUE_EXPRESSION_SUFFIX};
use rch_domain::HeaderValue;
use rch_domain::value_objects::headers::InvalidHeaderValue;

/// A parsed header value expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueExpression {
    /// Literal header value, validated when parsed
    Literal(HeaderValue),
    /// Property placeholder key
    Property(String),
    /// Default method computing the value
    Compute(String),
}

impl ValueExpression {
    /// Parse a raw annotation value
    ///
    /// Fails only for a literal that is not a valid header value.
    pub fn parse(raw: &str) -> Result<Self, InvalidHeaderValue> {
        if let Some(key) = raw
            .strip_prefix(PROPERTY_VALUE_PREFIX)
            .and_then(|rest| rest.strip_suffix(VALUE_EXPRESSION_SUFFIX))
        {
            return Ok(Self::Property(key.trim().to_string()));
        }
        if let Some(method) = raw
            .strip_prefix(COMPUTE_VALUE_PREFIX)
            .and_then(|rest| rest.strip_suffix(VALUE_EXPRESSION_SUFFIX))
        {
            return Ok(Self::Compute(method.trim().to_string()));
        }
        HeaderValue::from_str(raw).map(Self::Literal)
    }

    /// Whether the value is computed by a default method
    pub fn is_compute(&self) -> bool {
        matches!(self, Self::Compute(_))
    }
}
