//! Domain layer constants

/// Priority of the built-in annotation filler plugin
pub const DEFAULT_FILLER_PRIORITY: i32 = 0;

/// Opening delimiter of a computed header value (`{method}`)
pub const COMPUTE_VALUE_PREFIX: char = '{';

/// Closing delimiter of computed and property header values
pub const VALUE_EXPRESSION_SUFFIX: char = '}';

/// Opening delimiter of a property header value (`${key}`)
pub const PROPERTY_VALUE_PREFIX: &str = "${";
