//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Environment variable prefix for configuration (`RCH__LOGGING__LEVEL`)
pub const CONFIG_ENV_PREFIX: &str = "RCH";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "rch.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "rch";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV_VAR: &str = "RCH_LOG";

/// File name stem of rolling log files
pub const LOG_FILE_STEM: &str = "rch";

/// Targets emitting provider binding and factory resolution events
pub const REGISTRY_LOG_TARGETS: [&str; 2] = ["rch_application", "rch_providers"];

// ============================================================================
// HEADER CONSTANTS
// ============================================================================

/// Priority of the property-aware annotation plugin built from configuration
///
/// Above the link-time annotation plugin, so configured properties take effect.
pub const DEFAULT_PROPERTY_FILLER_PRIORITY: i32 = 10;
