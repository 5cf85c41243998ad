//! Main application configuration

use serde::{Deserialize, Serialize};

use super::headers::HeadersConfig;
use super::logging::LoggingConfig;

/// Root configuration of the header registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Header registry configuration
    #[serde(default)]
    pub headers: HeadersConfig,
}
