//! Configuration types module

pub mod app;
pub mod headers;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use headers::HeadersConfig;
pub use logging::LoggingConfig;
