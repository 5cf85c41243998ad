//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the client header registry.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML file, environment) |
//! | [`di`] | dill-backed injection manager and registry bootstrap |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{DillInjectionManager, HeadersContext, init_registry};
pub use error_ext::ErrorContext;
