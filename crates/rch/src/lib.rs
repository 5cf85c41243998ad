//! # REST Client Headers
//!
//! Registry of the artifacts that put headers on outgoing REST client calls:
//! a header provider per annotated method and a header factory per interface
//! that registers one.
//!
//! ## Example
//!
//! ```ignore
//! use rch::{HeaderParam, InterfaceDescriptor, MethodDescriptor};
//! use rch::infrastructure::{AppConfig, HeadersContext};
//! use rch::providers::DefaultMethodTable;
//!
//! let context = HeadersContext::new(AppConfig::default())?;
//! let greeter = InterfaceDescriptor::new("demo.Greeter").with_method(
//!     MethodDescriptor::new("greet").with_header(HeaderParam::new("X-Source", "test")),
//! );
//! context.register(&greeter, &DefaultMethodTable::new().into_proxy())?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, port traits and the error taxonomy
//! - `application` - plugin selection, factory resolution and the registry
//! - `providers` - the annotation filler plugin
//! - `infrastructure` - configuration, logging and dependency injection

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use rch_domain::*;
}

/// Application layer - the header registry and its services
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use rch_application::*;
}

/// Provider implementations - annotation filler plugin
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use rch_providers::*;
}

/// Infrastructure layer - configuration, logging and DI
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use rch_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the registry at the crate root
pub use application::ClientHeaderRegistry;
