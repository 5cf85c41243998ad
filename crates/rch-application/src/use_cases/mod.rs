//! Use Cases
//!
//! The client header registry consumed by proxy factories and request filters.

pub mod header_registry;

pub use header_registry::ClientHeaderRegistry;
