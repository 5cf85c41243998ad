//! Header provider ports
//!
//! Contracts for the artifacts the registry caches (providers and factories)
//! and for the plugin that builds providers.

/// Filler plugin interface
pub mod filler;
/// Header factory interface
pub mod header_factory;
/// Header provider interface
pub mod header_provider;

pub use filler::FillerPlugin;
pub use header_factory::HeaderFactory;
pub use header_provider::HeaderProvider;
