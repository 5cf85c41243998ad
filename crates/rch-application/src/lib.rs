//! Application Layer - REST Client Headers
//!
//! Orchestrates the header registry: selects the filler plugin, binds
//! per-method header providers, resolves per-interface header factories and
//! serves lookups on the outgoing-call path.
//!
//! ## Modules
//!
//! - `ports::registry`: link-time discovery of filler plugins
//! - `domain_services`: plugin selection, factory resolution, provider binding, default factory
//! - `use_cases`: the [`ClientHeaderRegistry`]
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `rch-domain`: value objects and port traits
//! - Pure Rust libraries for concurrency, logging and plugin registration

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
