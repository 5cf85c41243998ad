//! Domain Port Interfaces
//!
//! Defines all boundary contracts between domain and external layers.
//!
//! ## Organization
//!
//! - **providers/** - Artifacts cached by the registry and the plugin building them
//! - **infrastructure/** - Reflection facade, injection container, client proxy, properties

/// Infrastructure collaborator ports
pub mod infrastructure;
/// Header provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use infrastructure::{
    AnnotationInspector, ClientProxy, ComputeRequest, InjectionManager, PropertySource,
};
pub use providers::{FillerPlugin, HeaderFactory, HeaderProvider};
