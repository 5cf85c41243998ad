//! Infrastructure ports
//!
//! Collaborators the registry consumes but does not own: the reflection
//! facade, the optional injection container, the callable client instance and
//! property lookup.

/// Dependency injection container interface
pub mod injection;
/// Annotation inspection interface
pub mod inspection;
/// Property lookup interface
pub mod properties;
/// Callable client instance interface
pub mod proxy;

pub use injection::InjectionManager;
pub use inspection::AnnotationInspector;
pub use properties::PropertySource;
pub use proxy::{ClientProxy, ComputeRequest};
