//! Value Objects
//!
//! Immutable identities and metadata shared by every layer.

/// Header annotation metadata
pub mod annotations;
/// Interface and method identities
pub mod call_target;
/// Declarative interface descriptors
pub mod descriptor;
/// Header multimap
pub mod headers;

pub use annotations::{FactoryType, HeaderParam};
pub use call_target::{CallTarget, InterfaceId};
pub use descriptor::{InterfaceDescriptor, MethodDescriptor};
pub use headers::{HeaderMap, HeaderName, HeaderValue};
