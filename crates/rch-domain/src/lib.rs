//! # Domain Layer
//!
//! Core types of the REST client header registry: identities of client
//! interfaces and methods, the header multimap, annotation metadata, and the
//! port traits implemented by the outer layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `InterfaceId`, `CallTarget`, `HeaderMap`, `HeaderParam`, `FactoryType`, descriptors |
//! | [`ports`] | `HeaderProvider`, `HeaderFactory`, `FillerPlugin`, `AnnotationInspector`, `InjectionManager`, `ClientProxy` |
//! | [`error`] | Error taxonomy shared by every crate |
//! | [`constants`] | Value expression delimiters and default priorities |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{BoxError, Error, Result};
pub use value_objects::*;
