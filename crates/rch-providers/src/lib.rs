//! # REST Client Headers - Provider Implementations
//!
//! Concrete implementations of the domain header ports.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`filler`] | Annotation filler plugin, registered into the plugin registry |
//! | [`header`] | Header provider assembled from fillers |
//! | [`proxy`] | Closure-backed client proxy for default methods |
//!
//! Linking this crate is enough to make the annotation plugin discoverable
//! through `rch_application::ports::registry::registered_filler_plugins`.

pub mod filler;
pub mod header;
pub mod proxy;

pub use filler::{AnnotationFillerPlugin, HeaderFiller, ValueExpression};
pub use header::AnnotatedHeaderProvider;
pub use proxy::DefaultMethodTable;
