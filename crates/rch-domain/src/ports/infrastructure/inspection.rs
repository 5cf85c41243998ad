//! Annotation inspection port
//!
//! Replaces runtime reflection: implementations describe an interface's
//! method table and the header annotations attached to it.

use crate::value_objects::{CallTarget, FactoryType, HeaderParam, InterfaceId};

/// Reflection facade over one client interface
pub trait AnnotationInspector: Send + Sync {
    /// The interface being described
    fn interface(&self) -> &InterfaceId;

    /// Every method exposed through the interface's method table, including
    /// methods inherited from parent interfaces
    fn methods(&self) -> Vec<CallTarget>;

    /// Whether the method has a default body executed on the client side
    fn is_default_method(&self, target: &CallTarget) -> bool;

    /// Header annotations placed directly on the method
    fn method_headers(&self, target: &CallTarget) -> Vec<HeaderParam>;

    /// Header annotations placed on an interface (the inspected one or one of its parents)
    fn interface_headers(&self, interface: &InterfaceId) -> Vec<HeaderParam>;

    /// Factory type requested by the register-headers annotation, if present
    fn headers_factory(&self) -> Option<FactoryType>;
}
