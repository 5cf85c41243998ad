//! Declarative interface descriptors
//!
//! An [`InterfaceDescriptor`] states what reflection would report about a
//! client interface: its methods, which of them have default bodies, and the
//! header annotations on the interface and on each method. It is the standard
//! [`AnnotationInspector`] implementation.

use std::sync::Arc;

use crate::ports::infrastructure::AnnotationInspector;
use crate::value_objects::{CallTarget, FactoryType, HeaderParam, InterfaceId};

/// One method declared by a client interface
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    name: String,
    parameter_types: Vec<String>,
    default_body: bool,
    headers: Vec<HeaderParam>,
}

impl MethodDescriptor {
    /// Describe a parameterless abstract method
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter_types: Vec::new(),
            default_body: false,
            headers: Vec::new(),
        }
    }

    /// Set the parameter type names
    pub fn with_parameters<I, S>(mut self, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_types = parameter_types.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a header annotation
    pub fn with_header(mut self, header: HeaderParam) -> Self {
        self.headers.push(header);
        self
    }

    /// Mark the method as having a default body
    pub fn with_default_body(mut self) -> Self {
        self.default_body = true;
        self
    }

    /// Method name
    pub fn name(&self) -> &str {
        &self.name
    }

    fn target(&self, declaring: &InterfaceId) -> CallTarget {
        CallTarget::new(declaring.clone(), &self.name).with_parameters(&self.parameter_types)
    }

    fn matches(&self, target: &CallTarget) -> bool {
        self.name == target.name()
            && self.parameter_types.len() == target.arity()
            && self
                .parameter_types
                .iter()
                .zip(target.parameter_types())
                .all(|(own, other)| own == other)
    }

    fn same_signature(&self, other: &MethodDescriptor) -> bool {
        self.name == other.name && self.parameter_types == other.parameter_types
    }
}

/// Description of a client interface and its header annotations
#[derive(Debug, Clone)]
pub struct InterfaceDescriptor {
    id: InterfaceId,
    headers: Vec<HeaderParam>,
    methods: Vec<MethodDescriptor>,
    headers_factory: Option<FactoryType>,
    parents: Vec<Arc<InterfaceDescriptor>>,
}

impl InterfaceDescriptor {
    /// Describe an interface with no methods or annotations
    pub fn new(id: impl Into<InterfaceId>) -> Self {
        Self {
            id: id.into(),
            headers: Vec::new(),
            methods: Vec::new(),
            headers_factory: None,
            parents: Vec::new(),
        }
    }

    /// Declare a method
    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Attach an interface-level header annotation
    pub fn with_header(mut self, header: HeaderParam) -> Self {
        self.headers.push(header);
        self
    }

    /// Register a custom header factory for the interface
    pub fn with_headers_factory(mut self, factory: FactoryType) -> Self {
        self.headers_factory = Some(factory);
        self
    }

    /// Inherit the methods of a parent interface
    pub fn extending(mut self, parent: Arc<InterfaceDescriptor>) -> Self {
        self.parents.push(parent);
        self
    }

    /// Interface identity
    pub fn id(&self) -> &InterfaceId {
        &self.id
    }

    /// Target of a method declared directly by this interface
    pub fn target(&self, method: &str) -> Option<CallTarget> {
        self.methods
            .iter()
            .find(|m| m.name == method)
            .map(|m| m.target(&self.id))
    }

    fn collect_methods<'a>(&'a self, out: &mut Vec<(&'a InterfaceId, &'a MethodDescriptor)>) {
        for method in &self.methods {
            if !out.iter().any(|(_, seen)| seen.same_signature(method)) {
                out.push((&self.id, method));
            }
        }
        for parent in &self.parents {
            parent.collect_methods(out);
        }
    }

    fn find_interface(&self, id: &InterfaceId) -> Option<&InterfaceDescriptor> {
        if &self.id == id {
            return Some(self);
        }
        self.parents.iter().find_map(|parent| parent.find_interface(id))
    }

    fn find_method(&self, target: &CallTarget) -> Option<&MethodDescriptor> {
        self.find_interface(target.declaring())?
            .methods
            .iter()
            .find(|m| m.matches(target))
    }
}

impl AnnotationInspector for InterfaceDescriptor {
    fn interface(&self) -> &InterfaceId {
        &self.id
    }

    fn methods(&self) -> Vec<CallTarget> {
        let mut methods = Vec::new();
        self.collect_methods(&mut methods);
        methods
            .into_iter()
            .map(|(declaring, method)| method.target(declaring))
            .collect()
    }

    fn is_default_method(&self, target: &CallTarget) -> bool {
        self.find_method(target).is_some_and(|m| m.default_body)
    }

    fn method_headers(&self, target: &CallTarget) -> Vec<HeaderParam> {
        self.find_method(target)
            .map(|m| m.headers.clone())
            .unwrap_or_default()
    }

    fn interface_headers(&self, interface: &InterfaceId) -> Vec<HeaderParam> {
        self.find_interface(interface)
            .map(|i| i.headers.clone())
            .unwrap_or_default()
    }

    fn headers_factory(&self) -> Option<FactoryType> {
        self.headers_factory.clone()
    }
}
