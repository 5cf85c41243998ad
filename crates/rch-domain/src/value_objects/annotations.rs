//! Header annotation metadata
//!
//! Declarative equivalents of the client header annotations: a per-header
//! parameter attached to a method or an interface, and the factory type an
//! interface registers to mutate outgoing headers.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;
use crate::ports::providers::HeaderFactory;

/// A header to attach to every invocation of the annotated method or interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderParam {
    /// Header name
    pub name: String,
    /// Value expressions, interpreted by the selected filler plugin
    pub values: Vec<String>,
    /// Whether a failure to produce the value fails the invocation
    pub required: bool,
}

impl HeaderParam {
    /// Create a required header parameter with a single value expression
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
            required: true,
        }
    }

    /// Create a required header parameter with several value expressions
    pub fn with_values<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            required: true,
        }
    }

    /// Mark the header as optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

type Constructor = Arc<dyn Fn() -> Result<Arc<dyn HeaderFactory>, BoxError> + Send + Sync>;

/// The header factory type declared by an interface
///
/// Carries the type identity used to look the factory up in an injection
/// container, and the no-argument constructor used when no container manages
/// the type. A type without a constructor can only be built by a container.
#[derive(Clone)]
pub struct FactoryType {
    type_id: TypeId,
    name: &'static str,
    constructor: Option<Constructor>,
}

impl FactoryType {
    /// Factory type constructed through its `Default` implementation
    pub fn of<F>() -> Self
    where
        F: HeaderFactory + Default,
    {
        let constructor: Constructor =
            Arc::new(|| Ok(Arc::new(F::default()) as Arc<dyn HeaderFactory>));
        Self {
            type_id: TypeId::of::<F>(),
            name: type_name::<F>(),
            constructor: Some(constructor),
        }
    }

    /// Factory type with a fallible no-argument constructor
    pub fn with_constructor<F, C>(constructor: C) -> Self
    where
        F: HeaderFactory,
        C: Fn() -> Result<F, BoxError> + Send + Sync + 'static,
    {
        let constructor: Constructor = Arc::new(move || {
            constructor().map(|factory| Arc::new(factory) as Arc<dyn HeaderFactory>)
        });
        Self {
            type_id: TypeId::of::<F>(),
            name: type_name::<F>(),
            constructor: Some(constructor),
        }
    }

    /// Factory type without an accessible no-argument constructor
    pub fn managed<F: HeaderFactory>() -> Self {
        Self {
            type_id: TypeId::of::<F>(),
            name: type_name::<F>(),
            constructor: None,
        }
    }

    /// Type identity of the factory
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Type name of the factory
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the type can be constructed without a container
    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Whether `factory` is an instance of this type
    pub fn describes(&self, factory: &dyn HeaderFactory) -> bool {
        Any::type_id(factory.as_any()) == self.type_id
    }

    /// Run the no-argument constructor
    pub fn construct(&self) -> Result<Arc<dyn HeaderFactory>, BoxError> {
        match &self.constructor {
            Some(constructor) => constructor(),
            None => Err(format!("{} has no accessible no-argument constructor", self.name).into()),
        }
    }
}

impl PartialEq for FactoryType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for FactoryType {}

impl fmt::Debug for FactoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryType")
            .field("name", &self.name)
            .field("has_constructor", &self.has_constructor())
            .finish()
    }
}
