//! Call target identities
//!
//! Client interfaces and their methods are identified by name rather than by
//! runtime reflection handles. Both identities are cheap to clone and are used
//! as keys of the header registry for the lifetime of the process.

use std::fmt;
use std::sync::Arc;

/// Identity of a client interface (its fully qualified name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceId(Arc<str>);

impl InterfaceId {
    /// Create a new interface identity
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Fully qualified interface name
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Last path segment of the interface name
    pub fn simple_name(&self) -> &str {
        self.0
            .rsplit(['.', ':'])
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InterfaceId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for InterfaceId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

/// A single invocable method of a client interface
///
/// Two targets are equal when they share the declaring interface, the method
/// name and the parameter type names, so overloaded methods are distinct keys.
/// Methods inherited from a parent interface keep the parent as their
/// declaring interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallTarget {
    declaring: InterfaceId,
    name: Arc<str>,
    parameter_types: Arc<[Arc<str>]>,
}

impl CallTarget {
    /// Create a target for a parameterless method
    pub fn new(declaring: impl Into<InterfaceId>, name: impl AsRef<str>) -> Self {
        Self {
            declaring: declaring.into(),
            name: Arc::from(name.as_ref()),
            parameter_types: Arc::from(Vec::new()),
        }
    }

    /// Set the parameter type names of the method
    pub fn with_parameters<I, S>(mut self, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parameter_types = parameter_types
            .into_iter()
            .map(|p| Arc::from(p.as_ref()))
            .collect();
        self
    }

    /// Interface declaring the method
    pub fn declaring(&self) -> &InterfaceId {
        &self.declaring
    }

    /// Method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter type names
    pub fn parameter_types(&self) -> impl ExactSizeIterator<Item = &str> {
        self.parameter_types.iter().map(AsRef::as_ref)
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

impl fmt::Display for CallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}(", self.declaring, self.name)?;
        for (i, parameter) in self.parameter_types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(parameter)?;
        }
        f.write_str(")")
    }
}
