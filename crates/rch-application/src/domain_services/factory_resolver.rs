//! Header factory resolution
//!
//! Instantiates the factory type an interface declares through its
//! register-headers annotation. A supplied injection container is preferred
//! when it manages the type; otherwise the type's no-argument constructor is
//! used.

use std::fmt;
use std::sync::Arc;

use rch_domain::error::{BoxError, Error, Result};
use rch_domain::ports::{HeaderFactory, InjectionManager};
use rch_domain::{FactoryType, InterfaceId};
use tracing::debug;

/// How a header factory instance gets built
#[derive(Clone, Copy)]
pub enum InstanceFactory<'a> {
    /// Delegate to the injection container, which resolves further dependencies
    Managed(&'a dyn InjectionManager),
    /// Call the type's no-argument constructor
    Direct,
}

impl<'a> InstanceFactory<'a> {
    /// Choose the construction strategy for a factory type
    pub fn select(factory: &FactoryType, manager: Option<&'a dyn InjectionManager>) -> Self {
        match manager {
            Some(manager) if manager.has_managed_beans(factory) => Self::Managed(manager),
            _ => Self::Direct,
        }
    }

    /// Build an instance of the factory type
    pub fn construct(
        &self,
        factory: &FactoryType,
    ) -> std::result::Result<Arc<dyn HeaderFactory>, BoxError> {
        match self {
            Self::Managed(manager) => manager.construct_managed(factory).map_err(Into::into),
            Self::Direct => factory.construct(),
        }
    }

    /// Whether construction goes through the container
    pub fn is_managed(&self) -> bool {
        matches!(self, Self::Managed(_))
    }
}

impl fmt::Debug for InstanceFactory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Managed(_) => f.write_str("Managed"),
            Self::Direct => f.write_str("Direct"),
        }
    }
}

/// Resolves declared header factory types into instances
///
/// Stateless: caching the result is the registry's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryResolver;

impl FactoryResolver {
    /// Create a new resolver
    pub fn new() -> Self {
        Self
    }

    /// Instantiate `factory`, the header factory declared by `interface`
    ///
    /// Any construction failure is reported as [`Error::Definition`] naming
    /// both the factory type and the interface.
    pub fn resolve_factory(
        &self,
        factory: &FactoryType,
        interface: &InterfaceId,
        manager: Option<&dyn InjectionManager>,
    ) -> Result<Arc<dyn HeaderFactory>> {
        let strategy = InstanceFactory::select(factory, manager);
        debug!(
            factory = factory.name(),
            interface = %interface,
            strategy = ?strategy,
            "Resolving client header factory"
        );

        let instance = strategy
            .construct(factory)
            .map_err(|e| Error::definition(factory.name(), interface.name(), e))?;

        if !factory.describes(&*instance) {
            return Err(Error::definition(
                factory.name(),
                interface.name(),
                format!("constructed instance is not a {}", factory.name()),
            ));
        }

        Ok(instance)
    }
}
