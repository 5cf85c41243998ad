//! Dependency injection port

use std::sync::Arc;

use crate::error::Result;
use crate::ports::providers::HeaderFactory;
use crate::value_objects::FactoryType;

/// Container able to construct managed header factories
pub trait InjectionManager: Send + Sync {
    /// Whether the container knows at least one managed definition for the type
    fn has_managed_beans(&self, factory: &FactoryType) -> bool;

    /// Construct an instance through the container, resolving its dependencies
    fn construct_managed(&self, factory: &FactoryType) -> Result<Arc<dyn HeaderFactory>>;
}
