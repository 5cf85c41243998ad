//! dill-backed injection manager
//!
//! Bridges the registry's `InjectionManager` port to a dill `Catalog`. A
//! factory type is only considered managed once it is opted in with
//! [`DillInjectionManager::manage`] and the catalog holds a builder for it.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dill::Catalog;
use rch_domain::FactoryType;
use rch_domain::error::{Error, Result};
use rch_domain::ports::{HeaderFactory, InjectionManager};
use tracing::debug;

#[derive(Clone, Copy)]
struct ManagedFactory {
    name: &'static str,
    probe: fn(&Catalog) -> bool,
    construct: fn(&Catalog) -> Result<Arc<dyn HeaderFactory>>,
}

fn probe<F: HeaderFactory>(catalog: &Catalog) -> bool {
    catalog.builders_for::<F>().next().is_some()
}

fn construct<F: HeaderFactory>(catalog: &Catalog) -> Result<Arc<dyn HeaderFactory>> {
    let instance: Arc<F> = catalog
        .get_one::<F>()
        .map_err(|e| Error::injection(format!("Failed to resolve {}: {e}", type_name::<F>())))?;
    Ok(instance)
}

/// Injection manager resolving header factories from a dill catalog
#[derive(Clone)]
pub struct DillInjectionManager {
    catalog: Catalog,
    managed: HashMap<TypeId, ManagedFactory>,
}

impl DillInjectionManager {
    /// Create a manager over `catalog`, with no managed factory types yet
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            managed: HashMap::new(),
        }
    }

    /// Opt a factory type in to container construction
    pub fn manage<F: HeaderFactory>(mut self) -> Self {
        self.managed.insert(
            TypeId::of::<F>(),
            ManagedFactory {
                name: type_name::<F>(),
                probe: probe::<F>,
                construct: construct::<F>,
            },
        );
        self
    }

    /// The underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl InjectionManager for DillInjectionManager {
    fn has_managed_beans(&self, factory: &FactoryType) -> bool {
        self.managed
            .get(&factory.type_id())
            .is_some_and(|managed| (managed.probe)(&self.catalog))
    }

    fn construct_managed(&self, factory: &FactoryType) -> Result<Arc<dyn HeaderFactory>> {
        let managed = self.managed.get(&factory.type_id()).ok_or_else(|| {
            Error::injection(format!("{} is not managed by the container", factory.name()))
        })?;
        debug!(factory = managed.name, "Constructing managed header factory");
        (managed.construct)(&self.catalog)
    }
}

impl fmt::Debug for DillInjectionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.managed.values().map(|m| m.name).collect();
        names.sort_unstable();
        f.debug_struct("DillInjectionManager")
            .field("managed", &names)
            .finish_non_exhaustive()
    }
}
