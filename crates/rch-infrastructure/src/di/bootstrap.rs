//! Registry Bootstrap
//!
//! Composition root: builds the client header registry from the link-time
//! plugins and the configuration, and bundles it with the optional injection
//! manager used when interfaces are registered.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = HeadersContext::new(config)?
//!     .with_injection_manager(manager);
//! context.register(&descriptor, &proxy)?;
//! ```

use std::sync::Arc;

use rch_application::{ClientHeaderRegistry, DefaultHeaderFactory, registered_filler_plugins};
use rch_domain::error::Result;
use rch_domain::ports::{AnnotationInspector, ClientProxy, InjectionManager};
use rch_providers::AnnotationFillerPlugin;
use tracing::info;

use crate::config::AppConfig;
use crate::di::injection::DillInjectionManager;
use crate::error_ext::ErrorContext;

/// Build a registry configured from `config`
///
/// Candidates are the plugins registered at link time, plus a property-aware
/// annotation plugin when header properties are configured. The default
/// factory propagates the configured incoming headers.
pub fn init_registry(config: &AppConfig) -> Result<ClientHeaderRegistry> {
    let mut plugins = registered_filler_plugins();
    if !config.headers.properties.is_empty() {
        plugins.push(Arc::new(AnnotationFillerPlugin::with_properties(
            Arc::new(config.headers.properties.clone()),
            config.headers.property_filler_priority,
        )));
    }

    let default_factory = DefaultHeaderFactory::propagating(&config.headers.propagate)
        .config_context("Invalid propagated header name")?;
    let registry =
        ClientHeaderRegistry::new(plugins)?.with_default_factory(Arc::new(default_factory));

    info!(
        plugin = registry.plugin().name(),
        propagated = config.headers.propagate.len(),
        properties = config.headers.properties.len(),
        "Client header registry initialized"
    );
    Ok(registry)
}

/// Configuration, registry and injection manager used together
#[derive(Debug, Clone)]
pub struct HeadersContext {
    config: Arc<AppConfig>,
    registry: Arc<ClientHeaderRegistry>,
    injection: Option<Arc<DillInjectionManager>>,
}

impl HeadersContext {
    /// Create a context without an injection manager
    pub fn new(config: AppConfig) -> Result<Self> {
        let registry = init_registry(&config)?;
        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            injection: None,
        })
    }

    /// Use `manager` to build managed header factories
    pub fn with_injection_manager(mut self, manager: DillInjectionManager) -> Self {
        self.injection = Some(Arc::new(manager));
        self
    }

    /// Application configuration
    pub fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    /// Shared header registry
    pub fn registry(&self) -> &Arc<ClientHeaderRegistry> {
        &self.registry
    }

    /// Injection manager, if any
    pub fn injection_manager(&self) -> Option<&Arc<DillInjectionManager>> {
        self.injection.as_ref()
    }

    /// Register an interface with this context's injection manager
    pub fn register(
        &self,
        inspector: &dyn AnnotationInspector,
        proxy: &Arc<dyn ClientProxy>,
    ) -> Result<()> {
        let manager = self
            .injection
            .as_deref()
            .map(|manager| manager as &dyn InjectionManager);
        self.registry.register_for_interface(inspector, proxy, manager)
    }
}
