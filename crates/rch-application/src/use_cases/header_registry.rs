//! Client header registry
//!
//! Associates client call targets with the artifacts that inject outgoing
//! headers: a header provider per qualifying method and a header factory per
//! interface registering one. The registry is populated once per interface,
//! when its client proxy is created, and consulted on every outgoing call.
//!
//! Both maps are concurrent. Entries are published whole (as `Arc`s) and are
//! never removed; re-registering an interface overwrites its entries with
//! equivalent ones. No map guard is held while the plugin, the inspector or
//! the injection container run.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use rch_domain::error::Result;
use rch_domain::ports::{
    AnnotationInspector, ClientProxy, FillerPlugin, HeaderFactory, HeaderProvider,
    InjectionManager,
};
use rch_domain::{CallTarget, HeaderMap, InterfaceId};
use serde_json::Value;
use tracing::{debug, info};

use crate::domain_services::{
    DefaultHeaderFactory, FactoryResolver, ProviderBinder, select_plugin,
};
use crate::ports::registry::registered_filler_plugins;

/// Registry of header providers (per method) and header factories (per interface)
pub struct ClientHeaderRegistry {
    binder: ProviderBinder,
    resolver: FactoryResolver,
    default_factory: Arc<dyn HeaderFactory>,
    providers: DashMap<CallTarget, Arc<dyn HeaderProvider>>,
    factories: DashMap<InterfaceId, Arc<dyn HeaderFactory>>,
}

impl ClientHeaderRegistry {
    /// Create a registry served by the highest-priority plugin among `plugins`
    ///
    /// Fails with a startup error when `plugins` is empty.
    pub fn new<I>(plugins: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn FillerPlugin>>,
    {
        let plugin = select_plugin(plugins)?;
        info!(
            plugin = plugin.name(),
            priority = plugin.priority(),
            "Selected header filler plugin"
        );
        Ok(Self::with_plugin(plugin))
    }

    /// Create a registry from the plugins registered at link time
    pub fn from_registered_plugins() -> Result<Self> {
        Self::new(registered_filler_plugins())
    }

    /// Create a registry served by a known plugin
    pub fn with_plugin(plugin: Arc<dyn FillerPlugin>) -> Self {
        Self {
            binder: ProviderBinder::new(plugin),
            resolver: FactoryResolver::new(),
            default_factory: Arc::new(DefaultHeaderFactory::new()),
            providers: DashMap::new(),
            factories: DashMap::new(),
        }
    }

    /// Replace the factory applied to interfaces that register none
    pub fn with_default_factory(mut self, factory: Arc<dyn HeaderFactory>) -> Self {
        self.default_factory = factory;
        self
    }

    /// The selected filler plugin
    pub fn plugin(&self) -> &Arc<dyn FillerPlugin> {
        self.binder.plugin()
    }

    /// Header provider bound to a method, if it qualified at registration
    pub fn get_provider(&self, target: &CallTarget) -> Option<Arc<dyn HeaderProvider>> {
        self.providers
            .get(target)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Header factory registered by an interface, if it declares one
    pub fn get_factory(&self, interface: &InterfaceId) -> Option<Arc<dyn HeaderFactory>> {
        self.factories
            .get(interface)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// The shared factory for interfaces that register none
    pub fn default_factory(&self) -> &Arc<dyn HeaderFactory> {
        &self.default_factory
    }

    /// Registered factory of an interface, or the default factory
    pub fn factory_or_default(&self, interface: &InterfaceId) -> Arc<dyn HeaderFactory> {
        self.get_factory(interface)
            .unwrap_or_else(|| Arc::clone(&self.default_factory))
    }

    /// Register providers for every method of an interface, and its factory
    ///
    /// Methods are bound first and the factory is resolved last; entries are
    /// committed only when both succeed, so a failing interface leaves no
    /// trace. `manager`, when present, is preferred for building factories it
    /// manages.
    pub fn register_for_interface(
        &self,
        inspector: &dyn AnnotationInspector,
        proxy: &Arc<dyn ClientProxy>,
        manager: Option<&dyn InjectionManager>,
    ) -> Result<()> {
        let interface = inspector.interface();

        let mut bound = Vec::new();
        for target in inspector.methods() {
            if let Some(provider) = self.binder.bind_if_applicable(&target, inspector, proxy)? {
                bound.push((target, provider));
            }
        }

        let factory = match inspector.headers_factory() {
            Some(factory_type) => Some(self.resolver.resolve_factory(
                &factory_type,
                interface,
                manager,
            )?),
            None => None,
        };

        let provider_count = bound.len();
        for (target, provider) in bound {
            self.providers.insert(target, provider);
        }
        let has_factory = factory.is_some();
        if let Some(factory) = factory {
            self.factories.insert(interface.clone(), factory);
        }

        debug!(
            interface = %interface,
            providers = provider_count,
            custom_factory = has_factory,
            "Registered client headers"
        );
        Ok(())
    }

    /// Register an interface without an injection container
    #[deprecated(note = "use `register_for_interface` with an injection manager")]
    pub fn register_for_interface_without_manager(
        &self,
        inspector: &dyn AnnotationInspector,
        proxy: &Arc<dyn ClientProxy>,
    ) -> Result<()> {
        self.register_for_interface(inspector, proxy, None)
    }

    /// Final outgoing headers for one invocation of `target` through `interface`
    ///
    /// Starts from `outgoing`, applies the method's provider (replacing
    /// same-named headers), then hands the result to the interface's factory,
    /// or the default factory, together with `incoming`.
    pub fn outgoing_headers(
        &self,
        interface: &InterfaceId,
        target: &CallTarget,
        arguments: &[Value],
        incoming: &HeaderMap,
        outgoing: &HeaderMap,
    ) -> Result<HeaderMap> {
        let mut headers = outgoing.clone();
        if let Some(provider) = self.get_provider(target) {
            provider.add_headers(arguments, &mut headers)?;
        }
        let factory = self.factory_or_default(interface);
        Ok(factory.update(incoming, &headers))
    }

    /// Number of methods with a bound provider
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Number of interfaces with a registered factory
    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }
}

impl fmt::Debug for ClientHeaderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHeaderRegistry")
            .field("plugin", &self.plugin().name())
            .field("providers", &self.providers.len())
            .field("factories", &self.factories.len())
            .finish_non_exhaustive()
    }
}
