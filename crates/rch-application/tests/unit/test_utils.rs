//! Shared fixtures for application tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rch_domain::error::{Error, Result};
use rch_domain::ports::{
    AnnotationInspector, ClientProxy, FillerPlugin, HeaderFactory, HeaderProvider,
    InjectionManager,
};
use rch_domain::{CallTarget, FactoryType, HeaderMap, HeaderName, HeaderValue};
use rch_providers::DefaultMethodTable;

/// Plugin that never binds anything, identified by name and priority
pub struct NamedPlugin {
    name: &'static str,
    priority: i32,
}

impl NamedPlugin {
    pub fn shared(name: &'static str, priority: i32) -> Arc<dyn FillerPlugin> {
        Arc::new(Self { name, priority })
    }
}

impl FillerPlugin for NamedPlugin {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn bind(
        &self,
        _target: &CallTarget,
        _inspector: &dyn AnnotationInspector,
        _proxy: &Arc<dyn ClientProxy>,
    ) -> Result<Option<Arc<dyn HeaderProvider>>> {
        Ok(None)
    }
}

/// Factory adding a fixed marker header
#[derive(Debug, Default)]
pub struct MarkerFactory;

impl HeaderFactory for MarkerFactory {
    fn update(&self, _incoming: &HeaderMap, outgoing: &HeaderMap) -> HeaderMap {
        let mut headers = outgoing.clone();
        headers.insert(
            HeaderName::from_static("x-marker"),
            [HeaderValue::from_static("direct")],
        );
        headers
    }
}

/// Factory that only a container can build
#[derive(Debug)]
pub struct TenantFactory {
    pub tenant: String,
}

impl HeaderFactory for TenantFactory {
    fn update(&self, _incoming: &HeaderMap, outgoing: &HeaderMap) -> HeaderMap {
        let mut headers = outgoing.clone();
        let tenant = HeaderValue::from_str(&self.tenant).expect("valid tenant");
        headers.insert(HeaderName::from_static("x-tenant"), [tenant]);
        headers
    }
}

/// Injection manager managing [`TenantFactory`] and counting constructions
#[derive(Default)]
pub struct TenantManager {
    pub constructed: AtomicUsize,
}

impl InjectionManager for TenantManager {
    fn has_managed_beans(&self, factory: &FactoryType) -> bool {
        factory == &FactoryType::managed::<TenantFactory>()
    }

    fn construct_managed(&self, factory: &FactoryType) -> Result<Arc<dyn HeaderFactory>> {
        if !self.has_managed_beans(factory) {
            return Err(Error::injection(format!("{} is not managed", factory.name())));
        }
        self.constructed.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(TenantFactory {
            tenant: "acme".to_string(),
        }))
    }
}

/// Injection manager that manages nothing
pub struct EmptyManager;

impl InjectionManager for EmptyManager {
    fn has_managed_beans(&self, _factory: &FactoryType) -> bool {
        false
    }

    fn construct_managed(&self, factory: &FactoryType) -> Result<Arc<dyn HeaderFactory>> {
        Err(Error::injection(format!("{} is not managed", factory.name())))
    }
}

/// Client proxy without default methods
pub fn empty_proxy() -> Arc<dyn ClientProxy> {
    DefaultMethodTable::new().into_proxy()
}
