//! Domain Services
//!
//! The building blocks the header registry orchestrates during registration.

/// Default header factory
pub mod default_factory;
/// Header factory resolution
pub mod factory_resolver;
/// Filler plugin selection
pub mod plugin_selector;
/// Per-method provider binding
pub mod provider_binder;

pub use default_factory::DefaultHeaderFactory;
pub use factory_resolver::{FactoryResolver, InstanceFactory};
pub use plugin_selector::select_plugin;
pub use provider_binder::ProviderBinder;
