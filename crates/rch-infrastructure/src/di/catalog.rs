//! dill Catalog - IoC Container Configuration
//!
//! Seeds a `CatalogBuilder` with the application configuration. Header
//! factories that need dependencies are added by the caller as dill
//! components, then opted in on a [`DillInjectionManager`](super::DillInjectionManager).
//!
//! ## Usage
//!
//! ```rust,ignore
//! let catalog = catalog_builder(&config)
//!     .add::<TenantHeaderFactory>()
//!     .build();
//! let manager = DillInjectionManager::new(catalog).manage::<TenantHeaderFactory>();
//! ```

use dill::CatalogBuilder;
use tracing::debug;

use crate::config::AppConfig;

/// Create a catalog builder holding the configuration
///
/// Components can depend on `Arc<AppConfig>`, `Arc<HeadersConfig>` and
/// `Arc<LoggingConfig>`.
pub fn catalog_builder(config: &AppConfig) -> CatalogBuilder {
    debug!("Seeding dill catalog with configuration");

    let mut builder = CatalogBuilder::new();
    builder
        .add_value(config.clone())
        .add_value(config.headers.clone())
        .add_value(config.logging.clone());
    builder
}
