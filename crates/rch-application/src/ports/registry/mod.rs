//! Plugin Registry System
//!
//! Defines the auto-registration infrastructure for header filler plugins.
//! Uses the `linkme` crate for compile-time registration of plugins that are
//! discovered and instantiated when a registry is created.
//!
//! ## Usage
//!
//! ### Registering a Plugin (in rch-providers)
//!
//! ```ignore
//! use rch_application::ports::registry::{FillerPluginEntry, FILLER_PLUGINS};
//!
//! #[linkme::distributed_slice(FILLER_PLUGINS)]
//! static ANNOTATION_FILLER: FillerPluginEntry = FillerPluginEntry {
//!     name: "annotation",
//!     description: "Header annotation filler",
//!     factory: annotation_filler,
//! };
//! ```
//!
//! ### Discovering Plugins
//!
//! ```ignore
//! use rch_application::ports::registry::registered_filler_plugins;
//!
//! let registry = ClientHeaderRegistry::new(registered_filler_plugins())?;
//! ```

pub mod filler;

pub use filler::{
    FILLER_PLUGINS, FillerPluginEntry, list_filler_plugins, registered_filler_plugins,
};
