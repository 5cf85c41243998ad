//! Application Ports
//!
//! - **registry/** - Auto-registration system for filler plugins

/// Plugin registry for link-time plugin discovery
pub mod registry;

pub use registry::{
    FILLER_PLUGINS, FillerPluginEntry, list_filler_plugins, registered_filler_plugins,
};
