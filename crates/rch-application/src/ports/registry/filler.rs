//! Filler Plugin Registry
//!
//! Auto-registration system for header filler plugins.
//! Plugins register themselves into a `linkme` distributed slice and are
//! discovered at runtime by iterating it.

use std::sync::Arc;

use rch_domain::ports::FillerPlugin;

/// Registry entry for header filler plugins
///
/// Each plugin implementation registers itself with this entry using
/// `#[linkme::distributed_slice(FILLER_PLUGINS)]`. The entry carries metadata
/// and a factory function creating the plugin instance.
pub struct FillerPluginEntry {
    /// Unique plugin name (e.g., "annotation")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the plugin instance
    pub factory: fn() -> Arc<dyn FillerPlugin>,
}

// Auto-collection via linkme distributed slices - plugins submit entries at compile time
#[linkme::distributed_slice]
pub static FILLER_PLUGINS: [FillerPluginEntry] = [..];

/// Instantiate every registered filler plugin
///
/// Link order is not stable across builds, so entries are ordered by name to
/// keep priority tie-breaking deterministic.
pub fn registered_filler_plugins() -> Vec<Arc<dyn FillerPlugin>> {
    let mut entries: Vec<&FillerPluginEntry> = FILLER_PLUGINS.iter().collect();
    entries.sort_by_key(|entry| entry.name);
    entries.into_iter().map(|entry| (entry.factory)()).collect()
}

/// List all registered filler plugins
///
/// Returns a list of (name, description) tuples, ordered by name.
pub fn list_filler_plugins() -> Vec<(&'static str, &'static str)> {
    let mut plugins: Vec<(&'static str, &'static str)> = FILLER_PLUGINS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    plugins.sort_unstable();
    plugins
}
