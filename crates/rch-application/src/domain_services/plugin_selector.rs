//! Filler plugin selection
//!
//! Exactly one filler plugin serves a registry. It is chosen once, when the
//! registry is created, as the plugin declaring the greatest priority.

use std::sync::Arc;

use rch_domain::error::{Error, Result};
use rch_domain::ports::FillerPlugin;

/// Pick the plugin with the strictly greatest priority
///
/// On a tie the plugin seen first keeps its place, so callers control the
/// outcome through iteration order. An empty candidate set is a startup
/// failure: there is no built-in fallback.
pub fn select_plugin<I>(plugins: I) -> Result<Arc<dyn FillerPlugin>>
where
    I: IntoIterator<Item = Arc<dyn FillerPlugin>>,
{
    let mut selected: Option<Arc<dyn FillerPlugin>> = None;
    for plugin in plugins {
        if selected
            .as_ref()
            .is_none_or(|current| plugin.priority() > current.priority())
        {
            selected = Some(plugin);
        }
    }
    selected.ok_or_else(|| Error::startup("Unable to find a header filler plugin implementation"))
}
