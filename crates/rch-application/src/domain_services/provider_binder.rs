//! Per-method provider binding

use std::sync::Arc;

use rch_domain::error::Result;
use rch_domain::ports::{AnnotationInspector, ClientProxy, FillerPlugin, HeaderProvider};
use rch_domain::CallTarget;
use tracing::{debug, trace};

/// Binds header providers to methods using the selected filler plugin
#[derive(Clone)]
pub struct ProviderBinder {
    plugin: Arc<dyn FillerPlugin>,
}

impl ProviderBinder {
    /// Create a binder delegating to `plugin`
    pub fn new(plugin: Arc<dyn FillerPlugin>) -> Self {
        Self { plugin }
    }

    /// The plugin this binder delegates to
    pub fn plugin(&self) -> &Arc<dyn FillerPlugin> {
        &self.plugin
    }

    /// Build a provider for `target` if the plugin decides it qualifies
    ///
    /// `Ok(None)` is the normal outcome for methods without header annotations.
    pub fn bind_if_applicable(
        &self,
        target: &CallTarget,
        inspector: &dyn AnnotationInspector,
        proxy: &Arc<dyn ClientProxy>,
    ) -> Result<Option<Arc<dyn HeaderProvider>>> {
        let provider = self.plugin.bind(target, inspector, proxy)?;
        match &provider {
            Some(_) => {
                debug!(target = %target, plugin = self.plugin.name(), "Bound header provider");
            }
            None => trace!(target = %target, "No header provider for method"),
        }
        Ok(provider)
    }
}
