//! Header filler plugin port

use std::sync::Arc;

use crate::error::Result;
use crate::ports::infrastructure::{AnnotationInspector, ClientProxy};
use crate::ports::providers::HeaderProvider;
use crate::value_objects::CallTarget;

/// Strategy that inspects a method's header annotations and builds its provider
///
/// Several implementations may be available; the one with the greatest
/// priority is selected once when the registry is created.
pub trait FillerPlugin: Send + Sync {
    /// Plugin name, used in logs
    fn name(&self) -> &str;

    /// Selection priority; the greatest value wins
    fn priority(&self) -> i32;

    /// Build a header provider for `target`, if it qualifies
    ///
    /// Returns `Ok(None)` for methods that carry no header annotations (the
    /// common case). Errors are reserved for malformed annotation usage.
    /// `proxy` is the callable client instance used to run default method
    /// bodies that compute header values.
    fn bind(
        &self,
        target: &CallTarget,
        inspector: &dyn AnnotationInspector,
        proxy: &Arc<dyn ClientProxy>,
    ) -> Result<Option<Arc<dyn HeaderProvider>>>;
}
