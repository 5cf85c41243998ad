//! Header filler plugins
//!
//! Provides the annotation filler plugin and registers it into the
//! application layer's plugin registry:
//! - annotation: interprets header annotations (literals, `{method}`, `${key}`)

pub mod annotation;
pub mod expression;
pub mod header_filler;

use std::sync::Arc;

use rch_application::ports::registry::{FILLER_PLUGINS, FillerPluginEntry};
use rch_domain::ports::FillerPlugin;

pub use annotation::AnnotationFillerPlugin;
pub use expression::ValueExpression;
pub use header_filler::HeaderFiller;

fn annotation_filler() -> Arc<dyn FillerPlugin> {
    Arc::new(AnnotationFillerPlugin::new())
}

#[linkme::distributed_slice(FILLER_PLUGINS)]
static ANNOTATION_FILLER: FillerPluginEntry = FillerPluginEntry {
    name: "annotation",
    description: "Header annotation filler (literal, computed and property values)",
    factory: annotation_filler,
};
