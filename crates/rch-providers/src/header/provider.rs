//! Annotated header provider

use rch_domain::error::Result;
use rch_domain::ports::HeaderProvider;
use rch_domain::{CallTarget, HeaderMap};
use serde_json::Value;

use crate::filler::HeaderFiller;

/// Header provider made of one filler per effective header annotation
#[derive(Debug)]
pub struct AnnotatedHeaderProvider {
    target: CallTarget,
    fillers: Vec<HeaderFiller>,
}

impl AnnotatedHeaderProvider {
    /// Create a provider for `target`
    pub fn new(target: CallTarget, fillers: Vec<HeaderFiller>) -> Self {
        Self { target, fillers }
    }
}

impl HeaderProvider for AnnotatedHeaderProvider {
    fn target(&self) -> &CallTarget {
        &self.target
    }

    fn add_headers(&self, arguments: &[Value], headers: &mut HeaderMap) -> Result<()> {
        for filler in &self.fillers {
            if let Some(values) = filler.values(arguments)? {
                headers.insert(filler.name().clone(), values);
            }
        }
        Ok(())
    }
}
