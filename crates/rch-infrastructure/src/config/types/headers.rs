//! Header registry configuration types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PROPERTY_FILLER_PRIORITY;

/// Header registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadersConfig {
    /// Incoming headers copied onto outgoing calls by the default factory
    pub propagate: Vec<String>,

    /// Values for `${key}` header expressions
    pub properties: BTreeMap<String, String>,

    /// Priority of the property-aware annotation plugin
    pub property_filler_priority: i32,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            propagate: Vec::new(),
            properties: BTreeMap::new(),
            property_filler_priority: DEFAULT_PROPERTY_FILLER_PRIORITY,
        }
    }
}
