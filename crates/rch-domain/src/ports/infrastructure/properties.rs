//! Property lookup port

use std::collections::{BTreeMap, HashMap};

/// Source of `${key}` placeholder values
pub trait PropertySource: Send + Sync {
    /// Value of the property, if defined
    fn property(&self, key: &str) -> Option<String>;
}

impl PropertySource for HashMap<String, String> {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl PropertySource for BTreeMap<String, String> {
    fn property(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
