//! Default method table
//!
//! A [`ClientProxy`] built from named closures, standing in for the default
//! method bodies of a client interface.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rch_domain::error::BoxError;
use rch_domain::ports::{ClientProxy, ComputeRequest};

type DefaultMethod =
    Arc<dyn Fn(&ComputeRequest<'_>) -> Result<Vec<String>, BoxError> + Send + Sync>;

/// Client proxy exposing a fixed set of default methods
#[derive(Clone, Default)]
pub struct DefaultMethodTable {
    methods: HashMap<String, DefaultMethod>,
}

impl DefaultMethodTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a default method computing header values
    pub fn with_method<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&ComputeRequest<'_>) -> Result<Vec<String>, BoxError> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(body));
        self
    }

    /// Add a default method returning a constant value
    pub fn with_value(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        self.with_method(name, move |_| Ok(vec![value.clone()]))
    }

    /// Share the table as a client proxy
    pub fn into_proxy(self) -> Arc<dyn ClientProxy> {
        Arc::new(self)
    }
}

impl ClientProxy for DefaultMethodTable {
    fn has_default_method(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    fn invoke_default(
        &self,
        method: &str,
        request: &ComputeRequest<'_>,
    ) -> Result<Vec<String>, BoxError> {
        match self.methods.get(method) {
            Some(body) => body(request),
            None => Err(format!("no default method named '{method}'").into()),
        }
    }
}

impl fmt::Debug for DefaultMethodTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("DefaultMethodTable")
            .field("methods", &names)
            .finish()
    }
}
