//! Per-interface header factory port

use std::fmt::Debug;

use downcast_rs::{DowncastSync, impl_downcast};

use crate::value_objects::HeaderMap;

/// Mutates the outgoing headers of every invocation of a client interface
///
/// Implementations are shared across threads and must not keep per-call
/// state. Trait objects can be downcast to the concrete factory type.
pub trait HeaderFactory: DowncastSync + Debug {
    /// Produce the final outgoing header set
    ///
    /// `incoming` holds the headers of the request being served (if any),
    /// `outgoing` the headers the client has assembled so far.
    fn update(&self, incoming: &HeaderMap, outgoing: &HeaderMap) -> HeaderMap;
}

impl_downcast!(sync HeaderFactory);
