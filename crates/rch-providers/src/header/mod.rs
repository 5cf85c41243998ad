//! Header providers

pub mod provider;

pub use provider::AnnotatedHeaderProvider;
