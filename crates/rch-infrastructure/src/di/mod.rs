//! Dependency Injection
//!
//! dill catalog wiring for managed header factories, and the composition root
//! producing a ready [`ClientHeaderRegistry`](rch_application::ClientHeaderRegistry).
//!
//! ```text
//! AppConfig → catalog_builder() → dill Catalog → DillInjectionManager
//!     │                                                  │
//!     └──────→ init_registry() → ClientHeaderRegistry ←──┘ (HeadersContext)
//! ```

pub mod bootstrap;
pub mod catalog;
pub mod injection;

pub use bootstrap::{HeadersContext, init_registry};
pub use catalog::catalog_builder;
pub use injection::DillInjectionManager;
