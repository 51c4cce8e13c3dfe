//! Collaborator boundary for the UniqueStore hosted backend.
//!
//! The storefront delegates persistence, authentication, and querying
//! to a hosted document-database backend. This crate is the seam: the
//! [`ProductCatalog`] and [`OrderStore`] traits describe what the
//! storefront consumes, and the policies here (timeouts, retry with
//! backoff) wrap whichever transport implements them. An in-memory
//! implementation backs tests and local demos.
//!
//! Callers treat a terminal fetch failure as "zero products" — the
//! error is surfaced once, not retried beyond policy.

pub mod catalog;
pub mod error;
pub mod memory;
pub mod orders;
pub mod retry;
pub mod timeout;

pub use catalog::{list_with_retry, CatalogQuery, ProductCatalog};
pub use error::BackendError;
pub use memory::InMemoryBackend;
pub use orders::OrderStore;
pub use retry::{BackoffStrategy, RetryPolicy};
pub use timeout::{Dependency, TimeoutConfig};
