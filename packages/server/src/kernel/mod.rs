//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod memory_store;
pub mod postgres_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use memory_store::InMemoryDocumentStore;
pub use postgres_store::PostgresDocumentStore;
pub use test_dependencies::{FailingDocumentStore, TestDependencies};
pub use traits::*;
