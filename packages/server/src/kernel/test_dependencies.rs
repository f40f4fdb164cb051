// TestDependencies - mock implementations for testing
//
// Provides store implementations that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::{BaseDocumentStore, Document, InMemoryDocumentStore, ServerDeps, StorageError};

// =============================================================================
// Failing Document Store
// =============================================================================

/// A store whose every call fails, simulating an unreachable database.
#[derive(Default)]
pub struct FailingDocumentStore {
    calls: AtomicUsize,
}

impl FailingDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many store calls were attempted.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail(&self) -> StorageError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StorageError::Database(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl BaseDocumentStore for FailingDocumentStore {
    async fn insert_one(&self, _collection: &str, _document: Document) -> Result<(), StorageError> {
        Err(self.fail())
    }

    async fn find_all(&self, _collection: &str) -> Result<Vec<Document>, StorageError> {
        Err(self.fail())
    }

    async fn find_one(&self, _collection: &str, _id: &str) -> Result<Option<Document>, StorageError> {
        Err(self.fail())
    }

    async fn delete_one(&self, _collection: &str, _id: &str) -> Result<u64, StorageError> {
        Err(self.fail())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundles an in-memory store with the `ServerDeps` built on top of it.
pub struct TestDependencies {
    pub store: Arc<InMemoryDocumentStore>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryDocumentStore::new()),
        }
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(self.store.clone())
    }

    /// `ServerDeps` whose store fails every call.
    pub fn failing() -> (ServerDeps, Arc<FailingDocumentStore>) {
        let store = Arc::new(FailingDocumentStore::new());
        (ServerDeps::new(store.clone()), store)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
