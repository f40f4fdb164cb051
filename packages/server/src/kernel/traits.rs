// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Domain code maps its own types to and from the raw documents handled here.
//
// Naming convention: Base* for trait names (e.g., BaseDocumentStore)

use async_trait::async_trait;
use serde_json::{Map, Value};

/// A stored record in its native, loosely-typed form.
pub type Document = Map<String, Value>;

/// Field every document is keyed by within its collection.
pub const DOCUMENT_KEY: &str = "id";

/// Failures raised by a document store adapter.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Document has no string `id` key")]
    MissingKey,

    #[error("Document with id `{0}` already exists")]
    DuplicateKey(String),

    #[error("Malformed document `{id}`: {reason}")]
    MalformedDocument { id: String, reason: String },
}

/// Returns the key of a document, if it carries a string `id`.
pub fn document_key(document: &Document) -> Option<&str> {
    document.get(DOCUMENT_KEY).and_then(Value::as_str)
}

// =============================================================================
// Document Store Trait (Infrastructure - keyed JSON collections)
// =============================================================================

/// A persistent set of named collections of JSON documents.
///
/// Each document is uniquely keyed by its `id` field within a collection.
/// Every method touches a single document (or reads a whole collection) and
/// is atomic per document; there are no multi-document transactions.
#[async_trait]
pub trait BaseDocumentStore: Send + Sync {
    /// Insert a new document. Fails with `DuplicateKey` if the id is taken.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StorageError>;

    /// Every document in the collection, in insertion order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StorageError>;

    /// The document whose id equals `id` exactly, if any.
    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Document>, StorageError>;

    /// Remove the document keyed by `id`; returns how many were removed (0 or 1).
    async fn delete_one(&self, collection: &str, id: &str) -> Result<u64, StorageError>;
}
