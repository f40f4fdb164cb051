//! In-process document store.
//!
//! Used by tests and local tooling; same contract as the Postgres adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::{document_key, BaseDocumentStore, Document, StorageError};

#[derive(Default)]
pub struct InMemoryDocumentStore {
    // Each collection is kept in insertion order.
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(collection)
            .map_or(0, Vec::len)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Insert a document without key checks, e.g. to seed legacy or corrupt data.
    pub fn seed(&self, collection: &str, document: Document) {
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entry(collection.to_string())
            .or_default()
            .push(document);
    }
}

#[async_trait]
impl BaseDocumentStore for InMemoryDocumentStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StorageError> {
        let id = document_key(&document)
            .ok_or(StorageError::MissingKey)?
            .to_string();

        let mut collections = self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let documents = collections.entry(collection.to_string()).or_default();

        if documents.iter().any(|doc| document_key(doc) == Some(id.as_str())) {
            return Err(StorageError::DuplicateKey(id));
        }

        documents.push(document);
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StorageError> {
        let collections = self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Document>, StorageError> {
        let collections = self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| document_key(doc) == Some(id)))
            .cloned())
    }

    async fn delete_one(&self, collection: &str, id: &str) -> Result<u64, StorageError> {
        let mut collections = self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        match documents
            .iter()
            .position(|doc| document_key(doc) == Some(id))
        {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
