//! Server dependencies (using traits for testability)
//!
//! This module provides the dependency container handed to every activity.
//! All external services use trait abstractions to enable testing.

use std::sync::Arc;

use crate::kernel::BaseDocumentStore;

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    /// Document store holding the tukang collection
    pub store: Arc<dyn BaseDocumentStore>,
}

impl ServerDeps {
    pub fn new(store: Arc<dyn BaseDocumentStore>) -> Self {
        Self { store }
    }
}
