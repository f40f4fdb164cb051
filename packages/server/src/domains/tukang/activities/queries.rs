//! Tukang query activities

use serde_json::Value;
use tracing::debug;

use crate::domains::tukang::errors::{TukangError, TukangResult};
use crate::domains::tukang::models::{Tukang, TUKANG_COLLECTION};
use crate::kernel::{Document, ServerDeps};

fn created_at_key(document: &Document) -> &str {
    document
        .get("created_at")
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Order documents newest first by their `created_at` text.
///
/// Missing timestamps count as `""` and sink to the end. Input is expected in
/// insertion order; equal timestamps come out most recently inserted first.
pub fn sort_newest_first(mut documents: Vec<Document>) -> Vec<Document> {
    documents.reverse();
    documents.sort_by(|a, b| created_at_key(b).cmp(created_at_key(a)));
    documents
}

/// Every registered tukang, newest first. Reads the store on every call.
pub async fn list_tukang(deps: &ServerDeps) -> TukangResult<Vec<Tukang>> {
    let documents = deps.store.find_all(TUKANG_COLLECTION).await?;
    debug!(count = documents.len(), "Listing tukang");

    sort_newest_first(documents)
        .into_iter()
        .map(|doc| Tukang::from_document(doc).map_err(TukangError::from))
        .collect()
}

/// A single tukang by exact id.
pub async fn get_tukang(id: &str, deps: &ServerDeps) -> TukangResult<Tukang> {
    debug!(tukang_id = %id, "Fetching tukang");

    let document = deps
        .store
        .find_one(TUKANG_COLLECTION, id)
        .await?
        .ok_or(TukangError::NotFound)?;

    Ok(Tukang::from_document(document)?)
}
