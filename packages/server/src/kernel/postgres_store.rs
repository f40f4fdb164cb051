//! Postgres-backed document store.
//!
//! Documents live as `JSONB` rows in the `documents` table, keyed by
//! `(collection, id)`. The `seq` column keeps insertion order for `find_all`.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;

use super::traits::{document_key, BaseDocumentStore, Document, StorageError};

#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_document(id: &str, body: Value) -> Result<Document, StorageError> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(StorageError::MalformedDocument {
            id: id.to_string(),
            reason: format!("expected a JSON object, found {}", other),
        }),
    }
}

#[async_trait]
impl BaseDocumentStore for PostgresDocumentStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StorageError> {
        let id = document_key(&document)
            .ok_or(StorageError::MissingKey)?
            .to_string();

        let result = sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(&id)
            .bind(Json(Value::Object(document)))
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => {
                debug!(collection, id = %id, "Document inserted");
                Ok(())
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StorageError::DuplicateKey(id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StorageError> {
        let rows = sqlx::query_as::<_, (String, Json<Value>)>(
            "SELECT id, body FROM documents WHERE collection = $1 ORDER BY seq ASC",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, Json(body))| into_document(&id, body))
            .collect()
    }

    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Document>, StorageError> {
        let body = sqlx::query_scalar::<_, Json<Value>>(
            "SELECT body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        body.map(|Json(body)| into_document(id, body)).transpose()
    }

    async fn delete_one(&self, collection: &str, id: &str) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
