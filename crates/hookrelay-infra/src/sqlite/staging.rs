//! SQLite staging store implementation.
//!
//! Implements `StagingStore` from `hookrelay-core` with one scratch table
//! per call, named `webhook-{id}` -- the SQLite analogue of a transient
//! per-call table. The table is created at the start of an invocation and
//! dropped unconditionally at its end, so the database is empty whenever
//! no call is in flight.

use chrono::Utc;
use sqlx::Row;

use hookrelay_core::storage::staging_store::StagingStore;
use hookrelay_types::correlation::CorrelationId;
use hookrelay_types::error::StagingError;
use hookrelay_types::request::WebhookRequest;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `StagingStore`.
pub struct SqliteStagingStore {
    pool: DatabasePool,
}

impl SqliteStagingStore {
    /// Create a staging store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Quoted identifier for the per-call table. Correlation IDs render
    /// with hyphens, so the name always needs quoting; the ID is generated
    /// internally and is never attacker-controlled.
    fn table_ident(id: &CorrelationId) -> String {
        format!("\"{}\"", id.staging_name())
    }
}

impl StagingStore for SqliteStagingStore {
    async fn create(&self, id: &CorrelationId) -> Result<(), StagingError> {
        // Plain CREATE TABLE, no IF NOT EXISTS: a name collision means the
        // ID-uniqueness assumption broke, and the call must fail rather
        // than silently share a scratch table.
        let sql = format!(
            "CREATE TABLE {} (id TEXT NOT NULL, url TEXT NOT NULL, method TEXT NOT NULL, payload TEXT NOT NULL, staged_at TEXT NOT NULL)",
            Self::table_ident(id)
        );
        sqlx::query(&sql)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StagingError::Unavailable(e.to_string()))?;

        Ok(())
    }

    async fn insert(
        &self,
        id: &CorrelationId,
        request: &WebhookRequest,
    ) -> Result<(), StagingError> {
        let sql = format!(
            "INSERT INTO {} (id, url, method, payload, staged_at) VALUES (?, ?, ?, ?, ?)",
            Self::table_ident(id)
        );
        sqlx::query(&sql)
            .bind(request.id.to_string())
            .bind(&request.url)
            .bind(&request.method)
            .bind(&request.payload)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StagingError::Unavailable(e.to_string()))?;

        Ok(())
    }

    async fn fetch(&self, id: &CorrelationId) -> Result<Option<WebhookRequest>, StagingError> {
        let sql = format!(
            "SELECT id, url, method, payload FROM {}",
            Self::table_ident(id)
        );
        let row = sqlx::query(&sql)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StagingError::Unavailable(e.to_string()))?;

        match row {
            Some(row) => {
                let raw_id: String = row
                    .try_get("id")
                    .map_err(|e| StagingError::Unavailable(e.to_string()))?;
                let id = raw_id
                    .parse::<CorrelationId>()
                    .map_err(|e| StagingError::Unavailable(format!("invalid staged id: {e}")))?;

                Ok(Some(WebhookRequest {
                    id,
                    url: row
                        .try_get("url")
                        .map_err(|e| StagingError::Unavailable(e.to_string()))?,
                    method: row
                        .try_get("method")
                        .map_err(|e| StagingError::Unavailable(e.to_string()))?,
                    payload: row
                        .try_get("payload")
                        .map_err(|e| StagingError::Unavailable(e.to_string()))?,
                }))
            }
            None => Ok(None),
        }
    }

    async fn destroy(&self, id: &CorrelationId) -> Result<(), StagingError> {
        // IF EXISTS makes destroy idempotent: the bridge calls it on every
        // exit path, including ones where nothing was ever written.
        let sql = format!("DROP TABLE IF EXISTS {}", Self::table_ident(id));
        sqlx::query(&sql)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StagingError::Unavailable(e.to_string()))?;

        tracing::debug!(call_id = %id, "staging record dropped");
        Ok(())
    }
}
