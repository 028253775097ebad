use async_trait::async_trait;

use crate::database::DatabaseError;

/// Per-entity key-value store contract, generic over entity type `E` and key
/// type `K`. Absence on lookup is a normal outcome, not an error; the
/// handler layer decides whether a miss becomes a 404.
#[async_trait]
pub trait EntityStore<E, K>: Send + Sync {
    /// Look up one row by key. `Ok(None)` when the key is absent.
    async fn find_by_id(&self, key: &K) -> Result<Option<E>, DatabaseError>;

    /// All rows, in store order.
    async fn find_all(&self) -> Result<Vec<E>, DatabaseError>;

    /// Insert when the key is absent, otherwise overwrite the full row at
    /// that key. Returns the persisted value (identity filled in for
    /// generated keys).
    async fn save(&self, entity: E) -> Result<E, DatabaseError>;

    /// Remove the row. Callers only delete after a successful lookup.
    async fn delete(&self, entity: &E) -> Result<(), DatabaseError>;
}
