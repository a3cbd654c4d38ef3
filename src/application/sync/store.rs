//! Transactional persistence seam used by the synchronizer

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr};
use uuid::Uuid;

/// Aggregate persistence bound to an open database transaction.
///
/// Implementations are stateless adapters over the SeaORM entities; the
/// synchronizer owns the transaction's lifetime and passes it in. The
/// existence probe runs on the plain connection so a missing aggregate is
/// reported before any transaction is opened.
#[async_trait]
pub trait SyncStore: Send + Sync {
    type Aggregate: Send + Sync;

    /// Entity name used in `NotFound` errors and log lines.
    fn entity(&self) -> &'static str;

    async fn exists(&self, db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr>;

    async fn load(
        &self,
        txn: &DatabaseTransaction,
        id: Uuid,
    ) -> Result<Option<Self::Aggregate>, DbErr>;

    /// Write the mutated aggregate back (update).
    async fn persist(
        &self,
        txn: &DatabaseTransaction,
        aggregate: &Self::Aggregate,
    ) -> Result<(), DbErr>;

    /// Insert a new aggregate row.
    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        aggregate: &Self::Aggregate,
    ) -> Result<(), DbErr>;

    /// Delete the aggregate row.
    async fn remove(&self, txn: &DatabaseTransaction, id: Uuid) -> Result<(), DbErr>;
}
