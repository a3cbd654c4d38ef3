//! Invoice repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Invoice;
use crate::domain::DomainResult;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn save(&self, invoice: Invoice) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Invoice>>;

    async fn find_all(&self) -> DomainResult<Vec<Invoice>>;

    async fn find_for_reservation(&self, reservation_id: Uuid) -> DomainResult<Vec<Invoice>>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
