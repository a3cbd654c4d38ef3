//! Hotel service repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Service;
use crate::domain::DomainResult;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn save(&self, service: Service) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Service>>;

    async fn find_all(&self) -> DomainResult<Vec<Service>>;

    /// Only services currently offered to guests
    async fn find_active(&self) -> DomainResult<Vec<Service>>;

    async fn update(&self, service: Service) -> DomainResult<()>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
