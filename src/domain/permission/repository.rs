//! Permission repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Permission;
use crate::domain::DomainResult;

#[async_trait]
pub trait PermissionRepository: Send + Sync {
    async fn save(&self, permission: Permission) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Permission>>;

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Permission>>;

    async fn find_all(&self) -> DomainResult<Vec<Permission>>;

    async fn update(&self, permission: Permission) -> DomainResult<()>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
