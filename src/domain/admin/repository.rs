//! Admin repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Admin;
use crate::domain::permission::Permission;
use crate::domain::DomainResult;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn save(&self, admin: Admin) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Admin>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Admin>>;

    async fn find_all(&self) -> DomainResult<Vec<Admin>>;

    async fn update(&self, admin: Admin) -> DomainResult<()>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    async fn attach_permission(&self, admin_id: Uuid, permission_id: Uuid) -> DomainResult<()>;

    async fn detach_permission(&self, admin_id: Uuid, permission_id: Uuid) -> DomainResult<()>;

    async fn permissions_of(&self, admin_id: Uuid) -> DomainResult<Vec<Permission>>;
}
