//! Admin management use cases

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::admin::Admin;
use crate::domain::permission::Permission;
use crate::domain::value_objects::{Email, PersonName, Phone};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Back-office administrator accounts. Mirrors the employee flow,
/// including configured default permissions on creation.
pub struct AdminHandler {
    repos: Arc<dyn RepositoryProvider>,
    default_permissions: Vec<String>,
}

impl AdminHandler {
    pub fn new(repos: Arc<dyn RepositoryProvider>, default_permissions: Vec<String>) -> Self {
        Self {
            repos,
            default_permissions,
        }
    }

    pub async fn create(
        &self,
        name: PersonName,
        email: Email,
        phone: Phone,
        date_of_birth: NaiveDate,
        is_root: bool,
    ) -> DomainResult<Admin> {
        let admin = Admin::new(name, email, phone, date_of_birth, is_root);
        self.repos.admins().save(admin.clone()).await?;

        for name in &self.default_permissions {
            match self.repos.permissions().find_by_name(name).await? {
                Some(permission) => {
                    self.repos
                        .admins()
                        .attach_permission(admin.id, permission.id)
                        .await?;
                }
                None => warn!(permission = %name, "default permission not found, skipping"),
            }
        }

        info!(admin_id = %admin.id, is_root = admin.is_root, "admin created");
        Ok(admin)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Admin> {
        self.repos
            .admins()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Admin", id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Admin>> {
        self.repos.admins().find_all().await
    }

    pub async fn promote_to_root(&self, id: Uuid) -> DomainResult<Admin> {
        let mut admin = self.get(id).await?;
        admin.promote_to_root();
        self.repos.admins().update(admin.clone()).await?;
        info!(admin_id = %id, "admin promoted to root");
        Ok(admin)
    }

    pub async fn attach_permission(&self, id: Uuid, permission_id: Uuid) -> DomainResult<()> {
        self.get(id).await?;
        self.repos
            .permissions()
            .find_by_id(permission_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Permission", permission_id))?;
        self.repos.admins().attach_permission(id, permission_id).await
    }

    pub async fn detach_permission(&self, id: Uuid, permission_id: Uuid) -> DomainResult<()> {
        self.get(id).await?;
        self.repos.admins().detach_permission(id, permission_id).await
    }

    pub async fn permissions(&self, id: Uuid) -> DomainResult<Vec<Permission>> {
        self.get(id).await?;
        self.repos.admins().permissions_of(id).await
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.admins().delete(id).await
    }
}
