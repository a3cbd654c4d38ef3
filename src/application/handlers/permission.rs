//! Permission catalog use cases

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::permission::Permission;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

pub struct PermissionHandler {
    repos: Arc<dyn RepositoryProvider>,
}

impl PermissionHandler {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, name: String, description: String) -> DomainResult<Permission> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "permission name must not be empty".to_string(),
            ));
        }
        let permission = Permission::new(name, description);
        self.repos.permissions().save(permission.clone()).await?;
        info!(permission = %permission.name, "permission created");
        Ok(permission)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Permission> {
        self.repos
            .permissions()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Permission", id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Permission>> {
        self.repos.permissions().find_all().await
    }

    pub async fn set_enabled(&self, id: Uuid, enabled: bool) -> DomainResult<Permission> {
        let mut permission = self.get(id).await?;
        if enabled {
            permission.enable();
        } else {
            permission.disable();
        }
        self.repos.permissions().update(permission.clone()).await?;
        Ok(permission)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.permissions().delete(id).await
    }
}
