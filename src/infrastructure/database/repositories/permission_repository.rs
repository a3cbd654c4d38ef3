//! SeaORM implementation of PermissionRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::permission::{Permission, PermissionRepository};
use crate::domain::{db_err, DomainError, DomainResult};
use crate::infrastructure::database::entities::permission;

pub struct SeaOrmPermissionRepository {
    db: DatabaseConnection,
}

impl SeaOrmPermissionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn permission_from_model(model: permission::Model) -> Permission {
    Permission {
        id: model.id,
        name: model.name,
        description: model.description,
        is_enabled: model.is_enabled,
        created_at: model.created_at,
    }
}

fn permission_active_model(p: &Permission) -> permission::ActiveModel {
    permission::ActiveModel {
        id: Set(p.id),
        name: Set(p.name.clone()),
        description: Set(p.description.clone()),
        is_enabled: Set(p.is_enabled),
        created_at: Set(p.created_at),
    }
}

#[async_trait]
impl PermissionRepository for SeaOrmPermissionRepository {
    async fn save(&self, p: Permission) -> DomainResult<()> {
        debug!("Saving permission: {}", p.name);

        let existing = permission::Entity::find()
            .filter(permission::Column::Name.eq(p.name.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "permission '{}' already exists",
                p.name
            )));
        }

        permission_active_model(&p)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Permission>> {
        let model = permission::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(permission_from_model))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Permission>> {
        let model = permission::Entity::find()
            .filter(permission::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(permission_from_model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Permission>> {
        let models = permission::Entity::find()
            .order_by_asc(permission::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(permission_from_model).collect())
    }

    async fn update(&self, p: Permission) -> DomainResult<()> {
        debug!("Updating permission: {}", p.name);

        let existing = permission::Entity::find_by_id(p.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Permission", p.id));
        }

        permission_active_model(&p)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = permission::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Permission", id));
        }
        Ok(())
    }
}
