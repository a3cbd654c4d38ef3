//! SeaORM implementation of AdminRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::admin::{Admin, AdminRepository};
use crate::domain::permission::Permission;
use crate::domain::value_objects::{Email, PersonName, Phone};
use crate::domain::{db_err, DomainError, DomainResult};
use crate::infrastructure::database::entities::{admin, admin_permission, permission};

use super::permission_repository::permission_from_model;

pub struct SeaOrmAdminRepository {
    db: DatabaseConnection,
}

impl SeaOrmAdminRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn admin_from_model(model: admin::Model) -> DomainResult<Admin> {
    Ok(Admin {
        id: model.id,
        name: PersonName::new(&model.first_name, &model.last_name)?,
        email: Email::new(&model.email)?,
        phone: Phone::new(&model.phone)?,
        date_of_birth: model.date_of_birth,
        is_root: model.is_root,
        created_at: model.created_at,
    })
}

fn admin_active_model(a: &Admin) -> admin::ActiveModel {
    admin::ActiveModel {
        id: Set(a.id),
        first_name: Set(a.name.first().to_string()),
        last_name: Set(a.name.last().to_string()),
        email: Set(a.email.as_str().to_string()),
        phone: Set(a.phone.as_str().to_string()),
        date_of_birth: Set(a.date_of_birth),
        is_root: Set(a.is_root),
        created_at: Set(a.created_at),
    }
}

#[async_trait]
impl AdminRepository for SeaOrmAdminRepository {
    async fn save(&self, a: Admin) -> DomainResult<()> {
        debug!("Saving admin: {}", a.id);

        let existing = admin::Entity::find()
            .filter(admin::Column::Email.eq(a.email.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "admin with email '{}' already exists",
                a.email.as_str()
            )));
        }

        admin_active_model(&a)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Admin>> {
        let model = admin::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(admin_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Admin>> {
        let model = admin::Entity::find()
            .filter(admin::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(admin_from_model).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Admin>> {
        let models = admin::Entity::find()
            .order_by_desc(admin::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(admin_from_model).collect()
    }

    async fn update(&self, a: Admin) -> DomainResult<()> {
        debug!("Updating admin: {}", a.id);

        let existing = admin::Entity::find_by_id(a.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Admin", a.id));
        }

        admin_active_model(&a)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = admin::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Admin", id));
        }
        Ok(())
    }

    async fn attach_permission(&self, admin_id: Uuid, permission_id: Uuid) -> DomainResult<()> {
        let linked = admin_permission::Entity::find_by_id((admin_id, permission_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if linked.is_some() {
            return Ok(());
        }

        admin_permission::ActiveModel {
            admin_id: Set(admin_id),
            permission_id: Set(permission_id),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn detach_permission(&self, admin_id: Uuid, permission_id: Uuid) -> DomainResult<()> {
        admin_permission::Entity::delete_by_id((admin_id, permission_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn permissions_of(&self, admin_id: Uuid) -> DomainResult<Vec<Permission>> {
        let links = admin_permission::Entity::find()
            .filter(admin_permission::Column::AdminId.eq(admin_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let ids: Vec<Uuid> = links.into_iter().map(|l| l.permission_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = permission::Entity::find()
            .filter(permission::Column::Id.is_in(ids))
            .order_by_asc(permission::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(permission_from_model).collect())
    }
}
