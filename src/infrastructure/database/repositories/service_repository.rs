//! SeaORM implementation of ServiceRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::service::{Service, ServicePriority, ServiceRepository};
use crate::domain::{db_err, DomainError, DomainResult};
use crate::infrastructure::database::entities::service;

pub struct SeaOrmServiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn service_from_model(model: service::Model) -> Service {
    Service {
        id: model.id,
        name: model.name,
        price_cents: model.price_cents,
        priority: ServicePriority::from_str(&model.priority),
        duration_minutes: model.duration_minutes,
        is_active: model.is_active,
        created_at: model.created_at,
    }
}

fn service_active_model(s: &Service) -> service::ActiveModel {
    service::ActiveModel {
        id: Set(s.id),
        name: Set(s.name.clone()),
        price_cents: Set(s.price_cents),
        priority: Set(s.priority.as_str().to_string()),
        duration_minutes: Set(s.duration_minutes),
        is_active: Set(s.is_active),
        created_at: Set(s.created_at),
    }
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn save(&self, s: Service) -> DomainResult<()> {
        debug!("Saving service: {}", s.name);

        let existing = service::Entity::find()
            .filter(service::Column::Name.eq(s.name.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "service '{}' already exists",
                s.name
            )));
        }

        service_active_model(&s)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Service>> {
        let model = service::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(service_from_model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .order_by_asc(service::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(service_from_model).collect())
    }

    async fn find_active(&self) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .filter(service::Column::IsActive.eq(true))
            .order_by_asc(service::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(service_from_model).collect())
    }

    async fn update(&self, s: Service) -> DomainResult<()> {
        debug!("Updating service: {}", s.name);

        let existing = service::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Service", s.id));
        }

        service_active_model(&s)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = service::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Service", id));
        }
        Ok(())
    }
}
