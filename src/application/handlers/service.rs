//! Hotel service catalog use cases

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::service::{Service, ServicePriority};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

pub struct ServiceHandler {
    repos: Arc<dyn RepositoryProvider>,
}

impl ServiceHandler {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(
        &self,
        name: String,
        price_cents: i64,
        priority: ServicePriority,
        duration_minutes: i32,
    ) -> DomainResult<Service> {
        let service = Service::new(name, price_cents, priority, duration_minutes)?;
        self.repos.services().save(service.clone()).await?;
        info!(service = %service.name, "service created");
        Ok(service)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Service> {
        self.repos
            .services()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Service", id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Service>> {
        self.repos.services().find_all().await
    }

    pub async fn list_active(&self) -> DomainResult<Vec<Service>> {
        self.repos.services().find_active().await
    }

    pub async fn update_price(&self, id: Uuid, price_cents: i64) -> DomainResult<Service> {
        if price_cents < 0 {
            return Err(DomainError::Validation(
                "service price must not be negative".to_string(),
            ));
        }
        let mut service = self.get(id).await?;
        service.price_cents = price_cents;
        self.repos.services().update(service.clone()).await?;
        Ok(service)
    }

    pub async fn update_priority(
        &self,
        id: Uuid,
        priority: ServicePriority,
    ) -> DomainResult<Service> {
        let mut service = self.get(id).await?;
        service.priority = priority;
        self.repos.services().update(service.clone()).await?;
        Ok(service)
    }

    pub async fn set_active(&self, id: Uuid, is_active: bool) -> DomainResult<Service> {
        let mut service = self.get(id).await?;
        service.is_active = is_active;
        self.repos.services().update(service.clone()).await?;
        Ok(service)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.services().delete(id).await
    }
}
