//! Hotel service DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::service::Service;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    /// One of: "Low", "Medium", "High"
    pub priority: String,
    #[validate(range(min = 1))]
    pub duration_minutes: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateServicePriceRequest {
    #[validate(range(min = 0))]
    pub price_cents: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateServicePriorityRequest {
    /// One of: "Low", "Medium", "High"
    pub priority: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetServiceActiveRequest {
    pub is_active: bool,
}

/// Hotel service details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceDto {
    pub id: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub priority: String,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: String,
}

impl From<Service> for ServiceDto {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            price_cents: s.price_cents,
            priority: s.priority.to_string(),
            duration_minutes: s.duration_minutes,
            is_active: s.is_active,
            created_at: s.created_at.to_rfc3339(),
        }
    }
}
