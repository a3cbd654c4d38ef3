//! Permission DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::permission::Permission;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePermissionRequest {
    /// Dotted capability name, e.g. "reservations.write"
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(max = 255))]
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PermissionDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_enabled: bool,
    pub created_at: String,
}

impl From<Permission> for PermissionDto {
    fn from(p: Permission) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            is_enabled: p.is_enabled,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}
