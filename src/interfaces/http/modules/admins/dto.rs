//! Admin DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::admin::Admin;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAdminRequest {
    #[validate(length(min = 1, max = 60))]
    pub first_name: String,
    #[validate(length(min = 1, max = 60))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 16))]
    pub phone: String,
    pub date_of_birth: NaiveDate,
    /// Root admins bypass permission checks entirely
    #[serde(default)]
    pub is_root: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub is_root: bool,
    pub created_at: String,
}

impl From<Admin> for AdminDto {
    fn from(a: Admin) -> Self {
        Self {
            id: a.id,
            first_name: a.name.first().to_string(),
            last_name: a.name.last().to_string(),
            email: a.email.as_str().to_string(),
            phone: a.phone.as_str().to_string(),
            date_of_birth: a.date_of_birth,
            is_root: a.is_root,
            created_at: a.created_at.to_rfc3339(),
        }
    }
}
