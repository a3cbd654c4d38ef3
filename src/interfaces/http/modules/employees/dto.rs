//! Employee DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::employee::Employee;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 60))]
    pub first_name: String,
    #[validate(length(min = 1, max = 60))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 16))]
    pub phone: String,
    pub date_of_birth: NaiveDate,
    /// Monthly salary in cents
    #[validate(range(min = 0))]
    pub salary_cents: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSalaryRequest {
    #[validate(range(min = 0))]
    pub salary_cents: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub salary_cents: i64,
    pub created_at: String,
}

impl From<Employee> for EmployeeDto {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            first_name: e.name.first().to_string(),
            last_name: e.name.last().to_string(),
            email: e.email.as_str().to_string(),
            phone: e.phone.as_str().to_string(),
            date_of_birth: e.date_of_birth,
            salary_cents: e.salary_cents,
            created_at: e.created_at.to_rfc3339(),
        }
    }
}
