//! Customer DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::customer::Customer;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 60))]
    pub first_name: String,
    #[validate(length(min = 1, max = 60))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    /// E.164 phone number, e.g. "+5511987654321"
    #[validate(length(min = 8, max = 16))]
    pub phone: String,
    #[validate(length(min = 1, max = 60))]
    pub country: String,
    #[validate(length(min = 1, max = 60))]
    pub city: String,
    #[validate(length(min = 1, max = 120))]
    pub street: String,
    #[validate(range(min = 1))]
    pub number: i32,
    pub date_of_birth: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateNameRequest {
    #[validate(length(min = 1, max = 60))]
    pub first_name: String,
    #[validate(length(min = 1, max = 60))]
    pub last_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmailRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePhoneRequest {
    #[validate(length(min = 8, max = 16))]
    pub phone: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAddressRequest {
    #[validate(length(min = 1, max = 60))]
    pub country: String,
    #[validate(length(min = 1, max = 60))]
    pub city: String,
    #[validate(length(min = 1, max = 120))]
    pub street: String,
    #[validate(range(min = 1))]
    pub number: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDateOfBirthRequest {
    pub date_of_birth: NaiveDate,
}

/// Customer details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub street: String,
    pub number: i32,
    pub date_of_birth: NaiveDate,
    /// Customer id at the billing provider
    pub billing_customer_id: String,
    pub created_at: String,
}

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            first_name: c.name.first().to_string(),
            last_name: c.name.last().to_string(),
            email: c.email.as_str().to_string(),
            phone: c.phone.as_str().to_string(),
            country: c.address.country().to_string(),
            city: c.address.city().to_string(),
            street: c.address.street().to_string(),
            number: c.address.number(),
            date_of_birth: c.date_of_birth,
            billing_customer_id: c.billing_customer_id,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}
