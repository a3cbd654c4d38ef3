//! Customer repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Customer;
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer
    async fn save(&self, customer: Customer) -> DomainResult<()>;

    /// Find customer by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Customer>>;

    /// Find customer by normalized email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Customer>>;

    /// List all customers, newest first
    async fn find_all(&self) -> DomainResult<Vec<Customer>>;

    /// Update an existing customer
    async fn update(&self, customer: Customer) -> DomainResult<()>;

    /// Delete a customer by ID
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
