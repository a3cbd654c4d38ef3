//! Employee repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Employee;
use crate::domain::permission::Permission;
use crate::domain::DomainResult;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn save(&self, employee: Employee) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Employee>>;

    async fn find_all(&self) -> DomainResult<Vec<Employee>>;

    async fn update(&self, employee: Employee) -> DomainResult<()>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Link a permission to an employee; linking twice is a no-op.
    async fn attach_permission(&self, employee_id: Uuid, permission_id: Uuid) -> DomainResult<()>;

    /// Unlink a permission from an employee.
    async fn detach_permission(&self, employee_id: Uuid, permission_id: Uuid) -> DomainResult<()>;

    /// Permissions currently linked to an employee.
    async fn permissions_of(&self, employee_id: Uuid) -> DomainResult<Vec<Permission>>;
}
