//! Employee management use cases

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::employee::Employee;
use crate::domain::permission::Permission;
use crate::domain::value_objects::{Email, PersonName, Phone};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Staff accounts and their permission links.
///
/// The default permission set comes from configuration and is injected
/// at construction; new employees get it attached on creation.
pub struct EmployeeHandler {
    repos: Arc<dyn RepositoryProvider>,
    default_permissions: Vec<String>,
}

impl EmployeeHandler {
    pub fn new(repos: Arc<dyn RepositoryProvider>, default_permissions: Vec<String>) -> Self {
        Self {
            repos,
            default_permissions,
        }
    }

    pub async fn create(
        &self,
        name: PersonName,
        email: Email,
        phone: Phone,
        date_of_birth: NaiveDate,
        salary_cents: i64,
    ) -> DomainResult<Employee> {
        if salary_cents < 0 {
            return Err(DomainError::Validation(
                "salary must not be negative".to_string(),
            ));
        }

        let employee = Employee::new(name, email, phone, date_of_birth, salary_cents);
        self.repos.employees().save(employee.clone()).await?;

        for name in &self.default_permissions {
            match self.repos.permissions().find_by_name(name).await? {
                Some(permission) => {
                    self.repos
                        .employees()
                        .attach_permission(employee.id, permission.id)
                        .await?;
                }
                None => warn!(permission = %name, "default permission not found, skipping"),
            }
        }

        info!(employee_id = %employee.id, "employee created");
        Ok(employee)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Employee> {
        self.repos
            .employees()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee", id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Employee>> {
        self.repos.employees().find_all().await
    }

    pub async fn update_salary(&self, id: Uuid, salary_cents: i64) -> DomainResult<Employee> {
        if salary_cents < 0 {
            return Err(DomainError::Validation(
                "salary must not be negative".to_string(),
            ));
        }
        let mut employee = self.get(id).await?;
        employee.change_salary(salary_cents);
        self.repos.employees().update(employee.clone()).await?;
        Ok(employee)
    }

    pub async fn attach_permission(&self, id: Uuid, permission_id: Uuid) -> DomainResult<()> {
        self.get(id).await?;
        self.repos
            .permissions()
            .find_by_id(permission_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Permission", permission_id))?;
        self.repos.employees().attach_permission(id, permission_id).await
    }

    pub async fn detach_permission(&self, id: Uuid, permission_id: Uuid) -> DomainResult<()> {
        self.get(id).await?;
        self.repos.employees().detach_permission(id, permission_id).await
    }

    pub async fn permissions(&self, id: Uuid) -> DomainResult<Vec<Permission>> {
        self.get(id).await?;
        self.repos.employees().permissions_of(id).await
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.employees().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_support::in_memory_db;

    async fn fixture(defaults: Vec<String>) -> (EmployeeHandler, Arc<dyn RepositoryProvider>) {
        let db = in_memory_db().await;
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db));
        (EmployeeHandler::new(repos.clone(), defaults), repos)
    }

    fn john() -> (PersonName, Email, Phone, NaiveDate) {
        (
            PersonName::new("John", "Porter").unwrap(),
            Email::new("john@hotel.example").unwrap(),
            Phone::new("+5511912345678").unwrap(),
            NaiveDate::from_ymd_opt(1988, 9, 1).unwrap(),
        )
    }

    #[tokio::test]
    async fn creation_attaches_configured_default_permissions() {
        let (handler, repos) = fixture(vec!["reservations.read".into()]).await;
        repos
            .permissions()
            .save(Permission::new("reservations.read", "View reservations"))
            .await
            .unwrap();

        let (name, email, phone, dob) = john();
        let employee = handler
            .create(name, email, phone, dob, 350_000)
            .await
            .unwrap();

        let attached = handler.permissions(employee.id).await.unwrap();
        assert_eq!(attached.len(), 1);
        assert_eq!(attached[0].name, "reservations.read");
    }

    #[tokio::test]
    async fn missing_default_permission_is_skipped() {
        let (handler, _) = fixture(vec!["does.not.exist".into()]).await;
        let (name, email, phone, dob) = john();
        let employee = handler
            .create(name, email, phone, dob, 350_000)
            .await
            .unwrap();
        assert!(handler.permissions(employee.id).await.unwrap().is_empty());
    }
}
