//! SeaORM implementation of EmployeeRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::employee::{Employee, EmployeeRepository};
use crate::domain::permission::Permission;
use crate::domain::value_objects::{Email, PersonName, Phone};
use crate::domain::{db_err, DomainError, DomainResult};
use crate::infrastructure::database::entities::{employee, employee_permission, permission};

use super::permission_repository::permission_from_model;

pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn employee_from_model(model: employee::Model) -> DomainResult<Employee> {
    Ok(Employee {
        id: model.id,
        name: PersonName::new(&model.first_name, &model.last_name)?,
        email: Email::new(&model.email)?,
        phone: Phone::new(&model.phone)?,
        date_of_birth: model.date_of_birth,
        salary_cents: model.salary_cents,
        created_at: model.created_at,
    })
}

fn employee_active_model(e: &Employee) -> employee::ActiveModel {
    employee::ActiveModel {
        id: Set(e.id),
        first_name: Set(e.name.first().to_string()),
        last_name: Set(e.name.last().to_string()),
        email: Set(e.email.as_str().to_string()),
        phone: Set(e.phone.as_str().to_string()),
        date_of_birth: Set(e.date_of_birth),
        salary_cents: Set(e.salary_cents),
        created_at: Set(e.created_at),
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn save(&self, e: Employee) -> DomainResult<()> {
        debug!("Saving employee: {}", e.id);

        let existing = employee::Entity::find()
            .filter(employee::Column::Email.eq(e.email.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "employee with email '{}' already exists",
                e.email.as_str()
            )));
        }

        employee_active_model(&e)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>> {
        let model = employee::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(employee_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Employee>> {
        let model = employee::Entity::find()
            .filter(employee::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(employee_from_model).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Employee>> {
        let models = employee::Entity::find()
            .order_by_desc(employee::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(employee_from_model).collect()
    }

    async fn update(&self, e: Employee) -> DomainResult<()> {
        debug!("Updating employee: {}", e.id);

        let existing = employee::Entity::find_by_id(e.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Employee", e.id));
        }

        employee_active_model(&e)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = employee::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Employee", id));
        }
        Ok(())
    }

    async fn attach_permission(&self, employee_id: Uuid, permission_id: Uuid) -> DomainResult<()> {
        let linked = employee_permission::Entity::find_by_id((employee_id, permission_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if linked.is_some() {
            return Ok(());
        }

        employee_permission::ActiveModel {
            employee_id: Set(employee_id),
            permission_id: Set(permission_id),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn detach_permission(&self, employee_id: Uuid, permission_id: Uuid) -> DomainResult<()> {
        employee_permission::Entity::delete_by_id((employee_id, permission_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn permissions_of(&self, employee_id: Uuid) -> DomainResult<Vec<Permission>> {
        let links = employee_permission::Entity::find()
            .filter(employee_permission::Column::EmployeeId.eq(employee_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let ids: Vec<Uuid> = links.into_iter().map(|l| l.permission_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = permission::Entity::find()
            .filter(permission::Column::Id.is_in(ids))
            .order_by_asc(permission::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(permission_from_model).collect())
    }
}
