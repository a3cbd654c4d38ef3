//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::customer::{Customer, CustomerRepository};
use crate::domain::value_objects::{Address, Email, PersonName, Phone};
use crate::domain::{db_err, DomainError, DomainResult};
use crate::infrastructure::database::entities::customer;

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

/// Rebuild the aggregate from a row. Rows were validated on the way in,
/// so a constructor failure here means the row was tampered with.
pub(crate) fn customer_from_model(model: customer::Model) -> DomainResult<Customer> {
    Ok(Customer {
        id: model.id,
        name: PersonName::new(&model.first_name, &model.last_name)?,
        email: Email::new(&model.email)?,
        phone: Phone::new(&model.phone)?,
        address: Address::new(
            &model.address_country,
            &model.address_city,
            &model.address_street,
            model.address_number,
        )?,
        date_of_birth: model.date_of_birth,
        billing_customer_id: model.billing_customer_id,
        created_at: model.created_at,
    })
}

pub(crate) fn customer_active_model(c: &Customer) -> customer::ActiveModel {
    customer::ActiveModel {
        id: Set(c.id),
        first_name: Set(c.name.first().to_string()),
        last_name: Set(c.name.last().to_string()),
        email: Set(c.email.as_str().to_string()),
        phone: Set(c.phone.as_str().to_string()),
        address_country: Set(c.address.country().to_string()),
        address_city: Set(c.address.city().to_string()),
        address_street: Set(c.address.street().to_string()),
        address_number: Set(c.address.number()),
        date_of_birth: Set(c.date_of_birth),
        billing_customer_id: Set(c.billing_customer_id.clone()),
        created_at: Set(c.created_at),
    }
}

// ── CustomerRepository impl ─────────────────────────────────────

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn save(&self, c: Customer) -> DomainResult<()> {
        debug!("Saving customer: {}", c.id);

        let existing = customer::Entity::find()
            .filter(customer::Column::Email.eq(c.email.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "customer with email '{}' already exists",
                c.email.as_str()
            )));
        }

        customer_active_model(&c)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(customer_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find()
            .filter(customer::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(customer_from_model).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .order_by_desc(customer::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(customer_from_model).collect()
    }

    async fn update(&self, c: Customer) -> DomainResult<()> {
        debug!("Updating customer: {}", c.id);

        let existing = customer::Entity::find_by_id(c.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Customer", c.id));
        }

        customer_active_model(&c)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = customer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Customer", id));
        }
        Ok(())
    }
}
