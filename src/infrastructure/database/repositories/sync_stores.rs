//! SyncStore adapters for the synchronized aggregates
//!
//! Stateless bindings between the synchronizer's transaction and the
//! SeaORM entities. Only aggregates with a billing counterpart get one:
//! customers (profile), reservations and invoices (payment intent).

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait};
use uuid::Uuid;

use crate::application::sync::SyncStore;
use crate::domain::customer::Customer;
use crate::domain::invoice::Invoice;
use crate::domain::reservation::Reservation;
use crate::infrastructure::database::entities::{customer, invoice, reservation};

use super::customer_repository::{customer_active_model, customer_from_model};
use super::invoice_repository::invoice_active_model;
use super::reservation_repository::{reservation_active_model, reservation_from_model};

pub struct CustomerStore;

#[async_trait]
impl SyncStore for CustomerStore {
    type Aggregate = Customer;

    fn entity(&self) -> &'static str {
        "Customer"
    }

    async fn exists(&self, db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let model = customer::Entity::find_by_id(id).one(db).await?;
        Ok(model.is_some())
    }

    async fn load(
        &self,
        txn: &DatabaseTransaction,
        id: Uuid,
    ) -> Result<Option<Customer>, DbErr> {
        let model = customer::Entity::find_by_id(id).one(txn).await?;
        model
            .map(|m| customer_from_model(m).map_err(|e| DbErr::Custom(e.to_string())))
            .transpose()
    }

    async fn persist(&self, txn: &DatabaseTransaction, c: &Customer) -> Result<(), DbErr> {
        customer_active_model(c).update(txn).await?;
        Ok(())
    }

    async fn insert(&self, txn: &DatabaseTransaction, c: &Customer) -> Result<(), DbErr> {
        customer_active_model(c).insert(txn).await?;
        Ok(())
    }

    async fn remove(&self, txn: &DatabaseTransaction, id: Uuid) -> Result<(), DbErr> {
        customer::Entity::delete_by_id(id).exec(txn).await?;
        Ok(())
    }
}

pub struct ReservationStore;

#[async_trait]
impl SyncStore for ReservationStore {
    type Aggregate = Reservation;

    fn entity(&self) -> &'static str {
        "Reservation"
    }

    async fn exists(&self, db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let model = reservation::Entity::find_by_id(id).one(db).await?;
        Ok(model.is_some())
    }

    async fn load(
        &self,
        txn: &DatabaseTransaction,
        id: Uuid,
    ) -> Result<Option<Reservation>, DbErr> {
        let model = reservation::Entity::find_by_id(id).one(txn).await?;
        Ok(model.map(reservation_from_model))
    }

    async fn persist(&self, txn: &DatabaseTransaction, r: &Reservation) -> Result<(), DbErr> {
        reservation_active_model(r).update(txn).await?;
        Ok(())
    }

    async fn insert(&self, txn: &DatabaseTransaction, r: &Reservation) -> Result<(), DbErr> {
        reservation_active_model(r).insert(txn).await?;
        Ok(())
    }

    async fn remove(&self, txn: &DatabaseTransaction, id: Uuid) -> Result<(), DbErr> {
        reservation::Entity::delete_by_id(id).exec(txn).await?;
        Ok(())
    }
}

pub struct InvoiceStore;

#[async_trait]
impl SyncStore for InvoiceStore {
    type Aggregate = Invoice;

    fn entity(&self) -> &'static str {
        "Invoice"
    }

    async fn exists(&self, db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let model = invoice::Entity::find_by_id(id).one(db).await?;
        Ok(model.is_some())
    }

    async fn load(&self, txn: &DatabaseTransaction, id: Uuid) -> Result<Option<Invoice>, DbErr> {
        let model = invoice::Entity::find_by_id(id).one(txn).await?;
        model
            .map(|m| {
                super::invoice_repository::invoice_from_model(m)
                    .map_err(|e| DbErr::Custom(e.to_string()))
            })
            .transpose()
    }

    async fn persist(&self, txn: &DatabaseTransaction, i: &Invoice) -> Result<(), DbErr> {
        invoice_active_model(i).update(txn).await?;
        Ok(())
    }

    async fn insert(&self, txn: &DatabaseTransaction, i: &Invoice) -> Result<(), DbErr> {
        invoice_active_model(i).insert(txn).await?;
        Ok(())
    }

    async fn remove(&self, txn: &DatabaseTransaction, id: Uuid) -> Result<(), DbErr> {
        invoice::Entity::delete_by_id(id).exec(txn).await?;
        Ok(())
    }
}
