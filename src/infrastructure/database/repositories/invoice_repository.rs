//! SeaORM implementation of InvoiceRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::invoice::{Invoice, InvoiceRepository, PaymentMethod};
use crate::domain::{db_err, DomainError, DomainResult};
use crate::infrastructure::database::entities::invoice;

pub struct SeaOrmInvoiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmInvoiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn invoice_from_model(model: invoice::Model) -> DomainResult<Invoice> {
    let payment_method = PaymentMethod::from_str(&model.payment_method).ok_or_else(|| {
        DomainError::Persistence(format!(
            "invoice {} has unknown payment method '{}'",
            model.id, model.payment_method
        ))
    })?;
    Ok(Invoice {
        id: model.id,
        reservation_id: model.reservation_id,
        payment_method,
        subtotal_cents: model.subtotal_cents,
        tax_cents: model.tax_cents,
        billing_payment_intent_id: model.billing_payment_intent_id,
        issued_at: model.issued_at,
    })
}

pub(crate) fn invoice_active_model(i: &Invoice) -> invoice::ActiveModel {
    invoice::ActiveModel {
        id: Set(i.id),
        reservation_id: Set(i.reservation_id),
        payment_method: Set(i.payment_method.as_str().to_string()),
        subtotal_cents: Set(i.subtotal_cents),
        tax_cents: Set(i.tax_cents),
        billing_payment_intent_id: Set(i.billing_payment_intent_id.clone()),
        issued_at: Set(i.issued_at),
    }
}

#[async_trait]
impl InvoiceRepository for SeaOrmInvoiceRepository {
    async fn save(&self, i: Invoice) -> DomainResult<()> {
        debug!("Saving invoice: {}", i.id);
        invoice_active_model(&i)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Invoice>> {
        let model = invoice::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(invoice_from_model).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Invoice>> {
        let models = invoice::Entity::find()
            .order_by_desc(invoice::Column::IssuedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(invoice_from_model).collect()
    }

    async fn find_for_reservation(&self, reservation_id: Uuid) -> DomainResult<Vec<Invoice>> {
        let models = invoice::Entity::find()
            .filter(invoice::Column::ReservationId.eq(reservation_id))
            .order_by_desc(invoice::Column::IssuedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(invoice_from_model).collect()
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = invoice::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Invoice", id));
        }
        Ok(())
    }
}
