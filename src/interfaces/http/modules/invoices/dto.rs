//! Invoice DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::invoice::Invoice;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInvoiceRequest {
    pub reservation_id: Uuid,
    /// One of: "Cash", "CreditCard", "DebitCard", "Pix"
    pub payment_method: String,
    #[validate(range(min = 0))]
    pub tax_cents: i64,
}

/// Invoice details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceDto {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub payment_method: String,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    /// Captured payment intent at the billing provider
    pub billing_payment_intent_id: String,
    pub issued_at: String,
}

impl From<Invoice> for InvoiceDto {
    fn from(i: Invoice) -> Self {
        Self {
            id: i.id,
            reservation_id: i.reservation_id,
            payment_method: i.payment_method.to_string(),
            subtotal_cents: i.subtotal_cents,
            tax_cents: i.tax_cents,
            total_cents: i.total_cents(),
            billing_payment_intent_id: i.billing_payment_intent_id,
            issued_at: i.issued_at.to_rfc3339(),
        }
    }
}
