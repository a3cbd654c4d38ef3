//! Invoice domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::reservation::Reservation;

/// Payment method declared by the guest at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Pix,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CreditCard => "CreditCard",
            Self::DebitCard => "DebitCard",
            Self::Pix => "Pix",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Cash" => Some(Self::Cash),
            "CreditCard" => Some(Self::CreditCard),
            "DebitCard" => Some(Self::DebitCard),
            "Pix" => Some(Self::Pix),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Room invoice issued at checkout.
///
/// Carries the reservation's payment-intent id as its remote counterpart;
/// the invoice creation flow captures that intent for `total_cents`.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub payment_method: PaymentMethod,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub billing_payment_intent_id: String,
    pub issued_at: DateTime<Utc>,
}

impl Invoice {
    /// Build the invoice for a reservation. The reservation must already
    /// be checked out; the subtotal comes from its expected total.
    pub fn for_reservation(
        reservation: &Reservation,
        payment_method: PaymentMethod,
        tax_cents: i64,
    ) -> DomainResult<Self> {
        if tax_cents < 0 {
            return Err(DomainError::Validation(
                "tax must not be negative".to_string(),
            ));
        }
        let subtotal = reservation.expected_total_amount();
        if subtotal <= 0 {
            return Err(DomainError::Validation(
                "invoice subtotal must be positive".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            reservation_id: reservation.id,
            payment_method,
            subtotal_cents: subtotal,
            tax_cents,
            billing_payment_intent_id: reservation.billing_payment_intent_id.clone(),
            issued_at: Utc::now(),
        })
    }

    pub fn total_cents(&self) -> i64 {
        self.subtotal_cents + self.tax_cents
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::room::Room;
    use chrono::TimeZone;

    fn sample_reservation() -> Reservation {
        let room = Room::new(101, 2, 20_000).unwrap();
        Reservation::new(
            &room,
            Uuid::new_v4(),
            Utc.with_ymd_and_hms(2026, 3, 5, 14, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 10, 11, 0, 0).unwrap(),
            "pi_123",
        )
        .unwrap()
    }

    #[test]
    fn invoice_totals_subtotal_plus_tax() {
        let r = sample_reservation();
        let invoice = Invoice::for_reservation(&r, PaymentMethod::CreditCard, 5_000).unwrap();
        assert_eq!(invoice.subtotal_cents, 100_000);
        assert_eq!(invoice.total_cents(), 105_000);
        assert_eq!(invoice.billing_payment_intent_id, "pi_123");
        assert_eq!(invoice.reservation_id, r.id);
    }

    #[test]
    fn rejects_negative_tax() {
        let r = sample_reservation();
        assert!(Invoice::for_reservation(&r, PaymentMethod::Cash, -1).is_err());
    }

    #[test]
    fn payment_method_roundtrip() {
        for m in &[
            PaymentMethod::Cash,
            PaymentMethod::CreditCard,
            PaymentMethod::DebitCard,
            PaymentMethod::Pix,
        ] {
            assert_eq!(PaymentMethod::from_str(m.as_str()), Some(*m));
        }
        assert_eq!(PaymentMethod::from_str("Barter"), None);
    }
}
