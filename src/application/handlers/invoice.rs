//! Invoice use cases

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::application::sync::Synchronizer;
use crate::domain::invoice::{Invoice, PaymentMethod};
use crate::domain::ports::RemoteOp;
use crate::domain::room::RoomStatus;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::database::repositories::InvoiceStore;

/// Checkout: issue the invoice and capture the payment intent.
pub struct InvoiceHandler {
    repos: Arc<dyn RepositoryProvider>,
    sync: Arc<Synchronizer>,
}

impl InvoiceHandler {
    pub fn new(repos: Arc<dyn RepositoryProvider>, sync: Arc<Synchronizer>) -> Self {
        Self { repos, sync }
    }

    /// Check the guest out: insert the invoice and capture its payment
    /// intent atomically, then mark the reservation checked out and free
    /// the room.
    ///
    /// The checkout transition is validated up front so an ineligible
    /// reservation fails before the provider is contacted.
    pub async fn create(
        &self,
        reservation_id: Uuid,
        payment_method: PaymentMethod,
        tax_cents: i64,
    ) -> DomainResult<Invoice> {
        let mut reservation = self
            .repos
            .reservations()
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", reservation_id))?;
        reservation.register_check_out()?;

        let invoice = Invoice::for_reservation(&reservation, payment_method, tax_cents)?;
        let invoice = self
            .sync
            .create(&InvoiceStore, invoice, |i: &Invoice| {
                RemoteOp::CapturePaymentIntent {
                    remote_id: i.billing_payment_intent_id.clone(),
                    amount_cents: i.total_cents(),
                }
            })
            .await?;

        self.repos.reservations().update(reservation.clone()).await?;
        let mut room = self
            .repos
            .rooms()
            .find_by_id(reservation.room_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", reservation.room_id))?;
        room.status = RoomStatus::Available;
        self.repos.rooms().update(room).await?;

        info!(
            invoice_id = %invoice.id,
            reservation_id = %reservation_id,
            total_cents = invoice.total_cents(),
            "invoice issued and payment captured"
        );
        Ok(invoice)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Invoice> {
        self.repos
            .invoices()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Invoice", id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Invoice>> {
        self.repos.invoices().find_all().await
    }

    pub async fn list_for_reservation(&self, reservation_id: Uuid) -> DomainResult<Vec<Invoice>> {
        self.repos
            .invoices()
            .find_for_reservation(reservation_id)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.invoices().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use crate::domain::customer::Customer;
    use crate::domain::ports::GatewayError;
    use crate::domain::reservation::{Reservation, ReservationStatus};
    use crate::domain::room::Room;
    use crate::domain::value_objects::{Address, Email, PersonName, Phone};
    use crate::infrastructure::billing::RecordingBillingGateway;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_support::in_memory_db;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 14, 0, 0).unwrap()
    }

    struct Fixture {
        handler: InvoiceHandler,
        repos: Arc<dyn RepositoryProvider>,
        gateway: Arc<RecordingBillingGateway>,
        reservation: Reservation,
    }

    /// Seeds a checked-in reservation for room 101, five nights at 200.00.
    async fn fixture() -> Fixture {
        let db = in_memory_db().await;
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let gateway = Arc::new(RecordingBillingGateway::new());
        let sync = Arc::new(Synchronizer::new(db, gateway.clone()));
        let handler = InvoiceHandler::new(repos.clone(), sync);

        let mut room = Room::new(101, 2, 20_000).unwrap();
        let customer = Customer::new(
            PersonName::new("Jane", "Doe").unwrap(),
            Email::new("jane@example.com").unwrap(),
            Phone::new("+5511987654321").unwrap(),
            Address::new("Brazil", "São Paulo", "Rua Augusta", 120).unwrap(),
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "cus_123",
        );
        let mut reservation =
            Reservation::new(&room, customer.id, day(5), day(10), "pi_123").unwrap();
        reservation.register_check_in().unwrap();
        room.mark_occupied();

        repos.rooms().save(room).await.unwrap();
        repos.customers().save(customer).await.unwrap();
        repos.reservations().save(reservation.clone()).await.unwrap();

        Fixture {
            handler,
            repos,
            gateway,
            reservation,
        }
    }

    #[tokio::test]
    async fn checkout_captures_intent_for_total_with_tax() {
        let f = fixture().await;

        let invoice = f
            .handler
            .create(f.reservation.id, PaymentMethod::CreditCard, 5_000)
            .await
            .unwrap();
        assert_eq!(invoice.subtotal_cents, 100_000);
        assert_eq!(invoice.total_cents(), 105_000);

        let calls = f.gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].op, "billing.capture_payment_intent");
        assert_eq!(calls[0].remote_id, "pi_123");

        let stored = f
            .repos
            .reservations()
            .find_by_id(f.reservation.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, ReservationStatus::CheckedOut);
        assert!(stored.check_out.is_some());
    }

    #[tokio::test]
    async fn rejected_capture_leaves_no_invoice_and_guest_checked_in() {
        let f = fixture().await;
        f.gateway
            .set_failure(Some(GatewayError::Rejected("card declined".into())));

        let err = f
            .handler
            .create(f.reservation.id, PaymentMethod::CreditCard, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RemoteRejected(_)));

        assert!(f.handler.list().await.unwrap().is_empty());
        let stored = f
            .repos
            .reservations()
            .find_by_id(f.reservation.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, ReservationStatus::CheckedIn);
    }

    #[tokio::test]
    async fn cannot_invoice_a_pending_reservation() {
        let f = fixture().await;
        let room = Room::new(102, 2, 20_000).unwrap();
        let pending =
            Reservation::new(&room, f.reservation.customer_id, day(5), day(10), "pi_456").unwrap();
        f.repos.rooms().save(room).await.unwrap();
        f.repos.reservations().save(pending.clone()).await.unwrap();

        let err = f
            .handler
            .create(pending.id, PaymentMethod::Cash, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(f.gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn negative_tax_is_rejected_before_any_remote_call() {
        let f = fixture().await;

        let err = f
            .handler
            .create(f.reservation.id, PaymentMethod::Pix, -1)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(f.gateway.call_count(), 0);
    }
}
