//! Reservation use cases

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::sync::Synchronizer;
use crate::domain::ports::{BillingGateway, RemoteOp};
use crate::domain::reservation::Reservation;
use crate::domain::room::{Room, RoomStatus};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::database::repositories::ReservationStore;

/// Booking lifecycle and its payment intent.
///
/// The nightly rate is snapshotted at creation; moving the expected
/// check-in reprices the stay and pushes the new amount to the intent
/// through the synchronizer.
pub struct ReservationHandler {
    repos: Arc<dyn RepositoryProvider>,
    sync: Arc<Synchronizer>,
    gateway: Arc<dyn BillingGateway>,
    currency: String,
}

impl ReservationHandler {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        sync: Arc<Synchronizer>,
        gateway: Arc<dyn BillingGateway>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            repos,
            sync,
            gateway,
            currency: currency.into(),
        }
    }

    pub async fn create(
        &self,
        room_id: Uuid,
        customer_id: Uuid,
        expected_check_in: DateTime<Utc>,
        expected_check_out: DateTime<Utc>,
    ) -> DomainResult<Reservation> {
        let mut room = self
            .repos
            .rooms()
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", room_id))?;
        let customer = self
            .repos
            .customers()
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer", customer_id))?;

        // Validates the room state and the stay window before anything
        // touches the provider; the intent id is filled in afterwards.
        let mut reservation = Reservation::new(
            &room,
            customer.id,
            expected_check_in,
            expected_check_out,
            "",
        )?;

        let intent_id = self
            .gateway
            .create_payment_intent(
                &customer.billing_customer_id,
                reservation.expected_total_amount(),
                &self.currency,
            )
            .await
            .map_err(DomainError::from)?;
        reservation.billing_payment_intent_id = intent_id.clone();

        if let Err(e) = self.persist_new(&mut room, &reservation).await {
            warn!(
                reservation_id = %reservation.id,
                remote_id = %intent_id,
                "local insert failed after intent creation, compensating"
            );
            if let Err(cleanup) = self.gateway.cancel_payment_intent(&intent_id).await {
                warn!(remote_id = %intent_id, error = %cleanup, "compensation failed, orphan payment intent");
            }
            return Err(e);
        }

        info!(
            reservation_id = %reservation.id,
            room = room.number,
            amount_cents = reservation.expected_total_amount(),
            "reservation created"
        );
        Ok(reservation)
    }

    async fn persist_new(&self, room: &mut Room, r: &Reservation) -> DomainResult<()> {
        self.repos.reservations().save(r.clone()).await?;
        room.mark_reserved();
        self.repos.rooms().update(room.clone()).await
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Reservation> {
        self.repos
            .reservations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Reservation>> {
        self.repos.reservations().find_all().await
    }

    pub async fn list_for_customer(&self, customer_id: Uuid) -> DomainResult<Vec<Reservation>> {
        self.repos.reservations().find_for_customer(customer_id).await
    }

    /// Move the expected check-in date and reprice the payment intent.
    ///
    /// Invalid input fails on a plain read, before any transaction is
    /// opened or the provider is contacted; the same mutation is then
    /// re-applied inside the synchronizer's transaction.
    pub async fn update_expected_check_in(
        &self,
        id: Uuid,
        new_check_in: DateTime<Utc>,
    ) -> DomainResult<Reservation> {
        let mut preview = self.get(id).await?;
        preview.update_expected_check_in(new_check_in)?;

        self.sync
            .execute(
                &ReservationStore,
                id,
                |r| r.update_expected_check_in(new_check_in),
                |r| RemoteOp::UpdatePaymentIntentAmount {
                    remote_id: r.billing_payment_intent_id.clone(),
                    amount_cents: r.expected_total_amount(),
                },
            )
            .await
    }

    /// Guest arrival; purely local.
    pub async fn check_in(&self, id: Uuid) -> DomainResult<Reservation> {
        let mut reservation = self.get(id).await?;
        reservation.register_check_in()?;
        self.repos.reservations().update(reservation.clone()).await?;
        self.set_room_status(reservation.room_id, RoomStatus::Occupied)
            .await?;
        info!(reservation_id = %id, "guest checked in");
        Ok(reservation)
    }

    /// Cancel before arrival and void the payment intent.
    pub async fn cancel(&self, id: Uuid) -> DomainResult<Reservation> {
        let reservation = self
            .sync
            .execute(
                &ReservationStore,
                id,
                |r| r.cancel(),
                |r| RemoteOp::CancelPaymentIntent {
                    remote_id: r.billing_payment_intent_id.clone(),
                },
            )
            .await?;

        self.set_room_status(reservation.room_id, RoomStatus::Available)
            .await?;
        info!(reservation_id = %id, "reservation cancelled");
        Ok(reservation)
    }

    async fn set_room_status(&self, room_id: Uuid, status: RoomStatus) -> DomainResult<()> {
        let mut room = self
            .repos
            .rooms()
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", room_id))?;
        room.status = status;
        self.repos.rooms().update(room).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    use crate::domain::customer::Customer;
    use crate::domain::ports::GatewayError;
    use crate::domain::room::Room;
    use crate::domain::value_objects::{Address, Email, PersonName, Phone};
    use crate::infrastructure::billing::RecordingBillingGateway;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_support::in_memory_db;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 14, 0, 0).unwrap()
    }

    struct Fixture {
        handler: ReservationHandler,
        repos: Arc<dyn RepositoryProvider>,
        gateway: Arc<RecordingBillingGateway>,
        room: Room,
        customer: Customer,
    }

    async fn fixture() -> Fixture {
        let db = in_memory_db().await;
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let gateway = Arc::new(RecordingBillingGateway::new());
        let sync = Arc::new(Synchronizer::new(db, gateway.clone()));
        let handler =
            ReservationHandler::new(repos.clone(), sync, gateway.clone(), "brl");

        let room = Room::new(101, 2, 20_000).unwrap();
        repos.rooms().save(room.clone()).await.unwrap();
        let customer = Customer::new(
            PersonName::new("Jane", "Doe").unwrap(),
            Email::new("jane@example.com").unwrap(),
            Phone::new("+5511987654321").unwrap(),
            Address::new("Brazil", "São Paulo", "Rua Augusta", 120).unwrap(),
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "cus_123",
        );
        repos.customers().save(customer.clone()).await.unwrap();

        Fixture {
            handler,
            repos,
            gateway,
            room,
            customer,
        }
    }

    async fn book(f: &Fixture) -> Reservation {
        f.handler
            .create(f.room.id, f.customer.id, day(5), day(10))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_opens_intent_for_expected_total() {
        let f = fixture().await;
        let reservation = book(&f).await;

        assert_eq!(reservation.expected_total_amount(), 100_000);
        assert!(reservation.billing_payment_intent_id.starts_with("pi_mock_"));

        let calls = f.gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].op, "billing.create_payment_intent");
        assert_eq!(calls[0].remote_id, "cus_123");

        // Room is held by the booking.
        let room = f.repos.rooms().find_by_id(f.room.id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Reserved);
    }

    #[tokio::test]
    async fn create_rejects_reserved_room_without_remote_call() {
        let f = fixture().await;
        book(&f).await;
        let before = f.gateway.call_count();

        let err = f
            .handler
            .create(f.room.id, f.customer.id, day(12), day(14))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(f.gateway.call_count(), before);
    }

    #[tokio::test]
    async fn moving_check_in_reprices_the_intent() {
        let f = fixture().await;
        let reservation = book(&f).await;

        let updated = f
            .handler
            .update_expected_check_in(reservation.id, day(7))
            .await
            .unwrap();
        assert_eq!(updated.expected_nights(), 3);
        assert_eq!(updated.expected_total_amount(), 60_000);

        let last = f.gateway.calls().pop().unwrap();
        assert_eq!(last.op, "billing.update_payment_intent_amount");
        assert_eq!(last.remote_id, reservation.billing_payment_intent_id);
    }

    #[tokio::test]
    async fn check_in_past_check_out_fails_without_remote_call() {
        let f = fixture().await;
        let reservation = book(&f).await;
        let before = f.gateway.call_count();

        let err = f
            .handler
            .update_expected_check_in(reservation.id, day(11))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(f.gateway.call_count(), before);

        let stored = f.handler.get(reservation.id).await.unwrap();
        assert_eq!(stored.expected_check_in, day(5));
    }

    #[tokio::test]
    async fn unreachable_provider_leaves_dates_and_amount_unchanged() {
        let f = fixture().await;
        let reservation = book(&f).await;
        f.gateway
            .set_failure(Some(GatewayError::Unreachable("timeout".into())));

        let err = f
            .handler
            .update_expected_check_in(reservation.id, day(7))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RemoteUnreachable(_)));

        let stored = f.handler.get(reservation.id).await.unwrap();
        assert_eq!(stored.expected_check_in, day(5));
        assert_eq!(stored.expected_total_amount(), 100_000);
    }

    #[tokio::test]
    async fn cancel_voids_the_intent_and_frees_the_room() {
        let f = fixture().await;
        let reservation = book(&f).await;

        let cancelled = f.handler.cancel(reservation.id).await.unwrap();
        assert_eq!(
            cancelled.status,
            crate::domain::reservation::ReservationStatus::Cancelled
        );
        assert_eq!(
            f.gateway.calls().last().unwrap().op,
            "billing.cancel_payment_intent"
        );

        let room = f.repos.rooms().find_by_id(f.room.id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Available);
    }

    #[tokio::test]
    async fn check_in_occupies_the_room_locally() {
        let f = fixture().await;
        let reservation = book(&f).await;
        let before = f.gateway.call_count();

        let checked_in = f.handler.check_in(reservation.id).await.unwrap();
        assert!(checked_in.check_in.is_some());
        assert_eq!(f.gateway.call_count(), before);

        let room = f.repos.rooms().find_by_id(f.room.id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
    }
}
