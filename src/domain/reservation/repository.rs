//! Reservation repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Reservation;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn save(&self, reservation: Reservation) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>>;

    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Reservations for a room that are not cancelled or checked out.
    async fn find_active_for_room(&self, room_id: Uuid) -> DomainResult<Vec<Reservation>>;

    /// All reservations of a customer, newest first.
    async fn find_for_customer(&self, customer_id: Uuid) -> DomainResult<Vec<Reservation>>;

    async fn update(&self, reservation: Reservation) -> DomainResult<()>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
