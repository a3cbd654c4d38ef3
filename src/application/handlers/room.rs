//! Room management use cases

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::room::Room;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Room inventory; no billing counterpart, purely local.
pub struct RoomHandler {
    repos: Arc<dyn RepositoryProvider>,
}

impl RoomHandler {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, number: i32, capacity: i32, price_cents: i64) -> DomainResult<Room> {
        let room = Room::new(number, capacity, price_cents)?;
        self.repos.rooms().save(room.clone()).await?;
        info!(room = room.number, "room created");
        Ok(room)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Room> {
        self.repos
            .rooms()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Room>> {
        self.repos.rooms().find_all().await
    }

    /// Reprice the room. Existing reservations keep their snapshotted rate.
    pub async fn update_price(&self, id: Uuid, price_cents: i64) -> DomainResult<Room> {
        if price_cents <= 0 {
            return Err(DomainError::Validation(
                "room price must be positive".to_string(),
            ));
        }
        let mut room = self.get(id).await?;
        room.price_cents = price_cents;
        self.repos.rooms().update(room.clone()).await?;
        Ok(room)
    }

    pub async fn disable(&self, id: Uuid) -> DomainResult<Room> {
        let mut room = self.get(id).await?;
        room.disable()?;
        self.repos.rooms().update(room.clone()).await?;
        info!(room = room.number, "room taken out of service");
        Ok(room)
    }

    pub async fn enable(&self, id: Uuid) -> DomainResult<Room> {
        let mut room = self.get(id).await?;
        room.enable();
        self.repos.rooms().update(room.clone()).await?;
        Ok(room)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let active = self.repos.reservations().find_active_for_room(id).await?;
        if !active.is_empty() {
            return Err(DomainError::Conflict(
                "room has active reservations".to_string(),
            ));
        }
        self.repos.rooms().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_support::in_memory_db;

    async fn handler() -> RoomHandler {
        let db = in_memory_db().await;
        RoomHandler::new(Arc::new(SeaOrmRepositoryProvider::new(db)))
    }

    #[tokio::test]
    async fn duplicate_room_number_conflicts() {
        let h = handler().await;
        h.create(101, 2, 20_000).await.unwrap();
        let err = h.create(101, 4, 30_000).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn reprice_does_not_touch_status() {
        let h = handler().await;
        let room = h.create(101, 2, 20_000).await.unwrap();
        let updated = h.update_price(room.id, 25_000).await.unwrap();
        assert_eq!(updated.price_cents, 25_000);
        assert!(updated.is_bookable());
    }
}
