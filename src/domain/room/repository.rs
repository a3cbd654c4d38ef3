//! Room repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Room;
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn save(&self, room: Room) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Room>>;

    /// Find room by door number
    async fn find_by_number(&self, number: i32) -> DomainResult<Option<Room>>;

    async fn find_all(&self) -> DomainResult<Vec<Room>>;

    async fn update(&self, room: Room) -> DomainResult<()>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
