//! Room DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::room::Room;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomRequest {
    /// Door number, unique per hotel
    #[validate(range(min = 1))]
    pub number: i32,
    #[validate(range(min = 1, max = 20))]
    pub capacity: i32,
    /// Nightly rate in cents
    #[validate(range(min = 1))]
    pub price_cents: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomPriceRequest {
    #[validate(range(min = 1))]
    pub price_cents: i64,
}

/// Room details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDto {
    pub id: Uuid,
    pub number: i32,
    pub capacity: i32,
    pub price_cents: i64,
    pub status: String,
    pub created_at: String,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            number: r.number,
            capacity: r.capacity,
            price_cents: r.price_cents,
            status: r.status.to_string(),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
