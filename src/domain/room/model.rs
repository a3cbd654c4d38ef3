//! Room domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};

/// Room availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    /// Free for new reservations
    Available,
    /// Held by an active reservation
    Reserved,
    /// Guest currently checked in
    Occupied,
    /// Disabled by staff (maintenance etc.)
    OutOfService,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Occupied => "Occupied",
            Self::OutOfService => "OutOfService",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Available" => Self::Available,
            "Reserved" => Self::Reserved,
            "Occupied" => Self::Occupied,
            _ => Self::OutOfService,
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hotel room with a nightly rate in cents.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: Uuid,
    /// Door number, unique per hotel
    pub number: i32,
    pub capacity: i32,
    pub price_cents: i64,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(number: i32, capacity: i32, price_cents: i64) -> DomainResult<Self> {
        if number <= 0 {
            return Err(DomainError::Validation(
                "room number must be positive".to_string(),
            ));
        }
        if capacity <= 0 {
            return Err(DomainError::Validation(
                "room capacity must be positive".to_string(),
            ));
        }
        if price_cents <= 0 {
            return Err(DomainError::Validation(
                "room price must be positive".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            number,
            capacity,
            price_cents,
            status: RoomStatus::Available,
            created_at: Utc::now(),
        })
    }

    pub fn is_bookable(&self) -> bool {
        self.status == RoomStatus::Available
    }

    pub fn mark_reserved(&mut self) {
        self.status = RoomStatus::Reserved;
    }

    pub fn mark_occupied(&mut self) {
        self.status = RoomStatus::Occupied;
    }

    pub fn mark_available(&mut self) {
        self.status = RoomStatus::Available;
    }

    /// Take the room out of service. Fails while a guest is checked in.
    pub fn disable(&mut self) -> DomainResult<()> {
        if self.status == RoomStatus::Occupied {
            return Err(DomainError::Validation(
                "cannot disable an occupied room".to_string(),
            ));
        }
        self.status = RoomStatus::OutOfService;
        Ok(())
    }

    pub fn enable(&mut self) {
        if self.status == RoomStatus::OutOfService {
            self.status = RoomStatus::Available;
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_room_is_available() {
        let room = Room::new(101, 2, 25_000).unwrap();
        assert!(room.is_bookable());
        assert_eq!(room.status, RoomStatus::Available);
    }

    #[test]
    fn rejects_non_positive_fields() {
        assert!(Room::new(0, 2, 25_000).is_err());
        assert!(Room::new(101, 0, 25_000).is_err());
        assert!(Room::new(101, 2, 0).is_err());
    }

    #[test]
    fn cannot_disable_occupied_room() {
        let mut room = Room::new(101, 2, 25_000).unwrap();
        room.mark_occupied();
        assert!(room.disable().is_err());
        assert_eq!(room.status, RoomStatus::Occupied);
    }

    #[test]
    fn enable_restores_availability() {
        let mut room = Room::new(101, 2, 25_000).unwrap();
        room.disable().unwrap();
        room.enable();
        assert!(room.is_bookable());
    }

    #[test]
    fn status_roundtrip() {
        for status in &[
            RoomStatus::Available,
            RoomStatus::Reserved,
            RoomStatus::Occupied,
            RoomStatus::OutOfService,
        ] {
            assert_eq!(&RoomStatus::from_str(status.as_str()), status);
        }
    }
}
