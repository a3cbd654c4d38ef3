//! Reservation domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::room::Room;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Booked, guest not arrived yet
    Created,
    /// Guest checked in
    CheckedIn,
    /// Stay finished, invoice issued
    CheckedOut,
    /// Cancelled before arrival
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::CheckedIn => "CheckedIn",
            Self::CheckedOut => "CheckedOut",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Created" => Self::Created,
            "CheckedIn" => Self::CheckedIn,
            "CheckedOut" => Self::CheckedOut,
            _ => Self::Cancelled,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Room reservation with a billing-provider payment intent.
///
/// `daily_rate_cents` is snapshotted from the room at creation so later
/// price changes do not retroactively reprice the stay.
/// `billing_payment_intent_id` is the remote counterpart identifier; only
/// the creation/cancellation flows touch it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Uuid,
    pub room_id: Uuid,
    pub customer_id: Uuid,
    pub expected_check_in: DateTime<Utc>,
    pub expected_check_out: DateTime<Utc>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub daily_rate_cents: i64,
    pub status: ReservationStatus,
    pub billing_payment_intent_id: String,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Book a room for a customer. The room must be bookable and the
    /// expected stay must cover at least one night.
    pub fn new(
        room: &Room,
        customer_id: Uuid,
        expected_check_in: DateTime<Utc>,
        expected_check_out: DateTime<Utc>,
        billing_payment_intent_id: impl Into<String>,
    ) -> DomainResult<Self> {
        if !room.is_bookable() {
            return Err(DomainError::Validation(format!(
                "room {} is not available for booking",
                room.number
            )));
        }
        validate_stay(expected_check_in, expected_check_out, room.price_cents)?;

        Ok(Self {
            id: Uuid::new_v4(),
            room_id: room.id,
            customer_id,
            expected_check_in,
            expected_check_out,
            check_in: None,
            check_out: None,
            daily_rate_cents: room.price_cents,
            status: ReservationStatus::Created,
            billing_payment_intent_id: billing_payment_intent_id.into(),
            created_at: Utc::now(),
        })
    }

    /// Whole nights between the expected dates.
    pub fn expected_nights(&self) -> i64 {
        (self.expected_check_out.date_naive() - self.expected_check_in.date_naive()).num_days()
    }

    /// Derived total: nightly rate × expected stay length. Recomputed
    /// every time `expected_check_in` changes and pushed to the payment
    /// intent by the synchronizer.
    pub fn expected_total_amount(&self) -> i64 {
        self.expected_nights() * self.daily_rate_cents
    }

    /// Move the expected check-in date.
    ///
    /// Fails before mutating when the reservation is no longer pending,
    /// when the new date is not strictly before the stored check-out, or
    /// when the recomputed total would not be positive.
    pub fn update_expected_check_in(&mut self, new_check_in: DateTime<Utc>) -> DomainResult<()> {
        if self.status != ReservationStatus::Created {
            return Err(DomainError::Validation(format!(
                "cannot move check-in of a {} reservation",
                self.status
            )));
        }
        validate_stay(new_check_in, self.expected_check_out, self.daily_rate_cents)?;

        self.expected_check_in = new_check_in;
        Ok(())
    }

    /// Guest arrival.
    pub fn register_check_in(&mut self) -> DomainResult<()> {
        if self.status != ReservationStatus::Created {
            return Err(DomainError::Validation(format!(
                "cannot check in a {} reservation",
                self.status
            )));
        }
        self.status = ReservationStatus::CheckedIn;
        self.check_in = Some(Utc::now());
        Ok(())
    }

    /// Guest departure; the invoice flow captures the payment intent.
    pub fn register_check_out(&mut self) -> DomainResult<()> {
        if self.status != ReservationStatus::CheckedIn {
            return Err(DomainError::Validation(format!(
                "cannot check out a {} reservation",
                self.status
            )));
        }
        self.status = ReservationStatus::CheckedOut;
        self.check_out = Some(Utc::now());
        Ok(())
    }

    /// Cancel before arrival.
    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.status != ReservationStatus::Created {
            return Err(DomainError::Validation(format!(
                "cannot cancel a {} reservation",
                self.status
            )));
        }
        self.status = ReservationStatus::Cancelled;
        Ok(())
    }
}

fn validate_stay(
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    daily_rate_cents: i64,
) -> DomainResult<()> {
    if check_in >= check_out {
        return Err(DomainError::Validation(
            "expected check-in must be before expected check-out".to_string(),
        ));
    }
    let nights = (check_out.date_naive() - check_in.date_naive()).num_days();
    if nights <= 0 {
        return Err(DomainError::Validation(
            "stay must cover at least one night".to_string(),
        ));
    }
    if nights * daily_rate_cents <= 0 {
        return Err(DomainError::Validation(
            "expected total amount must be positive".to_string(),
        ));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 14, 0, 0).unwrap()
    }

    fn sample_room() -> Room {
        Room::new(101, 2, 20_000).unwrap()
    }

    fn sample_reservation() -> Reservation {
        Reservation::new(&sample_room(), Uuid::new_v4(), day(5), day(10), "pi_123").unwrap()
    }

    #[test]
    fn total_amount_is_rate_times_nights() {
        let r = sample_reservation();
        assert_eq!(r.expected_nights(), 5);
        assert_eq!(r.expected_total_amount(), 100_000);
    }

    #[test]
    fn rejects_check_in_after_check_out() {
        let room = sample_room();
        assert!(Reservation::new(&room, Uuid::new_v4(), day(10), day(5), "pi_1").is_err());
    }

    #[test]
    fn rejects_unbookable_room() {
        let mut room = sample_room();
        room.mark_occupied();
        assert!(Reservation::new(&room, Uuid::new_v4(), day(5), day(10), "pi_1").is_err());
    }

    #[test]
    fn update_check_in_recomputes_amount() {
        let mut r = sample_reservation();
        r.update_expected_check_in(day(8)).unwrap();
        assert_eq!(r.expected_nights(), 2);
        assert_eq!(r.expected_total_amount(), 40_000);
        assert_eq!(r.billing_payment_intent_id, "pi_123");
    }

    #[test]
    fn update_check_in_past_check_out_fails_without_mutation() {
        let mut r = sample_reservation();
        let before = r.expected_check_in;
        assert!(r.update_expected_check_in(day(15)).is_err());
        assert_eq!(r.expected_check_in, before);
    }

    #[test]
    fn update_check_in_same_day_stay_fails() {
        let mut r = sample_reservation();
        // less than one whole night before check-out
        let late = day(10) - Duration::hours(2);
        assert!(r.update_expected_check_in(late).is_err());
    }

    #[test]
    fn lifecycle_transitions() {
        let mut r = sample_reservation();
        r.register_check_in().unwrap();
        assert_eq!(r.status, ReservationStatus::CheckedIn);
        assert!(r.check_in.is_some());

        r.register_check_out().unwrap();
        assert_eq!(r.status, ReservationStatus::CheckedOut);
        assert!(r.check_out.is_some());

        // terminal: no further transitions
        assert!(r.cancel().is_err());
        assert!(r.register_check_in().is_err());
    }

    #[test]
    fn cannot_move_check_in_after_arrival() {
        let mut r = sample_reservation();
        r.register_check_in().unwrap();
        assert!(r.update_expected_check_in(day(6)).is_err());
    }

    #[test]
    fn status_roundtrip() {
        for status in &[
            ReservationStatus::Created,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
            ReservationStatus::Cancelled,
        ] {
            assert_eq!(&ReservationStatus::from_str(status.as_str()), status);
        }
    }
}
