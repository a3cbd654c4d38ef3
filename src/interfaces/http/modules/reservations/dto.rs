//! Reservation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::reservation::Reservation;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    pub room_id: Uuid,
    pub customer_id: Uuid,
    /// Expected arrival (ISO 8601)
    pub expected_check_in: DateTime<Utc>,
    /// Expected departure (ISO 8601); must be after arrival
    pub expected_check_out: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateExpectedCheckInRequest {
    /// New expected arrival; must stay before the stored check-out
    pub expected_check_in: DateTime<Utc>,
}

/// Reservation details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationDto {
    pub id: Uuid,
    pub room_id: Uuid,
    pub customer_id: Uuid,
    pub expected_check_in: String,
    pub expected_check_out: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub daily_rate_cents: i64,
    pub expected_nights: i64,
    /// Derived total: nightly rate times expected nights
    pub expected_total_cents: i64,
    pub status: String,
    /// Payment intent id at the billing provider
    pub billing_payment_intent_id: String,
    pub created_at: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            room_id: r.room_id,
            customer_id: r.customer_id,
            expected_check_in: r.expected_check_in.to_rfc3339(),
            expected_check_out: r.expected_check_out.to_rfc3339(),
            check_in: r.check_in.map(|t| t.to_rfc3339()),
            check_out: r.check_out.map(|t| t.to_rfc3339()),
            daily_rate_cents: r.daily_rate_cents,
            expected_nights: r.expected_nights(),
            expected_total_cents: r.expected_total_amount(),
            status: r.status.to_string(),
            billing_payment_intent_id: r.billing_payment_intent_id,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
