//! Reservation HTTP handlers

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use crate::interfaces::http::common::{ok, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::router::AppState;

use super::dto::*;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ReservationFilter {
    /// Restrict to one customer's reservations
    pub customer_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 200, description = "Reservation created with its payment intent", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Room not bookable or invalid stay"),
        (status = 404, description = "Room or customer not found"),
        (status = 422, description = "Billing provider rejected the payment intent"),
        (status = 503, description = "Billing provider unreachable")
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateReservationRequest>,
) -> ApiResult<ReservationDto> {
    let reservation = state
        .reservations
        .create(
            req.room_id,
            req.customer_id,
            req.expected_check_in,
            req.expected_check_out,
        )
        .await?;
    Ok(ok(reservation.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    params(ReservationFilter),
    responses(
        (status = 200, description = "Reservations, newest first", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(filter): Query<ReservationFilter>,
) -> ApiResult<Vec<ReservationDto>> {
    let reservations = match filter.customer_id {
        Some(customer_id) => state.reservations.list_for_customer(customer_id).await?,
        None => state.reservations.list().await?,
    };
    Ok(ok(reservations.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<ReservationDto> {
    Ok(ok(state.reservations.get(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/reservations/{id}/expected-check-in",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "Reservation ID")),
    request_body = UpdateExpectedCheckInRequest,
    responses(
        (status = 200, description = "Check-in moved and intent repriced", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Date past the stored check-out or reservation not pending"),
        (status = 404, description = "Reservation not found"),
        (status = 422, description = "Billing provider rejected the new amount"),
        (status = 503, description = "Billing provider unreachable")
    )
)]
pub async fn update_expected_check_in(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateExpectedCheckInRequest>,
) -> ApiResult<ReservationDto> {
    let reservation = state
        .reservations
        .update_expected_check_in(id, req.expected_check_in)
        .await?;
    Ok(ok(reservation.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/{id}/check-in",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Guest checked in", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Reservation not pending"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<ReservationDto> {
    Ok(ok(state.reservations.check_in(id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/{id}/cancel",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation cancelled, intent voided", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Reservation not pending"),
        (status = 404, description = "Reservation not found"),
        (status = 503, description = "Billing provider unreachable")
    )
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<ReservationDto> {
    Ok(ok(state.reservations.cancel(id).await?.into()))
}
