//! Room HTTP handlers

use axum::extract::{Path, State};
use uuid::Uuid;

use crate::interfaces::http::common::{ok, ApiResponse, ApiResult, EmptyData, ValidatedJson};
use crate::interfaces::http::router::AppState;

use super::dto::*;

#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "Rooms",
    request_body = CreateRoomRequest,
    responses(
        (status = 200, description = "Room created", body = ApiResponse<RoomDto>),
        (status = 409, description = "Room number already exists")
    )
)]
pub async fn create_room(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateRoomRequest>,
) -> ApiResult<RoomDto> {
    let room = state
        .rooms
        .create(req.number, req.capacity, req.price_cents)
        .await?;
    Ok(ok(room.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    responses(
        (status = 200, description = "All rooms ordered by number", body = ApiResponse<Vec<RoomDto>>)
    )
)]
pub async fn list_rooms(State(state): State<AppState>) -> ApiResult<Vec<RoomDto>> {
    let rooms = state.rooms.list().await?;
    Ok(ok(rooms.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = ApiResponse<RoomDto>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<RoomDto> {
    Ok(ok(state.rooms.get(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/rooms/{id}/price",
    tag = "Rooms",
    params(("id" = Uuid, Path, description = "Room ID")),
    request_body = UpdateRoomPriceRequest,
    responses(
        (status = 200, description = "Room repriced; existing reservations keep their rate", body = ApiResponse<RoomDto>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn update_room_price(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateRoomPriceRequest>,
) -> ApiResult<RoomDto> {
    Ok(ok(state.rooms.update_price(id, req.price_cents).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms/{id}/disable",
    tag = "Rooms",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room taken out of service", body = ApiResponse<RoomDto>),
        (status = 400, description = "Room is occupied"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn disable_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<RoomDto> {
    Ok(ok(state.rooms.disable(id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms/{id}/enable",
    tag = "Rooms",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room back in service", body = ApiResponse<RoomDto>),
        (status = 404, description = "Room not found")
    )
)]
pub async fn enable_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<RoomDto> {
    Ok(ok(state.rooms.enable(id).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room has active reservations")
    )
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state.rooms.delete(id).await?;
    Ok(ok(EmptyData {}))
}
