//! Permission HTTP handlers

use axum::extract::{Path, State};
use uuid::Uuid;

use crate::interfaces::http::common::{ok, ApiResponse, ApiResult, EmptyData, ValidatedJson};
use crate::interfaces::http::router::AppState;

use super::dto::*;

#[utoipa::path(
    post,
    path = "/api/v1/permissions",
    tag = "Permissions",
    request_body = CreatePermissionRequest,
    responses(
        (status = 200, description = "Permission created", body = ApiResponse<PermissionDto>),
        (status = 409, description = "Permission name already exists")
    )
)]
pub async fn create_permission(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreatePermissionRequest>,
) -> ApiResult<PermissionDto> {
    let permission = state.permissions.create(req.name, req.description).await?;
    Ok(ok(permission.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/permissions",
    tag = "Permissions",
    responses(
        (status = 200, description = "All permissions", body = ApiResponse<Vec<PermissionDto>>)
    )
)]
pub async fn list_permissions(State(state): State<AppState>) -> ApiResult<Vec<PermissionDto>> {
    let permissions = state.permissions.list().await?;
    Ok(ok(permissions.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/permissions/{id}",
    tag = "Permissions",
    params(("id" = Uuid, Path, description = "Permission ID")),
    responses(
        (status = 200, description = "Permission details", body = ApiResponse<PermissionDto>),
        (status = 404, description = "Permission not found")
    )
)]
pub async fn get_permission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<PermissionDto> {
    Ok(ok(state.permissions.get(id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/permissions/{id}/enable",
    tag = "Permissions",
    params(("id" = Uuid, Path, description = "Permission ID")),
    responses(
        (status = 200, description = "Permission enabled", body = ApiResponse<PermissionDto>),
        (status = 404, description = "Permission not found")
    )
)]
pub async fn enable_permission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<PermissionDto> {
    Ok(ok(state.permissions.set_enabled(id, true).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/permissions/{id}/disable",
    tag = "Permissions",
    params(("id" = Uuid, Path, description = "Permission ID")),
    responses(
        (status = 200, description = "Permission disabled", body = ApiResponse<PermissionDto>),
        (status = 404, description = "Permission not found")
    )
)]
pub async fn disable_permission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<PermissionDto> {
    Ok(ok(state.permissions.set_enabled(id, false).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/permissions/{id}",
    tag = "Permissions",
    params(("id" = Uuid, Path, description = "Permission ID")),
    responses(
        (status = 200, description = "Permission deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Permission not found")
    )
)]
pub async fn delete_permission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state.permissions.delete(id).await?;
    Ok(ok(EmptyData {}))
}
