//! Admin HTTP handlers

use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::value_objects::{Email, PersonName, Phone};
use crate::interfaces::http::common::{ok, ApiResponse, ApiResult, EmptyData, ValidatedJson};
use crate::interfaces::http::modules::permissions::PermissionDto;
use crate::interfaces::http::router::AppState;

use super::dto::*;

#[utoipa::path(
    post,
    path = "/api/v1/admins",
    tag = "Admins",
    request_body = CreateAdminRequest,
    responses(
        (status = 200, description = "Admin created with default permissions", body = ApiResponse<AdminDto>)
    )
)]
pub async fn create_admin(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateAdminRequest>,
) -> ApiResult<AdminDto> {
    let admin = state
        .admins
        .create(
            PersonName::new(&req.first_name, &req.last_name)?,
            Email::new(&req.email)?,
            Phone::new(&req.phone)?,
            req.date_of_birth,
            req.is_root,
        )
        .await?;
    Ok(ok(admin.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/admins",
    tag = "Admins",
    responses(
        (status = 200, description = "All admins", body = ApiResponse<Vec<AdminDto>>)
    )
)]
pub async fn list_admins(State(state): State<AppState>) -> ApiResult<Vec<AdminDto>> {
    let admins = state.admins.list().await?;
    Ok(ok(admins.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/admins/{id}",
    tag = "Admins",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin details", body = ApiResponse<AdminDto>),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn get_admin(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<AdminDto> {
    Ok(ok(state.admins.get(id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/admins/{id}/promote",
    tag = "Admins",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin promoted to root", body = ApiResponse<AdminDto>),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn promote_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<AdminDto> {
    Ok(ok(state.admins.promote_to_root(id).await?.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/admins/{id}/permissions",
    tag = "Admins",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Permissions granted to the admin", body = ApiResponse<Vec<PermissionDto>>),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn list_admin_permissions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Vec<PermissionDto>> {
    let permissions = state.admins.permissions(id).await?;
    Ok(ok(permissions.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/admins/{id}/permissions/{permission_id}",
    tag = "Admins",
    params(
        ("id" = Uuid, Path, description = "Admin ID"),
        ("permission_id" = Uuid, Path, description = "Permission ID")
    ),
    responses(
        (status = 200, description = "Permission attached", body = ApiResponse<EmptyData>),
        (status = 404, description = "Admin or permission not found")
    )
)]
pub async fn attach_admin_permission(
    State(state): State<AppState>,
    Path((id, permission_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<EmptyData> {
    state.admins.attach_permission(id, permission_id).await?;
    Ok(ok(EmptyData {}))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admins/{id}/permissions/{permission_id}",
    tag = "Admins",
    params(
        ("id" = Uuid, Path, description = "Admin ID"),
        ("permission_id" = Uuid, Path, description = "Permission ID")
    ),
    responses(
        (status = 200, description = "Permission detached", body = ApiResponse<EmptyData>),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn detach_admin_permission(
    State(state): State<AppState>,
    Path((id, permission_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<EmptyData> {
    state.admins.detach_permission(id, permission_id).await?;
    Ok(ok(EmptyData {}))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admins/{id}",
    tag = "Admins",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn delete_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state.admins.delete(id).await?;
    Ok(ok(EmptyData {}))
}
