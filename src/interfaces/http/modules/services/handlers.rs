//! Hotel service HTTP handlers

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::service::ServicePriority;
use crate::domain::{DomainError, DomainResult};
use crate::interfaces::http::common::{ok, ApiResponse, ApiResult, EmptyData, ValidatedJson};
use crate::interfaces::http::router::AppState;

use super::dto::*;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ServiceFilter {
    /// Only services currently offered to guests
    #[serde(default)]
    pub active: bool,
}

fn parse_priority(s: &str) -> DomainResult<ServicePriority> {
    match s {
        "Low" => Ok(ServicePriority::Low),
        "Medium" => Ok(ServicePriority::Medium),
        "High" => Ok(ServicePriority::High),
        other => Err(DomainError::Validation(format!(
            "unknown priority '{}'",
            other
        ))),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/services",
    tag = "Services",
    request_body = CreateServiceRequest,
    responses(
        (status = 200, description = "Service created", body = ApiResponse<ServiceDto>),
        (status = 409, description = "Service name already exists")
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateServiceRequest>,
) -> ApiResult<ServiceDto> {
    let priority = parse_priority(&req.priority)?;
    let service = state
        .services
        .create(req.name, req.price_cents, priority, req.duration_minutes)
        .await?;
    Ok(ok(service.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/services",
    tag = "Services",
    params(ServiceFilter),
    responses(
        (status = 200, description = "Service catalog", body = ApiResponse<Vec<ServiceDto>>)
    )
)]
pub async fn list_services(
    State(state): State<AppState>,
    Query(filter): Query<ServiceFilter>,
) -> ApiResult<Vec<ServiceDto>> {
    let services = if filter.active {
        state.services.list_active().await?
    } else {
        state.services.list().await?
    };
    Ok(ok(services.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/services/{id}",
    tag = "Services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service details", body = ApiResponse<ServiceDto>),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<ServiceDto> {
    Ok(ok(state.services.get(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/services/{id}/price",
    tag = "Services",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = UpdateServicePriceRequest,
    responses(
        (status = 200, description = "Service repriced", body = ApiResponse<ServiceDto>),
        (status = 404, description = "Service not found")
    )
)]
pub async fn update_service_price(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateServicePriceRequest>,
) -> ApiResult<ServiceDto> {
    Ok(ok(state
        .services
        .update_price(id, req.price_cents)
        .await?
        .into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/services/{id}/priority",
    tag = "Services",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = UpdateServicePriorityRequest,
    responses(
        (status = 200, description = "Priority updated", body = ApiResponse<ServiceDto>),
        (status = 404, description = "Service not found")
    )
)]
pub async fn update_service_priority(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateServicePriorityRequest>,
) -> ApiResult<ServiceDto> {
    let priority = parse_priority(&req.priority)?;
    Ok(ok(state
        .services
        .update_priority(id, priority)
        .await?
        .into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/services/{id}/active",
    tag = "Services",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = SetServiceActiveRequest,
    responses(
        (status = 200, description = "Availability toggled", body = ApiResponse<ServiceDto>),
        (status = 404, description = "Service not found")
    )
)]
pub async fn set_service_active(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<SetServiceActiveRequest>,
) -> ApiResult<ServiceDto> {
    Ok(ok(state
        .services
        .set_active(id, req.is_active)
        .await?
        .into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/services/{id}",
    tag = "Services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Service not found")
    )
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state.services.delete(id).await?;
    Ok(ok(EmptyData {}))
}
