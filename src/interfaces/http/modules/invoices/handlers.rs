//! Invoice HTTP handlers

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::invoice::PaymentMethod;
use crate::domain::DomainError;
use crate::interfaces::http::common::{ok, ApiResponse, ApiResult, EmptyData, ValidatedJson};
use crate::interfaces::http::router::AppState;

use super::dto::*;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct InvoiceFilter {
    /// Restrict to one reservation's invoices
    pub reservation_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/v1/invoices",
    tag = "Invoices",
    request_body = CreateInvoiceRequest,
    responses(
        (status = 200, description = "Guest checked out, invoice issued, intent captured", body = ApiResponse<InvoiceDto>),
        (status = 400, description = "Reservation not checked in or invalid payment method"),
        (status = 404, description = "Reservation not found"),
        (status = 422, description = "Billing provider rejected the capture"),
        (status = 503, description = "Billing provider unreachable")
    )
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateInvoiceRequest>,
) -> ApiResult<InvoiceDto> {
    let payment_method = PaymentMethod::from_str(&req.payment_method).ok_or_else(|| {
        DomainError::Validation(format!("unknown payment method '{}'", req.payment_method))
    })?;
    let invoice = state
        .invoices
        .create(req.reservation_id, payment_method, req.tax_cents)
        .await?;
    Ok(ok(invoice.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/invoices",
    tag = "Invoices",
    params(InvoiceFilter),
    responses(
        (status = 200, description = "Invoices, newest first", body = ApiResponse<Vec<InvoiceDto>>)
    )
)]
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(filter): Query<InvoiceFilter>,
) -> ApiResult<Vec<InvoiceDto>> {
    let invoices = match filter.reservation_id {
        Some(reservation_id) => state.invoices.list_for_reservation(reservation_id).await?,
        None => state.invoices.list().await?,
    };
    Ok(ok(invoices.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/invoices/{id}",
    tag = "Invoices",
    params(("id" = Uuid, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice details", body = ApiResponse<InvoiceDto>),
        (status = 404, description = "Invoice not found")
    )
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<InvoiceDto> {
    Ok(ok(state.invoices.get(id).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/invoices/{id}",
    tag = "Invoices",
    params(("id" = Uuid, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice deleted (local only)", body = ApiResponse<EmptyData>),
        (status = 404, description = "Invoice not found")
    )
)]
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state.invoices.delete(id).await?;
    Ok(ok(EmptyData {}))
}
