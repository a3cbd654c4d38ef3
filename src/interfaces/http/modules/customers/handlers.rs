//! Customer HTTP handlers

use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::value_objects::{Address, Email, PersonName, Phone};
use crate::interfaces::http::common::{ok, ApiResponse, ApiResult, EmptyData, ValidatedJson};
use crate::interfaces::http::router::AppState;

use super::dto::*;

#[utoipa::path(
    post,
    path = "/api/v1/customers",
    tag = "Customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Customer created", body = ApiResponse<CustomerDto>),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Billing provider rejected the profile"),
        (status = 503, description = "Billing provider unreachable")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCustomerRequest>,
) -> ApiResult<CustomerDto> {
    let customer = state
        .customers
        .create(
            PersonName::new(&req.first_name, &req.last_name)?,
            Email::new(&req.email)?,
            Phone::new(&req.phone)?,
            Address::new(&req.country, &req.city, &req.street, req.number)?,
            req.date_of_birth,
        )
        .await?;
    Ok(ok(customer.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "All customers", body = ApiResponse<Vec<CustomerDto>>)
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> ApiResult<Vec<CustomerDto>> {
    let customers = state.customers.list().await?;
    Ok(ok(customers.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = ApiResponse<CustomerDto>),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<CustomerDto> {
    Ok(ok(state.customers.get(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}/name",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdateNameRequest,
    responses(
        (status = 200, description = "Name updated and profile synced", body = ApiResponse<CustomerDto>),
        (status = 404, description = "Customer not found"),
        (status = 422, description = "Billing provider rejected the profile"),
        (status = 503, description = "Billing provider unreachable")
    )
)]
pub async fn update_name(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateNameRequest>,
) -> ApiResult<CustomerDto> {
    let name = PersonName::new(&req.first_name, &req.last_name)?;
    Ok(ok(state.customers.update_name(id, name).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}/email",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdateEmailRequest,
    responses(
        (status = 200, description = "Email updated and profile synced", body = ApiResponse<CustomerDto>),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateEmailRequest>,
) -> ApiResult<CustomerDto> {
    let email = Email::new(&req.email)?;
    Ok(ok(state.customers.update_email(id, email).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}/phone",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdatePhoneRequest,
    responses(
        (status = 200, description = "Phone updated and profile synced", body = ApiResponse<CustomerDto>),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_phone(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdatePhoneRequest>,
) -> ApiResult<CustomerDto> {
    let phone = Phone::new(&req.phone)?;
    Ok(ok(state.customers.update_phone(id, phone).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}/address",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdateAddressRequest,
    responses(
        (status = 200, description = "Address updated and profile synced", body = ApiResponse<CustomerDto>),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateAddressRequest>,
) -> ApiResult<CustomerDto> {
    let address = Address::new(&req.country, &req.city, &req.street, req.number)?;
    Ok(ok(state.customers.update_address(id, address).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}/date-of-birth",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdateDateOfBirthRequest,
    responses(
        (status = 200, description = "Date of birth updated (local only)", body = ApiResponse<CustomerDto>),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_date_of_birth(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateDateOfBirthRequest>,
) -> ApiResult<CustomerDto> {
    Ok(ok(state
        .customers
        .update_date_of_birth(id, req.date_of_birth)
        .await?
        .into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer and remote profile deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Customer not found"),
        (status = 503, description = "Billing provider unreachable")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state.customers.delete(id).await?;
    Ok(ok(EmptyData {}))
}
