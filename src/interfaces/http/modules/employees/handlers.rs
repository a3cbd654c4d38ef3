//! Employee HTTP handlers

use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::value_objects::{Email, PersonName, Phone};
use crate::interfaces::http::common::{ok, ApiResponse, ApiResult, EmptyData, ValidatedJson};
use crate::interfaces::http::modules::permissions::PermissionDto;
use crate::interfaces::http::router::AppState;

use super::dto::*;

#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "Employee created with default permissions", body = ApiResponse<EmployeeDto>)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateEmployeeRequest>,
) -> ApiResult<EmployeeDto> {
    let employee = state
        .employees
        .create(
            PersonName::new(&req.first_name, &req.last_name)?,
            Email::new(&req.email)?,
            Phone::new(&req.phone)?,
            req.date_of_birth,
            req.salary_cents,
        )
        .await?;
    Ok(ok(employee.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees", body = ApiResponse<Vec<EmployeeDto>>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<EmployeeDto>> {
    let employees = state.employees.list().await?;
    Ok(ok(employees.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = ApiResponse<EmployeeDto>),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmployeeDto> {
    Ok(ok(state.employees.get(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/employees/{id}/salary",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = UpdateSalaryRequest,
    responses(
        (status = 200, description = "Salary updated", body = ApiResponse<EmployeeDto>),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee_salary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateSalaryRequest>,
) -> ApiResult<EmployeeDto> {
    Ok(ok(state
        .employees
        .update_salary(id, req.salary_cents)
        .await?
        .into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}/permissions",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Permissions granted to the employee", body = ApiResponse<Vec<PermissionDto>>),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn list_employee_permissions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Vec<PermissionDto>> {
    let permissions = state.employees.permissions(id).await?;
    Ok(ok(permissions.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/employees/{id}/permissions/{permission_id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID"),
        ("permission_id" = Uuid, Path, description = "Permission ID")
    ),
    responses(
        (status = 200, description = "Permission attached", body = ApiResponse<EmptyData>),
        (status = 404, description = "Employee or permission not found")
    )
)]
pub async fn attach_employee_permission(
    State(state): State<AppState>,
    Path((id, permission_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<EmptyData> {
    state.employees.attach_permission(id, permission_id).await?;
    Ok(ok(EmptyData {}))
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}/permissions/{permission_id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID"),
        ("permission_id" = Uuid, Path, description = "Permission ID")
    ),
    responses(
        (status = 200, description = "Permission detached", body = ApiResponse<EmptyData>),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn detach_employee_permission(
    State(state): State<AppState>,
    Path((id, permission_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<EmptyData> {
    state.employees.detach_permission(id, permission_id).await?;
    Ok(ok(EmptyData {}))
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmptyData> {
    state.employees.delete(id).await?;
    Ok(ok(EmptyData {}))
}
