//! Shared HTTP plumbing: response envelope, error mapping, extractors

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response wrapper.
///
/// Every REST endpoint wraps its payload in this envelope.
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request was handled successfully
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// Domain error carried out of a handler; maps onto the HTTP status
/// space when converted into a response.
pub struct ApiError(pub DomainError);

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            // Provider said no: the request was well-formed but the
            // remote side refused it.
            DomainError::RemoteRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::RemoteUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ApiResponse::<EmptyData>::error(self.0.to_string());
        (status, Json(body)).into_response()
    }
}

/// Wrap a payload in the success envelope.
pub fn ok<T>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_statuses_follow_the_domain_taxonomy() {
        let cases = [
            (DomainError::not_found("Customer", "x"), StatusCode::NOT_FOUND),
            (
                DomainError::Validation("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Conflict("dup".into()),
                StatusCode::CONFLICT,
            ),
            (
                DomainError::RemoteRejected("declined".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DomainError::RemoteUnreachable("timeout".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                DomainError::Persistence("db".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).into_response().status(), expected);
        }
    }
}
