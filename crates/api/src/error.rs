//! Error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use compta_core::{fiscal::QuarterError, service::ServiceError};
use compta_shared::AppError;
use serde_json::json;
use tracing::error;

/// Handler error, rendered as `{ "error": <code>, "message": <text> }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err.into())
    }
}

impl From<QuarterError> for ApiError {
    fn from(err: QuarterError) -> Self {
        Self(err.into())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match &err {
            AppError::Internal(_) => {
                error!(error = %err, "Internal error");
                "An error occurred".to_string()
            }
            AppError::ExternalService(_) => {
                error!(error = %err, "Record source error");
                "The record store could not be reached".to_string()
            }
            other => other.to_string(),
        };

        (
            status,
            Json(json!({ "error": err.error_code(), "message": message })),
        )
            .into_response()
    }
}
