use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a002_order::lifecycle::LifecycleError;
use contracts::shared::api_error::{ApiError, ApiErrorKind};
use sea_orm::DbErr;
use thiserror::Error;

/// Ошибки сервисного слоя
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Rule violation reported to the caller as-is
    #[error(transparent)]
    Business(#[from] ApiError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    /// A stored row that no longer matches the contract
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl From<LifecycleError> for ServiceError {
    fn from(e: LifecycleError) -> Self {
        ServiceError::Business(e.into())
    }
}

impl ServiceError {
    /// Wire body for this error. Internal details are not exposed.
    pub fn to_api_error(&self) -> ApiError {
        match self {
            ServiceError::Business(e) => e.clone(),
            ServiceError::Database(_) | ServiceError::Corrupt(_) => {
                ApiError::new(ApiErrorKind::InternalError, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            ServiceError::Business(e) => tracing::warn!("{}", e),
            ServiceError::Database(_) | ServiceError::Corrupt(_) => tracing::error!("{}", self),
        }
        let body = self.to_api_error();
        let status = StatusCode::from_u16(body.error.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
