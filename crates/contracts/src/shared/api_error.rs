//! Error body returned by the order service: `{"error": CODE, "message": text}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::a002_order::lifecycle::LifecycleError;

/// Machine-readable error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorKind {
    ProductNotFound,
    InsufficientStock,
    OrderNotFound,
    InvalidStatus,
    ValidationError,
    InternalError,
    /// Any code this build does not know about
    #[serde(other)]
    Unknown,
}

impl ApiErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorKind::ProductNotFound => "PRODUCT_NOT_FOUND",
            ApiErrorKind::InsufficientStock => "INSUFFICIENT_STOCK",
            ApiErrorKind::OrderNotFound => "ORDER_NOT_FOUND",
            ApiErrorKind::InvalidStatus => "INVALID_STATUS",
            ApiErrorKind::ValidationError => "VALIDATION_ERROR",
            ApiErrorKind::InternalError => "INTERNAL_ERROR",
            ApiErrorKind::Unknown => "UNKNOWN",
        }
    }

    /// HTTP status the service answers with
    pub fn http_status(&self) -> u16 {
        match self {
            ApiErrorKind::ProductNotFound | ApiErrorKind::OrderNotFound => 404,
            ApiErrorKind::InvalidStatus => 409,
            ApiErrorKind::InsufficientStock | ApiErrorKind::ValidationError => 400,
            ApiErrorKind::InternalError | ApiErrorKind::Unknown => 500,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business error as carried over the wire.
///
/// Displays as `"{error}: {message}"`, which is exactly what the desk shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}: {message}")]
pub struct ApiError {
    pub error: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(error: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::ValidationError, message)
    }

    pub fn order_not_found() -> Self {
        Self::new(ApiErrorKind::OrderNotFound, "Order not found")
    }
}

impl From<LifecycleError> for ApiError {
    fn from(e: LifecycleError) -> Self {
        Self::new(ApiErrorKind::InvalidStatus, e.to_string())
    }
}
