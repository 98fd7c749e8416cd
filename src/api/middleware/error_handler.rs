//! Error handling for the API layer.
//!
//! Handlers return `Result<_, ApiError>`; domain, store, body and query
//! string failures convert into it with `?`. Every error renders as
//! `{"error": "<message>"}`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::api::dto::ErrorResponse;
use crate::domain::SubscriptionError;
use crate::infrastructure::StoreError;

/// Failure of an API request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Input failed validation (400).
    #[error("{0}")]
    Validation(String),

    /// The requested record does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// The store failed (500).
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SubscriptionError> for ApiError {
    fn from(source: SubscriptionError) -> Self {
        warn!(error = %source, "Rejected invalid input");
        Self::Validation(source.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(source: StoreError) -> Self {
        error!(error = %source, "Storage operation failed");
        Self::Storage(source.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected request body");
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected query string");
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
