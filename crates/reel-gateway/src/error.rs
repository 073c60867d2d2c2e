use crate::model::{ErrorResponse, MessageResponse};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reel_core::{CatalogError, ValidationError};
use std::any::Any;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

pub const CORS_REJECTED_MESSAGE: &str = "Not allowed by CORS";
pub const NOT_FOUND_MESSAGE: &str = "Movie not found";

#[derive(Debug, Error)]
pub enum AppError {
    /// A create payload failed validation. Answered with the aggregate message.
    #[error("invalid movie: {0}")]
    Validation(ValidationError),
    /// A partial update failed validation. Answered with the structured issues.
    #[error("invalid movie update: {0}")]
    InvalidPatch(ValidationError),
    #[error("movie not found")]
    NotFound,
    /// The request could not be decoded at all.
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("origin not allowed")]
    CorsRejected,
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Maps a catalog error raised by a partial update.
    pub fn from_patch(error: CatalogError) -> Self {
        match error {
            CatalogError::Validation(issues) => Self::InvalidPatch(issues),
            other => other.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidPatch(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::CorsRejected => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Validation(issues) => Self::Validation(issues),
            CatalogError::NotFound(_) => Self::NotFound,
            CatalogError::Storage(source) => Self::Internal(source.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AppError::Validation(issues) => (
                status,
                Json(ErrorResponse {
                    error: issues.to_string(),
                }),
            )
                .into_response(),
            AppError::InvalidPatch(issues) => {
                (status, Json(ErrorResponse { error: issues })).into_response()
            }
            AppError::NotFound => {
                (status, Json(MessageResponse::new(NOT_FOUND_MESSAGE))).into_response()
            }
            AppError::BadRequest(message) => {
                (status, Json(ErrorResponse { error: message })).into_response()
            }
            AppError::CorsRejected => (
                status,
                Json(ErrorResponse {
                    error: CORS_REJECTED_MESSAGE,
                }),
            )
                .into_response(),
            AppError::Internal(detail) => {
                error!(%detail, "request failed");
                (
                    status,
                    Json(ErrorResponse {
                        error: "Internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Turns a handler panic into a 500 answer so the server keeps running.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}
