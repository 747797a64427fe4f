//! Application error type and its HTTP representation.
//!
//! Every failure leaves the service as the `err` variant of the response
//! envelope:
//!
//! ```json
//! { "status": "err", "data": { "message": "`url` is not a valid URL" } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::envelope::Envelope;
use crate::domain::repositories::RepositoryError;

/// Errors returned by services and HTTP handlers.
///
/// The message is what the client sees; storage details that should stay
/// server-side are logged when the error is created from a [`RepositoryError`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    Unavailable(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(Envelope::err(self.to_string()))).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Empty => AppError::bad_request(e.to_string()),
            RepositoryError::NotFound => AppError::not_found(e.to_string()),
            // Both are retried by the link service and never reach a client
            RepositoryError::AlreadyExists | RepositoryError::CodeTaken => {
                tracing::error!(error = %e, "unresolved insert conflict");
                AppError::internal("Shortened URL could not be created")
            }
            RepositoryError::Corrupt { .. } | RepositoryError::Read { .. } => {
                tracing::error!(error = %e, "manifest could not be loaded");
                AppError::internal("Shortened URL manifest could not be read")
            }
            RepositoryError::Persist { .. } => {
                tracing::error!(error = %e, "manifest could not be saved");
                AppError::internal("Shortened URL could not be created")
            }
        }
    }
}
