//! Error-to-response mapping for the task HTTP API.

use crate::task::{dto::ErrorBody, error::ValidationErrors, services::TaskServiceError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Message returned for failures the caller cannot act on.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Errors surfaced by task HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The request could not be decoded (malformed JSON, bad path id).
    #[error("{0}")]
    MalformedRequest(String),

    /// The service rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::Service(TaskServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(TaskServiceError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Validation(errors) => {
                debug!(violations = errors.len(), "rejected invalid task payload");
                errors.message().to_owned()
            }
            Self::MalformedRequest(reason) => {
                debug!(%reason, "rejected malformed request");
                reason.clone()
            }
            Self::Service(TaskServiceError::NotFound(task_id)) => {
                warn!(%task_id, "task not found");
                self.to_string()
            }
            Self::Service(TaskServiceError::Repository(err)) => {
                error!(error = %err, "task repository failure");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
