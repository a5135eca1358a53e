use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum NotefulError {
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Folder does not exist")]
    FolderNotFound,

    #[error("Note does not exist")]
    NoteNotFound,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] Box<figment::Error>),
}

impl From<figment::Error> for NotefulError {
    fn from(e: figment::Error) -> Self {
        NotefulError::ConfigError(Box::new(e))
    }
}

impl NotefulError {
    pub fn status(&self) -> StatusCode {
        match self {
            NotefulError::MissingField(_) | NotefulError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            NotefulError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            NotefulError::FolderNotFound | NotefulError::NoteNotFound => StatusCode::NOT_FOUND,
            NotefulError::DatabaseError(_) | NotefulError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for NotefulError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // Details stay in the log; clients only see an opaque message.
            error!(error = %self, "request failed");
            "server error".to_string()
        } else {
            self.to_string()
        };
        (
            status,
            Json(ApiErrorResponse {
                error: ApiErrorBody { message },
            }),
        )
            .into_response()
    }
}

/// Standardized API error response body
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
