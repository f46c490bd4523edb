// HTTP error mapping.
//
// Keeps the three failure families distinct all the way to the wire:
// remote-call failures get classified text, malformed input a generic
// 400, not-found a fixed message. Raw errors are logged, never sent.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use clubwifi_core::{CoreError, classify};

/// Errors a handler can surface.
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote collaborator failure. Carries the raw failure text; the
    /// response body is the classified reason derived from it.
    #[error("{0}")]
    Remote(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Remote { message } => Self::Remote(message),
            not_found @ (CoreError::AccountNotFound { .. } | CoreError::MemberNotFound { .. }) => {
                Self::NotFound(not_found.to_string())
            }
            malformed @ CoreError::MalformedField { .. } => Self::BadRequest(malformed.to_string()),
        }
    }
}

impl From<clubwifi_api::Error> for AppError {
    fn from(err: clubwifi_api::Error) -> Self {
        CoreError::from(err).into()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Remote(raw) => {
                let reason = classify(&raw);
                error!(%raw, %reason, "remote call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, reason).into_response()
            }
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        }
    }
}
