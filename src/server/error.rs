//! HTTP error type and the mapping from lock errors to status codes.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::error::LockerError;

const AUTH_REALM: &str = "Basic realm=\"Authorization Required\"";

/// Error returned by the HTTP handlers.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request is missing required input.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or wrong basic-auth credentials.
    #[error("Please Authenticate")]
    Unauthorized,

    /// The pool is held under a different key.
    #[error("Locked: {0}")]
    Locked(String),

    /// Store, consistency, or worker failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized => (StatusCode::UNAUTHORIZED, "Please Authenticate".to_string()),
            HttpError::Locked(msg) => (StatusCode::LOCKED, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let mut response = (status, Json(ErrorBody { error: message })).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(AUTH_REALM),
            );
        }
        response
    }
}

impl From<LockerError> for HttpError {
    fn from(err: LockerError) -> Self {
        match err {
            LockerError::LockHeldByOther(msg) => HttpError::Locked(msg),
            LockerError::Validation(msg) => HttpError::BadRequest(msg),
            other => HttpError::Internal(other.to_string()),
        }
    }
}
