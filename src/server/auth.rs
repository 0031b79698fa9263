//! HTTP basic-auth middleware.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::error::HttpError;
use crate::config::BasicAuth;

/// Reject requests whose `Authorization` header does not carry `expected`.
///
/// Responds 401 with a `WWW-Authenticate: Basic` challenge on failure.
pub(crate) async fn require_basic_auth(
    State(expected): State<Arc<BasicAuth>>,
    req: Request,
    next: Next,
) -> Response {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if credentials_match(header, &expected) {
        return next.run(req).await;
    }

    tracing::warn!(
        path = %req.uri().path(),
        "Unauthorized request - missing or invalid basic auth credentials"
    );
    HttpError::Unauthorized.into_response()
}

/// Whether an `Authorization` header value holds exactly `expected`.
pub(crate) fn credentials_match(header: Option<&str>, expected: &BasicAuth) -> bool {
    let Some((scheme, encoded)) = header.and_then(|h| h.split_once(' ')) else {
        return false;
    };
    if !scheme.eq_ignore_ascii_case("basic") {
        return false;
    }

    let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
        return false;
    };
    let Ok(decoded) = String::from_utf8(decoded) else {
        return false;
    };

    match decoded.split_once(':') {
        Some((user, password)) => user == expected.user && password == expected.password,
        None => false,
    }
}
