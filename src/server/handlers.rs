//! Route handlers. Each one translates an HTTP request into a single worker
//! call and the worker's reply back into JSON.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use serde::Serialize;

use super::error::HttpError;
use crate::error::LockerError;
use crate::locks::{LockInput, LockerState};
use crate::worker::{Confirmation, LockStatus, WorkerHandle};

/// Success body for lock and unlock requests.
#[derive(Debug, Serialize)]
pub(crate) struct MessageBody {
    pub response: String,
}

/// `GET /locks`
pub(crate) async fn list_locks(
    State(worker): State<WorkerHandle>,
) -> Result<Json<LockerState>, HttpError> {
    Ok(Json(worker.list().await?))
}

/// `PUT /lock/{pool}`
pub(crate) async fn lock_pool(
    State(worker): State<WorkerHandle>,
    Path(pool): Path<String>,
    body: Bytes,
) -> Result<Json<MessageBody>, HttpError> {
    let input = parse_input(&body, "No key specified in request body")?;
    let confirmation = worker.acquire(&pool, input).await?;
    respond(confirmation, LockStatus::Locked, "lock")
}

/// `DELETE /lock/{pool}`
pub(crate) async fn unlock_pool(
    State(worker): State<WorkerHandle>,
    Path(pool): Path<String>,
    body: Bytes,
) -> Result<Json<MessageBody>, HttpError> {
    let input = parse_input(&body, "No lock specified in request body")?;
    let confirmation = worker.release(&pool, input).await?;
    respond(confirmation, LockStatus::Unlocked, "unlock")
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

/// Decode a lock request body. A missing or unparseable body counts as empty,
/// so it fails the key check like any other keyless request.
fn parse_input(body: &[u8], missing_key: &str) -> Result<LockInput, LockerError> {
    let mut input: LockInput = serde_json::from_slice(body).unwrap_or_default();
    if input.key.is_empty() {
        return Err(LockerError::Validation(missing_key.to_string()));
    }
    if input.requestor.is_empty() {
        input.requestor = input.key.clone();
    }
    Ok(input)
}

fn respond(
    confirmation: Confirmation,
    expected: LockStatus,
    request: &str,
) -> Result<Json<MessageBody>, HttpError> {
    if confirmation.status != expected {
        tracing::error!(?confirmation, "Unexpected response to a {} request", request);
        return Err(HttpError::Internal(format!(
            "Unknown response from {} request",
            request
        )));
    }
    Ok(Json(MessageBody {
        response: confirmation.message,
    }))
}
