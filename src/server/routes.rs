//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{get, put};
use tower_http::trace::TraceLayer;

use super::{auth, handlers};
use crate::config::BasicAuth;
use crate::worker::WorkerHandle;

/// Build the lock routes.
///
/// When `auth` is set every lock route requires those basic-auth credentials.
/// `/health` is always open.
///
/// Axum 0.8 uses brace syntax for path parameters: `{pool}`
pub fn create_router(worker: WorkerHandle, auth: Option<BasicAuth>) -> Router {
    let mut locks = Router::new()
        .route("/locks", get(handlers::list_locks))
        .route(
            "/lock/{pool}",
            put(handlers::lock_pool).delete(handlers::unlock_pool),
        )
        .with_state(worker);

    if let Some(auth) = auth {
        locks = locks.route_layer(middleware::from_fn_with_state(
            Arc::new(auth),
            auth::require_basic_auth,
        ));
    }

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(locks)
        .layer(TraceLayer::new_for_http())
}
