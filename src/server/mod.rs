//! HTTP front end for the lock worker.
//!
//! | Method   | Path           | Body                   |
//! |----------|----------------|------------------------|
//! | `GET`    | `/locks`       |                        |
//! | `PUT`    | `/lock/{pool}` | `{"key", "requestor"}` |
//! | `DELETE` | `/lock/{pool}` | `{"key", "requestor"}` |
//! | `GET`    | `/health`      |                        |
//!
//! Lock conflicts answer `423 Locked`, a missing key `400`, and store or
//! worker failures `500`, each with an `{"error": ...}` body.

mod auth;
mod error;
mod handlers;
mod routes;


use std::time::Duration;

use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;

use crate::config::Config;
use crate::error::{LockerError, Result};
use crate::worker::WorkerHandle;

pub use routes::create_router;

/// Serve the lock routes until the listener fails or Ctrl-C is received.
///
/// Serves HTTPS when `config.tls` is set, plain HTTP otherwise.
pub async fn serve(config: &Config, worker: WorkerHandle) -> Result<()> {
    let app = create_router(worker, config.auth.clone());
    let addr = config.listen_addr();

    let handle = Handle::new();
    let shutdown = handle.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.graceful_shutdown(Some(Duration::from_secs(10)));
        }
    });

    let served = match &config.tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.cert, &tls.key)
                .await
                .map_err(|e| {
                    LockerError::Config(format!(
                        "Unable to load TLS certificate '{}' / key '{}': {}",
                        tls.cert.display(),
                        tls.key.display(),
                        e
                    ))
                })?;
            tracing::info!(%addr, auth_enabled = config.auth.is_some(), "Starting HTTPS server");
            axum_server::bind_rustls(addr, rustls)
                .handle(handle)
                .serve(app.into_make_service())
                .await
        }
        None => {
            tracing::info!(%addr, auth_enabled = config.auth.is_some(), "Starting HTTP server");
            axum_server::bind(addr)
                .handle(handle)
                .serve(app.into_make_service())
                .await
        }
    };

    served.map_err(|e| {
        tracing::error!(error = %e, "Server error");
        LockerError::Server(e.to_string())
    })?;

    tracing::info!("Server stopped");
    Ok(())
}
