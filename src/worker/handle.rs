//! The lock worker thread and its `Send + Sync` handle.

use std::thread;

use tokio::sync::{mpsc, oneshot};

use super::command::{Confirmation, LockOperation, LockRequest, LockStatus};
use crate::error::{LockerError, Result};
use crate::locks::{self, LockInput, LockStore, LockerState};

/// Requests that may wait in the queue before senders start to block.
const QUEUE_DEPTH: usize = 64;

/// Sole owner of the lock store.
///
/// Every operation is a full load, mutate, save cycle against the store. The
/// cycle is not atomic on its own; it is safe because a `LockWorker` runs on
/// one thread and handles one request at a time.
pub struct LockWorker<S: LockStore> {
    store: S,
}

impl<S: LockStore> LockWorker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Start the worker thread and return a handle to its queue.
    ///
    /// The store is loaded once up front so that an unreadable or malformed
    /// state document fails startup instead of the first request.
    pub fn spawn(self) -> Result<WorkerHandle> {
        let initial = self.store.load()?;
        tracing::info!(pools = initial.len(), "Loaded lock state");

        let (tx, rx) = mpsc::channel::<LockRequest>(QUEUE_DEPTH);

        thread::Builder::new()
            .name("locker-worker".into())
            .spawn(move || self.run(rx))
            .map_err(|e| LockerError::Server(format!("failed to spawn lock worker: {e}")))?;

        Ok(WorkerHandle { tx })
    }

    /// Current lock snapshot.
    pub fn list(&self) -> Result<LockerState> {
        self.store.load()
    }

    /// Take a hold on `pool`, persist it, then check the store agrees.
    pub fn acquire(&self, pool: &str, input: &LockInput) -> Result<Confirmation> {
        let requestor = input.requestor();
        let state = self.store.load()?;

        let lock = locks::acquire(locks::get_lock(&state, pool), pool, &input.key, requestor)?;
        self.store.save(&locks::set_lock(state, pool, lock))?;

        // The worker is the only writer, so this only trips if something
        // outside it rewrote the document.
        let stored = locks::get_lock(&self.store.load()?, pool);
        if stored.key != input.key {
            return Err(LockerError::Consistency(format!(
                "Locking failed. Should be locked by '{}', but found '{}'",
                input.key, stored.key
            )));
        }

        Ok(Confirmation {
            status: LockStatus::Locked,
            message: format!(
                "Lock for '{}' acquired by '{}' using key '{}'",
                pool, requestor, input.key
            ),
        })
    }

    /// Drop every hold the requestor has on `pool` and persist it.
    pub fn release(&self, pool: &str, input: &LockInput) -> Result<Confirmation> {
        let requestor = input.requestor();
        let state = self.store.load()?;

        let lock = locks::release(locks::get_lock(&state, pool), pool, &input.key, requestor)?;
        self.store.save(&locks::set_lock(state, pool, lock))?;

        Ok(Confirmation {
            status: LockStatus::Unlocked,
            message: format!("'{}' released a lock on '{}'", requestor, pool),
        })
    }

    /// Command loop: recv, execute, reply, recv. Exits once every handle
    /// has been dropped.
    fn run(self, mut rx: mpsc::Receiver<LockRequest>) {
        tracing::debug!("Lock worker started");

        while let Some(request) = rx.blocking_recv() {
            let operation = request.operation();
            match request {
                LockRequest::List { reply } => {
                    let result = self.list();
                    if let Err(e) = &result {
                        tracing::error!(%operation, error = %e, "Error listing locks");
                    }
                    let _ = reply.send(result);
                }

                LockRequest::Acquire { pool, input, reply } => {
                    let result = self.acquire(&pool, &input);
                    log_outcome(&result, operation, &pool, &input);
                    let _ = reply.send(result);
                }

                LockRequest::Release { pool, input, reply } => {
                    let result = self.release(&pool, &input);
                    log_outcome(&result, operation, &pool, &input);
                    let _ = reply.send(result);
                }
            }
        }

        tracing::debug!("Lock worker stopped");
    }
}

fn log_outcome(
    result: &Result<Confirmation>,
    operation: LockOperation,
    pool: &str,
    input: &LockInput,
) {
    match result {
        Ok(confirmation) => tracing::info!(
            %operation,
            pool,
            key = %input.key,
            requestor = input.requestor(),
            "{}",
            confirmation.message
        ),
        Err(e) if matches!(e, LockerError::LockHeldByOther(_)) => tracing::warn!(
            %operation,
            pool,
            key = %input.key,
            requestor = input.requestor(),
            error = %e,
            "Lock request refused"
        ),
        Err(e) => tracing::error!(
            %operation,
            pool,
            key = %input.key,
            error = %e,
            "Lock request failed"
        ),
    }
}

/// Cloneable handle to the lock worker queue.
///
/// Every call enqueues one request with its own reply channel and waits for
/// the worker to answer. Requests are served strictly in arrival order.
#[derive(Clone)]
pub struct WorkerHandle {
    tx: mpsc::Sender<LockRequest>,
}

impl WorkerHandle {
    /// Full lock snapshot.
    pub async fn list(&self) -> Result<LockerState> {
        self.send_and_recv(|reply| LockRequest::List { reply }).await
    }

    /// Acquire `pool` with `input.key` on behalf of `input.requestor()`.
    pub async fn acquire(&self, pool: &str, input: LockInput) -> Result<Confirmation> {
        self.send_and_recv(|reply| LockRequest::Acquire {
            pool: pool.to_string(),
            input,
            reply,
        })
        .await
    }

    /// Release every hold `input.requestor()` has on `pool`.
    pub async fn release(&self, pool: &str, input: LockInput) -> Result<Confirmation> {
        self.send_and_recv(|reply| LockRequest::Release {
            pool: pool.to_string(),
            input,
            reply,
        })
        .await
    }

    /// Enqueue a request built around a fresh reply channel and wait for the
    /// answer. A closed queue or dropped reply maps to
    /// [`LockerError::WorkerUnavailable`].
    async fn send_and_recv<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T>>) -> LockRequest,
    ) -> Result<T> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(build(tx))
            .await
            .map_err(|_| LockerError::WorkerUnavailable)?;
        rx.await.map_err(|_| LockerError::WorkerUnavailable)?
    }
}
