//! Serialization worker for lock operations.
//!
//! A single [`LockWorker`] thread owns the [`LockStore`](crate::locks::LockStore)
//! and is the only code that reads or writes it. Callers talk to it through a
//! [`WorkerHandle`]: each call queues a request carrying a
//! one-shot reply channel, and the worker serves the queue strictly in order,
//! one full load/mutate/save cycle at a time. Two acquires on the same pool can
//! therefore never interleave; the second waits until the first is on disk.

mod command;
mod handle;


// Re-export public API
pub use command::{Confirmation, LockOperation, LockStatus};
pub use handle::{LockWorker, WorkerHandle};
