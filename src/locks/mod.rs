//! Lock state for the locker server.
//!
//! # Model
//!
//! The whole lock state is one snapshot: a map from pool name to a [`Lock`]
//! record. A record holds the key (credential) currently owning the pool and
//! a hold count per requestor. Records are created on first use and are never
//! removed; releasing resets them to an empty key.
//!
//! # Persistence
//!
//! The snapshot is stored as a single JSON document:
//!
//! ```json
//! {
//!     "pool1": {
//!         "key": "K",
//!         "locked_by": { "alice": 0, "bob": 1 }
//!     }
//! }
//! ```
//!
//! It is read in full at the start of every operation and rewritten in full
//! after every mutation. [`algebra`] holds the pure per-record logic; the
//! [`LockStore`] trait is the only way in or out of storage.

pub mod algebra;
mod store;
mod types;


// Re-export public API
pub use algebra::{acquire, get_lock, held_count, release, set_lock};
pub use store::{FileLockStore, LockStore};
pub use types::{Lock, LockInput, LockerState};
