//! Request and reply messages exchanged with the lock worker.

use crate::error::{LockerError, Result};
use crate::locks::{LockInput, LockerState};
use std::fmt;
use std::str::FromStr;
use tokio::sync::oneshot;

/// Operation tag of a lock request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOperation {
    /// Return the full lock snapshot.
    List,
    /// Take a hold on a pool.
    Lock,
    /// Drop a requestor's holds on a pool.
    Unlock,
}

impl LockOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockOperation::List => "ListLocks",
            LockOperation::Lock => "Lock",
            LockOperation::Unlock => "Unlock",
        }
    }
}

impl fmt::Display for LockOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the textual tags produced by `Display`.
///
/// Requests inside the process travel as typed `LockRequest` messages and never
/// pass through here. Only tags that arrive as text are parsed, and this is
/// the one place an unknown tag becomes `LockerError::InvalidCommand`.
impl FromStr for LockOperation {
    type Err = LockerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ListLocks" => Ok(LockOperation::List),
            "Lock" => Ok(LockOperation::Lock),
            "Unlock" => Ok(LockOperation::Unlock),
            other => Err(LockerError::InvalidCommand(other.to_string())),
        }
    }
}

/// Outcome of a successful lock or unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockStatus {
    Locked,
    Unlocked,
}

/// Reply to a successful lock or unlock request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub status: LockStatus,
    /// Human-readable description of what happened.
    pub message: String,
}

/// A request queued for the worker. Each carries its own reply channel.
pub(super) enum LockRequest {
    List {
        reply: oneshot::Sender<Result<LockerState>>,
    },
    Acquire {
        pool: String,
        input: LockInput,
        reply: oneshot::Sender<Result<Confirmation>>,
    },
    Release {
        pool: String,
        input: LockInput,
        reply: oneshot::Sender<Result<Confirmation>>,
    },
}

impl LockRequest {
    pub(super) fn operation(&self) -> LockOperation {
        match self {
            LockRequest::List { .. } => LockOperation::List,
            LockRequest::Acquire { .. } => LockOperation::Lock,
            LockRequest::Release { .. } => LockOperation::Unlock,
        }
    }
}
