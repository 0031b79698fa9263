//! Lock record and snapshot definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full lock snapshot: pool name to its lock record.
///
/// Pools that have never been addressed are absent rather than present with
/// an empty record.
pub type LockerState = BTreeMap<String, Lock>;

/// The lock record for a single pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lock {
    /// Credential currently holding the pool. Empty means unlocked.
    #[serde(default)]
    pub key: String,

    /// Hold count per requestor. Zero entries are kept as history.
    #[serde(default)]
    pub locked_by: BTreeMap<String, u64>,
}

impl Lock {
    /// Whether no credential currently holds the pool.
    pub fn is_unlocked(&self) -> bool {
        self.key.is_empty()
    }
}

/// Credential and optional requestor supplied with a lock or unlock request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockInput {
    #[serde(default)]
    pub key: String,

    /// Individual holder under `key`. Empty falls back to the key itself.
    #[serde(default)]
    pub requestor: String,
}

impl LockInput {
    pub fn new(key: impl Into<String>, requestor: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            requestor: requestor.into(),
        }
    }

    /// The requestor, defaulted to the key when none was given.
    pub fn requestor(&self) -> &str {
        if self.requestor.is_empty() {
            &self.key
        } else {
            &self.requestor
        }
    }
}
