//! Pure lock record operations.
//!
//! Everything here works on a snapshot the caller has already loaded. Nothing
//! touches the store; persisting the result is the worker's job.

use super::types::{Lock, LockerState};
use crate::error::{LockerError, Result};

/// Get the record for `pool`, or a fresh unlocked record if it is absent.
pub fn get_lock(state: &LockerState, pool: &str) -> Lock {
    state.get(pool).cloned().unwrap_or_default()
}

/// Return `state` with `pool` mapped to `lock`.
pub fn set_lock(mut state: LockerState, pool: &str, lock: Lock) -> LockerState {
    state.insert(pool.to_string(), lock);
    state
}

/// Total number of outstanding holds on a record, saturating at `u64::MAX`.
pub fn held_count(lock: &Lock) -> u64 {
    lock.locked_by
        .values()
        .fold(0u64, |total, &count| total.saturating_add(count))
}

fn require_key(pool: &str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(LockerError::Validation(format!(
            "No key specified for lock on '{}'",
            pool
        )));
    }
    Ok(())
}

/// Take one hold on `lock` for `requestor` under `key`.
///
/// Reentrant: the same key may be acquired any number of times, by any number
/// of requestors. An empty `requestor` stands for `key`.
///
/// # Errors
///
/// * `LockerError::Validation` - `key` is empty
/// * `LockerError::LockHeldByOther` - the pool is held under a different key
/// * `LockerError::Consistency` - the requestor's hold count is already at its maximum
pub fn acquire(mut lock: Lock, pool: &str, key: &str, requestor: &str) -> Result<Lock> {
    require_key(pool, key)?;
    let requestor = if requestor.is_empty() { key } else { requestor };

    if !lock.is_unlocked() && lock.key != key {
        return Err(LockerError::LockHeldByOther(format!(
            "Attempt to steal lock for '{}' with '{}' by '{}' thwarted. Currently held by someone else",
            pool, key, requestor
        )));
    }

    let count = lock.locked_by.entry(requestor.to_string()).or_insert(0);
    *count = count.checked_add(1).ok_or_else(|| {
        LockerError::Consistency(format!(
            "Hold count for '{}' on '{}' cannot be increased any further",
            requestor, pool
        ))
    })?;
    lock.key = key.to_string();
    Ok(lock)
}

/// Drop every hold `requestor` has on `lock`.
///
/// A single call clears the requestor's count whatever its value. The key is
/// only reset once no requestor holds anything. Releasing a requestor that
/// holds nothing is not an error and records it with a zero count.
///
/// # Errors
///
/// * `LockerError::Validation` - `key` is empty
/// * `LockerError::LockHeldByOther` - the pool is held under a different key
pub fn release(mut lock: Lock, pool: &str, key: &str, requestor: &str) -> Result<Lock> {
    require_key(pool, key)?;
    let requestor = if requestor.is_empty() { key } else { requestor };

    if !lock.is_unlocked() && lock.key != key {
        return Err(LockerError::LockHeldByOther(format!(
            "Attempt to unlock '{}' with '{}' by '{}' thwarted. Currently held by someone else",
            pool, key, requestor
        )));
    }

    lock.locked_by.insert(requestor.to_string(), 0);
    if lock.locked_by.values().all(|&count| count == 0) {
        lock.key.clear();
    }
    Ok(lock)
}
