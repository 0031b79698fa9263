//! Exit code constants for the locker server.
//!
//! - 0: Success
//! - 1: User error (missing or inconsistent configuration, bad input)
//! - 2: Lock state store unreadable, unwritable, or malformed
//! - 3: Server failure (worker gone, listener error, consistency check)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing or inconsistent configuration.
pub const USER_ERROR: i32 = 1;

/// The lock state document could not be read, written, or decoded.
pub const STORE_FAILURE: i32 = 2;

/// The server or the lock worker failed.
pub const SERVER_FAILURE: i32 = 3;
