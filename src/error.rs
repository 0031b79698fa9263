//! Error types for the locker server.
//!
//! Uses thiserror for derive macros. Every variant carries a message that is
//! safe to hand back to a client verbatim.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for locker operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LockerError {
    /// The lock state document could not be read or written.
    #[error("{0}")]
    Io(String),

    /// The lock state document is not valid JSON for a lock snapshot.
    #[error("{0}")]
    Decode(String),

    /// The pool is currently held under a different key.
    #[error("{0}")]
    LockHeldByOther(String),

    /// A request is missing a required field.
    #[error("{0}")]
    Validation(String),

    /// An operation tag that the worker does not understand.
    #[error("Invalid lock request '{0}'")]
    InvalidCommand(String),

    /// The stored state disagrees with what was just written.
    #[error("{0}")]
    Consistency(String),

    /// The lock worker thread is no longer accepting requests.
    #[error("lock worker is not running")]
    WorkerUnavailable,

    /// Startup configuration is missing or inconsistent.
    #[error("{0}")]
    Config(String),

    /// The HTTP listener failed.
    #[error("Error running webserver: {0}")]
    Server(String),
}

impl LockerError {
    /// Returns the process exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LockerError::Config(_) | LockerError::Validation(_) => exit_codes::USER_ERROR,
            LockerError::Io(_) | LockerError::Decode(_) => exit_codes::STORE_FAILURE,
            LockerError::LockHeldByOther(_)
            | LockerError::InvalidCommand(_)
            | LockerError::Consistency(_)
            | LockerError::WorkerUnavailable
            | LockerError::Server(_) => exit_codes::SERVER_FAILURE,
        }
    }
}

/// Result type alias for locker operations.
pub type Result<T> = std::result::Result<T, LockerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_has_user_exit_code() {
        let err = LockerError::Config("No LOCKER_CONFIG file specified".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn store_errors_have_store_exit_code() {
        assert_eq!(
            LockerError::Io("unreadable".to_string()).exit_code(),
            exit_codes::STORE_FAILURE
        );
        assert_eq!(
            LockerError::Decode("bad json".to_string()).exit_code(),
            exit_codes::STORE_FAILURE
        );
    }

    #[test]
    fn worker_errors_have_server_exit_code() {
        assert_eq!(
            LockerError::WorkerUnavailable.exit_code(),
            exit_codes::SERVER_FAILURE
        );
        assert_eq!(
            LockerError::Consistency("mismatch".to_string()).exit_code(),
            exit_codes::SERVER_FAILURE
        );
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = LockerError::InvalidCommand("Frobnicate".to_string());
        assert_eq!(err.to_string(), "Invalid lock request 'Frobnicate'");

        let err = LockerError::Server("address in use".to_string());
        assert_eq!(err.to_string(), "Error running webserver: address in use");
    }
}
