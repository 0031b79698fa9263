//! Server configuration for locker.
//!
//! [`Config`] is the validated form of the command line and environment
//! options in [`Cli`](crate::cli::Cli). Options that only make sense in pairs
//! (basic-auth user and password, TLS certificate and key) are checked here so
//! the rest of the server only ever sees complete settings.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{BasicAuth, Config, TlsPaths};
