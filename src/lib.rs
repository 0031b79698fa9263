//! Locker: a named-pool lock server.
//!
//! Clients acquire and release reentrant, reference-counted locks on named
//! pools over HTTP. All lock state lives in one JSON document, and every
//! read-modify-write of that document goes through a single worker thread.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod locks;
pub mod server;
pub mod worker;

#[cfg(test)]
mod test_support;
