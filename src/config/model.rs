//! Config struct definitions.

use std::path::PathBuf;

/// Validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON document holding lock state.
    pub lock_config: PathBuf,

    /// Credentials required on every lock route, if any.
    pub auth: Option<BasicAuth>,

    /// Certificate and key to serve HTTPS with, if any.
    pub tls: Option<TlsPaths>,

    /// Port to listen on.
    pub port: u16,
}

/// HTTP basic-auth credential pair.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub user: String,
    pub password: String,
}

// Keep the password out of logs.
impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// PEM certificate and private key paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}
