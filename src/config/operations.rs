//! Config construction and validation.

use super::model::{BasicAuth, Config, TlsPaths};
use crate::cli::Cli;
use crate::error::{LockerError, Result};
use std::net::SocketAddr;

impl Config {
    /// Build a validated config from parsed CLI arguments.
    ///
    /// Empty strings count as unset, matching how blank environment
    /// variables behave.
    ///
    /// # Errors
    ///
    /// * `LockerError::Config` - no lock state path, or only half of the
    ///   auth or TLS pair was given
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let lock_config = cli
            .lock_config
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| LockerError::Config("No LOCKER_CONFIG file specified".to_string()))?;

        let auth = match (non_empty(cli.auth_user), non_empty(cli.auth_pass)) {
            (Some(user), Some(password)) => Some(BasicAuth { user, password }),
            (Some(_), None) => {
                return Err(LockerError::Config(
                    "AUTH_USER specified, but no AUTH_PASS was provided".to_string(),
                ));
            }
            (None, Some(_)) => {
                return Err(LockerError::Config(
                    "AUTH_PASS specified, but no AUTH_USER was provided".to_string(),
                ));
            }
            (None, None) => None,
        };

        let cert = cli.ssl_cert.filter(|p| !p.as_os_str().is_empty());
        let key = cli.ssl_key.filter(|p| !p.as_os_str().is_empty());
        let tls = match (cert, key) {
            (Some(cert), Some(key)) => Some(TlsPaths { cert, key }),
            (None, Some(_)) => {
                return Err(LockerError::Config(
                    "SSL_KEY specified, but no SSL_CERT was provided".to_string(),
                ));
            }
            (Some(_), None) => {
                return Err(LockerError::Config(
                    "SSL_CERT specified, but no SSL_KEY was provided".to_string(),
                ));
            }
            (None, None) => None,
        };

        Ok(Self {
            lock_config,
            auth,
            tls,
            port: cli.port,
        })
    }

    /// Address the server binds to: all interfaces on the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
