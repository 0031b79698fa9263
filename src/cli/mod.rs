//! CLI argument parsing for locker.
//!
//! Uses clap derive macros. Every option can also be supplied through the
//! environment variable named next to it, which is how the server is usually
//! configured when deployed.

use clap::Parser;
use std::path::PathBuf;

/// Locker: a small HTTP service handing out named, reentrant locks.
///
/// Lock state is kept in a single JSON document. Clients acquire a pool with
/// `PUT /lock/{pool}`, release it with `DELETE /lock/{pool}`, and inspect all
/// pools with `GET /locks`.
#[derive(Parser, Debug)]
#[command(name = "locker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON document holding lock state. Created if missing.
    #[arg(long = "config", env = "LOCKER_CONFIG")]
    pub lock_config: Option<PathBuf>,

    /// Username required via HTTP basic auth.
    #[arg(long, env = "AUTH_USER")]
    pub auth_user: Option<String>,

    /// Password required via HTTP basic auth.
    #[arg(long, env = "AUTH_PASS", hide_env_values = true)]
    pub auth_pass: Option<String>,

    /// TLS certificate (PEM). Serves HTTPS when given together with --ssl-key.
    #[arg(long, env = "SSL_CERT")]
    pub ssl_cert: Option<PathBuf>,

    /// TLS private key (PEM).
    #[arg(long, env = "SSL_KEY")]
    pub ssl_key: Option<PathBuf>,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serial_test::serial;

    const ENV_VARS: [&str; 6] = [
        "LOCKER_CONFIG",
        "AUTH_USER",
        "AUTH_PASS",
        "SSL_CERT",
        "SSL_KEY",
        "PORT",
    ];

    /// Clear every variable the CLI reads so the ambient environment cannot
    /// leak into a test.
    fn clear_env() {
        for var in ENV_VARS {
            // SAFETY: callers are #[serial], so no other test thread touches
            // the environment concurrently.
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    #[serial]
    fn parse_defaults() {
        clear_env();
        let cli = Cli::try_parse_from(["locker"]).unwrap();
        assert!(cli.lock_config.is_none());
        assert!(cli.auth_user.is_none());
        assert!(cli.auth_pass.is_none());
        assert!(cli.ssl_cert.is_none());
        assert!(cli.ssl_key.is_none());
        assert_eq!(cli.port, 3000);
    }

    #[test]
    #[serial]
    fn parse_flags() {
        clear_env();
        let cli = Cli::try_parse_from([
            "locker",
            "--config",
            "/var/lib/locker/locks.json",
            "--auth-user",
            "admin",
            "--auth-pass",
            "secret",
            "--ssl-cert",
            "cert.pem",
            "--ssl-key",
            "key.pem",
            "--port",
            "8443",
        ])
        .unwrap();
        assert_eq!(
            cli.lock_config,
            Some(PathBuf::from("/var/lib/locker/locks.json"))
        );
        assert_eq!(cli.auth_user.as_deref(), Some("admin"));
        assert_eq!(cli.auth_pass.as_deref(), Some("secret"));
        assert_eq!(cli.ssl_cert, Some(PathBuf::from("cert.pem")));
        assert_eq!(cli.ssl_key, Some(PathBuf::from("key.pem")));
        assert_eq!(cli.port, 8443);
    }

    #[test]
    #[serial]
    fn parse_from_environment() {
        clear_env();
        // SAFETY: #[serial] keeps other tests off the environment.
        unsafe {
            std::env::set_var("LOCKER_CONFIG", "/tmp/locks.json");
            std::env::set_var("AUTH_USER", "admin");
            std::env::set_var("AUTH_PASS", "secret");
            std::env::set_var("PORT", "4000");
        }

        let cli = Cli::try_parse_from(["locker"]).unwrap();
        clear_env();

        assert_eq!(cli.lock_config, Some(PathBuf::from("/tmp/locks.json")));
        assert_eq!(cli.auth_user.as_deref(), Some("admin"));
        assert_eq!(cli.auth_pass.as_deref(), Some("secret"));
        assert_eq!(cli.port, 4000);
    }

    #[test]
    #[serial]
    fn flags_override_environment() {
        clear_env();
        // SAFETY: #[serial] keeps other tests off the environment.
        unsafe { std::env::set_var("PORT", "4000") };

        let cli = Cli::try_parse_from(["locker", "--port", "5000"]).unwrap();
        clear_env();

        assert_eq!(cli.port, 5000);
    }

    #[test]
    #[serial]
    fn parse_invalid_port() {
        clear_env();
        assert!(Cli::try_parse_from(["locker", "--port", "not-a-port"]).is_err());
    }
}
