//! Tests for config validation.

use crate::cli::Cli;
use crate::config::{BasicAuth, Config, TlsPaths};
use crate::error::LockerError;
use std::path::PathBuf;

fn cli() -> Cli {
    Cli {
        lock_config: Some(PathBuf::from("locks.json")),
        auth_user: None,
        auth_pass: None,
        ssl_cert: None,
        ssl_key: None,
        port: 3000,
    }
}

fn config_error(cli: Cli) -> String {
    match Config::from_cli(cli) {
        Err(LockerError::Config(msg)) => msg,
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_minimal_config() {
    let config = Config::from_cli(cli()).unwrap();

    assert_eq!(config.lock_config, PathBuf::from("locks.json"));
    assert!(config.auth.is_none());
    assert!(config.tls.is_none());
    assert_eq!(config.port, 3000);
}

#[test]
fn test_missing_lock_config() {
    let msg = config_error(Cli {
        lock_config: None,
        ..cli()
    });
    assert_eq!(msg, "No LOCKER_CONFIG file specified");
}

#[test]
fn test_empty_lock_config() {
    let msg = config_error(Cli {
        lock_config: Some(PathBuf::new()),
        ..cli()
    });
    assert_eq!(msg, "No LOCKER_CONFIG file specified");
}

#[test]
fn test_full_auth_pair() {
    let config = Config::from_cli(Cli {
        auth_user: Some("admin".to_string()),
        auth_pass: Some("secret".to_string()),
        ..cli()
    })
    .unwrap();

    assert_eq!(
        config.auth,
        Some(BasicAuth {
            user: "admin".to_string(),
            password: "secret".to_string(),
        })
    );
}

#[test]
fn test_auth_user_without_password() {
    let msg = config_error(Cli {
        auth_user: Some("admin".to_string()),
        ..cli()
    });
    assert_eq!(msg, "AUTH_USER specified, but no AUTH_PASS was provided");
}

#[test]
fn test_auth_password_without_user() {
    let msg = config_error(Cli {
        auth_user: Some(String::new()),
        auth_pass: Some("secret".to_string()),
        ..cli()
    });
    assert_eq!(msg, "AUTH_PASS specified, but no AUTH_USER was provided");
}

#[test]
fn test_full_tls_pair() {
    let config = Config::from_cli(Cli {
        ssl_cert: Some(PathBuf::from("cert.pem")),
        ssl_key: Some(PathBuf::from("key.pem")),
        ..cli()
    })
    .unwrap();

    assert_eq!(
        config.tls,
        Some(TlsPaths {
            cert: PathBuf::from("cert.pem"),
            key: PathBuf::from("key.pem"),
        })
    );
}

#[test]
fn test_tls_key_without_cert() {
    let msg = config_error(Cli {
        ssl_key: Some(PathBuf::from("key.pem")),
        ..cli()
    });
    assert_eq!(msg, "SSL_KEY specified, but no SSL_CERT was provided");
}

#[test]
fn test_tls_cert_without_key() {
    let msg = config_error(Cli {
        ssl_cert: Some(PathBuf::from("cert.pem")),
        ..cli()
    });
    assert_eq!(msg, "SSL_CERT specified, but no SSL_KEY was provided");
}

#[test]
fn test_listen_addr_binds_all_interfaces() {
    let config = Config::from_cli(Cli {
        port: 8080,
        ..cli()
    })
    .unwrap();

    assert_eq!(config.listen_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn test_password_is_redacted_in_debug() {
    let auth = BasicAuth {
        user: "admin".to_string(),
        password: "secret".to_string(),
    };

    let rendered = format!("{:?}", auth);
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains("secret"));
}
