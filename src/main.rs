//! Entry point for the `locker` server.
//!
//! Parses arguments, prepares the lock state file, starts the lock worker and
//! serves HTTP until shutdown. Errors are printed with the matching exit code.

use std::process::ExitCode;

use locker::cli::Cli;
use locker::config::Config;
use locker::error::Result;
use locker::exit_codes;
use locker::locks::FileLockStore;
use locker::server;
use locker::worker::LockWorker;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(Cli::parse_args()).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;

    let store = FileLockStore::new(&config.lock_config);
    store.ensure_exists()?;
    tracing::info!(path = %store.path().display(), "Using lock state file");

    let worker = LockWorker::new(store).spawn()?;
    server::serve(&config, worker).await
}
