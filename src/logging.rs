//! Opt-in file logging.
//!
//! The terminal belongs to the greeting screen, so nothing is logged to
//! stdout or stderr. Setting `HELLO_STORES_LOG=<prefix>` sends events to
//! `<prefix>.<unix-seconds>.<pid>`, filtered by `RUST_LOG` (default `info`).
//! Without it no subscriber is installed and events, including the
//! startup line, are discarded.

use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "HELLO_STORES_LOG";

/// Installs the global subscriber if logging was requested.
///
/// Returns the path of the log file in use.
pub fn init_tracing() -> Option<PathBuf> {
    let path = log_file_for(std::env::var(LOG_ENV_VAR).ok().as_deref())?;

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("hello-stores: logging disabled, cannot create {}: {err}", path.display());
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .init();

    Some(path)
}

/// Resolves the env var value to a per-run file; a blank value disables logging.
fn log_file_for(prefix: Option<&str>) -> Option<PathBuf> {
    let prefix = prefix.map(str::trim).filter(|prefix| !prefix.is_empty())?;
    let started = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    Some(PathBuf::from(format!("{prefix}.{started}.{}", std::process::id())))
}
