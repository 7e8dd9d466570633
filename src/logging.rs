//! tracing setup.
//!
//! The viewer owns the terminal, so its logs go to a file. Filtering follows
//! `RUST_LOG`, falling back to `trivia_viewer=info`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "trivia_viewer=info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("logger already initialized: {0}")]
    Init(String),
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Append plain-text logs to `path`.
pub fn init_file<P: AsRef<Path>>(path: P) -> Result<(), LoggingError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.display().to_string(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))
}

/// Log to stderr, for commands that do not take over the terminal.
pub fn init_stderr() -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))
}
