pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;

pub use catalog::{Catalog, SENTIMENT_OPTIONS};
pub use config::Config;
pub use db::{Database, SeedOptions, DEFAULT_PAGE_SIZE};
pub use errors::{AppError, AppResult};

use std::path::Path;
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Sets up daily-rolling json logs under `<data_dir>/logs`, filtered by
/// `RUST_LOG` (default `info`). Call once from the embedding application.
pub fn init_tracing(data_dir: &Path) -> Result<(), String> {
    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir).map_err(|error| error.to_string())?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "catalog.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .with_writer(non_blocking)
        .try_init()
        .map_err(|error| error.to_string())
}
