use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Filesystem locations the catalog uses: where the database and logs live,
/// and where export archives are written.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            export_dir: export_dir.into(),
        }
    }

    /// Reads `CATALOG_DATA_DIR` (required) and `CATALOG_EXPORT_DIR`
    /// (defaults to `<data_dir>/exports`).
    pub fn from_env() -> AppResult<Self> {
        let data_dir = env::var("CATALOG_DATA_DIR").map(PathBuf::from).map_err(|_| {
            AppError::InvalidRequest("CATALOG_DATA_DIR environment variable not set".to_string())
        })?;
        let export_dir = env::var("CATALOG_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("exports"));
        Ok(Self {
            data_dir,
            export_dir,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("catalog.db")
    }
}
