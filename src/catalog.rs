use crate::config::Config;
use crate::db::Database;
use crate::errors::AppResult;
use crate::export;
use crate::models::{
    CategoryCounts, FilterSpec, PageResult, PeopleList, ProductionRequest,
};
use std::path::PathBuf;

/// Fixed choice list for the sentiment dropdown; "all" maps to no filter.
pub const SENTIMENT_OPTIONS: &[&str] = &["all", "positive", "negative", "neutral", "unknown"];

/// The external contract a presentation layer consumes: filtered, paginated
/// search over the record store plus archive export. Owns the store handle
/// and the configured export location.
pub struct Catalog {
    db: Database,
    export_dir: PathBuf,
}

impl Catalog {
    /// Opens (and seeds, when empty) the catalog described by the config.
    pub fn new(config: &Config) -> AppResult<Self> {
        let db = Database::new(&config.db_path())?;
        Ok(Self {
            db,
            export_dir: config.export_dir.clone(),
        })
    }

    /// Wraps an already-open store; used by embedders and tests that manage
    /// the database themselves.
    pub fn with_database(db: Database, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            export_dir: export_dir.into(),
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn search(&self, spec: &FilterSpec, page: i64, page_size: i64) -> AppResult<PageResult> {
        let span = tracing::info_span!("search", page, page_size);
        let _guard = span.enter();
        self.db.search_files(spec, page, page_size)
    }

    /// Resolves the ids and writes `{label}_{timestamp}.zip` into the
    /// configured export directory, returning the archive path.
    pub fn export_archive(&self, label: &str, file_ids: &[i64]) -> AppResult<PathBuf> {
        let span = tracing::info_span!("export_archive", label, requested = file_ids.len());
        let _guard = span.enter();
        export::export_archive(&self.db, label, file_ids, &self.export_dir)
    }

    pub fn list_topics(&self) -> AppResult<Vec<String>> {
        self.db.list_topics()
    }

    pub fn list_people(&self) -> AppResult<PeopleList> {
        self.db.list_people()
    }

    pub fn list_sentiment_options(&self) -> Vec<String> {
        SENTIMENT_OPTIONS.iter().map(|option| option.to_string()).collect()
    }

    pub fn list_production_requests(&self) -> AppResult<Vec<ProductionRequest>> {
        self.db.list_production_requests()
    }

    pub fn category_counts(&self) -> AppResult<CategoryCounts> {
        self.db.category_counts()
    }

    pub fn record_count(&self) -> AppResult<i64> {
        self.db.record_count()
    }
}
