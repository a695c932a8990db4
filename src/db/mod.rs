pub mod query;
mod seed;

pub use seed::SeedOptions;

use crate::errors::{AppError, AppResult};
use crate::models::{
    Category, CategoryCounts, EmailAttributes, FileRecord, FilterSpec, NewFile, PageResult,
    PeopleList, ProductionRequest, Sentiment,
};
use chrono::{DateTime, Utc};
use query::FileQuery;
use rusqlite::{params, params_from_iter, Connection};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

const SCHEMA_SQL: &str = include_str!("schema.sql");

pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// The record store: one SQLite catalog of file metadata plus the
/// production-request labels. Records are written at seed time and read-only
/// afterwards; the connection is owned here and handed to collaborators
/// explicitly.
#[derive(Debug)]
pub struct Database {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl Database {
    /// Opens (creating if needed) the catalog and applies the schema. Does
    /// not seed; see [`Database::new`].
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|error| {
                AppError::DataAccess(format!(
                    "create catalog directory {}: {error}",
                    parent.display()
                ))
            })?;
        }
        let conn = Connection::open(path)
            .map_err(|error| AppError::DataAccess(format!("open catalog {}: {error}", path.display())))?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path: path.to_path_buf(),
        })
    }

    /// Opens the catalog and seeds mock data when the files table is empty.
    pub fn new(path: &Path) -> AppResult<Self> {
        let db = Self::open(path)?;
        if db.record_count()? == 0 {
            tracing::info!(path = %db.db_path.display(), "catalog is empty, seeding mock data");
            let seeded = db.seed_mock_data(&SeedOptions::default())?;
            tracing::info!(files = seeded, "mock data seeded");
        }
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| AppError::DataAccess("catalog mutex poisoned".to_string()))
    }

    pub fn record_count(&self) -> AppResult<i64> {
        let conn = self.lock()?;
        let count = conn.query_row("SELECT COUNT(*) FROM files", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Seed-time write path. Rejects rows that would violate the catalog
    /// invariants instead of asserting.
    pub fn insert_file(&self, file: &NewFile) -> AppResult<i64> {
        if file.path.is_empty() || file.file_name.is_empty() {
            return Err(AppError::InvalidRequest(
                "file path and file name must be non-empty".to_string(),
            ));
        }
        if file.size < 0 {
            return Err(AppError::InvalidRequest(format!(
                "file {} has negative size {}",
                file.path, file.size
            )));
        }
        if file.category != Category::Email && file.email.is_some() {
            return Err(AppError::InvalidRequest(format!(
                "non-email record {} cannot carry email attributes",
                file.path
            )));
        }

        let email = file.email.as_ref();
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO files (
               path, directory, category, date, size, privileged, duplicate_hash, file_name,
               subject, from_email, to_email, sentiment, is_internal, topic
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                file.path,
                file.directory,
                file.category.as_str(),
                file.date.to_rfc3339(),
                file.size,
                file.privileged,
                file.duplicate_hash,
                file.file_name,
                email.map(|attrs| attrs.subject.as_str()),
                email.map(|attrs| attrs.from_address.as_str()),
                email.map(|attrs| attrs.to_address.as_str()),
                email.map(|attrs| attrs.sentiment.as_str()),
                email.map(|attrs| attrs.is_internal),
                email.map(|attrs| attrs.topic.as_str()),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn upsert_production_request(&self, request: &ProductionRequest) -> AppResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO production_requests (id, title, description) VALUES (?1, ?2, ?3)",
            params![request.id, request.title, request.description],
        )?;
        Ok(())
    }

    /// Runs the count form and the page form of one built predicate and
    /// assembles the page result. Page inputs below 1 are coerced rather than
    /// rejected; an inverted date range fails before the store is touched.
    pub fn search_files(
        &self,
        spec: &FilterSpec,
        page: i64,
        page_size: i64,
    ) -> AppResult<PageResult> {
        let query = FileQuery::from_spec(spec)?;
        let page = page.max(1);
        let page_size = if page_size < 1 { DEFAULT_PAGE_SIZE } else { page_size };
        let offset = (page - 1) * page_size;

        let conn = self.lock()?;

        let (count_sql, count_args) = query.count_form();
        let total_count: i64 = conn
            .query_row(&count_sql, params_from_iter(count_args), |row| row.get(0))
            .map_err(|error| AppError::DataAccess(format!("count files: {error}")))?;
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count + page_size - 1) / page_size
        };

        let (page_sql, page_args) = query.page_form(page_size, offset);
        let mut statement = conn
            .prepare(&page_sql)
            .map_err(|error| AppError::DataAccess(format!("prepare file query: {error}")))?;
        let files = statement
            .query_map(params_from_iter(page_args), parse_file_row)
            .map_err(|error| AppError::DataAccess(format!("query files: {error}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| AppError::DataAccess(format!("read file row: {error}")))?;

        tracing::debug!(
            total_count,
            page,
            page_size,
            total_pages,
            returned = files.len(),
            "file search completed"
        );

        Ok(PageResult {
            files,
            total_count,
            page,
            page_size,
            total_pages,
        })
    }

    pub fn get_file(&self, id: i64) -> AppResult<Option<FileRecord>> {
        use rusqlite::OptionalExtension;
        let conn = self.lock()?;
        let sql = format!(
            "SELECT {} FROM files WHERE id = ?1",
            query::SELECT_COLUMNS
        );
        conn.query_row(&sql, [id], parse_file_row)
            .optional()
            .map_err(|error| AppError::DataAccess(format!("get file {id}: {error}")))
    }

    /// Resolves a set of ids to records. Missing ids are simply absent from
    /// the result; strictness is the export assembler's concern.
    pub fn get_files_by_ids(&self, ids: &[i64]) -> AppResult<Vec<FileRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; ids.len()].join(",");
        let sql = format!(
            "SELECT {} FROM files WHERE id IN ({placeholders}) ORDER BY id ASC",
            query::SELECT_COLUMNS
        );
        let conn = self.lock()?;
        let mut statement = conn.prepare(&sql)?;
        let files = statement
            .query_map(params_from_iter(ids.iter()), parse_file_row)
            .map_err(|error| AppError::DataAccess(format!("query files by ids: {error}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| AppError::DataAccess(format!("read file row: {error}")))?;
        Ok(files)
    }

    /// Distinct topics across email records, for populating the filter UI.
    pub fn list_topics(&self) -> AppResult<Vec<String>> {
        let conn = self.lock()?;
        let mut statement = conn.prepare(
            "SELECT DISTINCT topic FROM files
             WHERE category = 'email' AND topic IS NOT NULL AND topic != ''
             ORDER BY topic",
        )?;
        let topics = statement
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| AppError::DataAccess(format!("list topics: {error}")))?;
        Ok(topics)
    }

    /// Internal and external address sets, each the union of FROM and TO
    /// across email records.
    pub fn list_people(&self) -> AppResult<PeopleList> {
        let conn = self.lock()?;
        let internal = query_addresses(&conn, 1)?;
        let external = query_addresses(&conn, 0)?;
        Ok(PeopleList { internal, external })
    }

    pub fn list_production_requests(&self) -> AppResult<Vec<ProductionRequest>> {
        let conn = self.lock()?;
        let mut statement =
            conn.prepare("SELECT id, title, description FROM production_requests ORDER BY id")?;
        let requests = statement
            .query_map([], |row| {
                let id: String = row.get(0)?;
                let title: String = row.get(1)?;
                let title = if title.is_empty() {
                    format!("Production Request {id}")
                } else {
                    title
                };
                Ok(ProductionRequest {
                    id,
                    title,
                    description: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| AppError::DataAccess(format!("list production requests: {error}")))?;
        Ok(requests)
    }

    pub fn category_counts(&self) -> AppResult<CategoryCounts> {
        let conn = self.lock()?;
        let mut statement =
            conn.prepare("SELECT category, COUNT(*) FROM files GROUP BY category")?;
        let mut rows = statement.query([])?;
        let mut counts = CategoryCounts::default();
        while let Some(row) = rows.next()? {
            let raw: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            match Category::parse(&raw) {
                Some(Category::Email) => counts.email = count,
                Some(Category::Claim) => counts.claim = count,
                Some(Category::Other) => counts.other = count,
                None => {
                    return Err(AppError::DataAccess(format!(
                        "unknown category in catalog: {raw}"
                    )))
                }
            }
        }
        Ok(counts)
    }
}

fn query_addresses(conn: &Connection, is_internal: i64) -> AppResult<Vec<String>> {
    let mut statement = conn.prepare(
        "SELECT DISTINCT from_email AS address FROM files
         WHERE category = 'email' AND is_internal = ?1 AND from_email IS NOT NULL AND from_email != ''
         UNION
         SELECT DISTINCT to_email AS address FROM files
         WHERE category = 'email' AND is_internal = ?1 AND to_email IS NOT NULL AND to_email != ''
         ORDER BY address",
    )?;
    let addresses = statement
        .query_map([is_internal], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| AppError::DataAccess(format!("list people: {error}")))?;
    Ok(addresses)
}

fn parse_file_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<FileRecord> {
    let category = parse_category(&row.get::<_, String>(3)?)?;
    let date = parse_time(&row.get::<_, String>(4)?)?;
    let duplicate_hash: Option<String> = row.get(7)?;

    // Email attributes are only materialized for email rows, so non-email
    // records can never surface stray email fields.
    let email = if category == Category::Email {
        Some(EmailAttributes {
            subject: row.get::<_, Option<String>>(9)?.unwrap_or_default(),
            from_address: row.get::<_, Option<String>>(10)?.unwrap_or_default(),
            to_address: row.get::<_, Option<String>>(11)?.unwrap_or_default(),
            sentiment: match row.get::<_, Option<String>>(12)? {
                Some(raw) => parse_sentiment(&raw)?,
                None => Sentiment::Unknown,
            },
            is_internal: row.get::<_, Option<bool>>(13)?.unwrap_or(false),
            topic: row.get::<_, Option<String>>(14)?.unwrap_or_default(),
        })
    } else {
        None
    };

    Ok(FileRecord {
        id: row.get(0)?,
        path: row.get(1)?,
        directory: row.get(2)?,
        category,
        date,
        size: row.get(5)?,
        privileged: row.get(6)?,
        duplicate_hash: duplicate_hash.filter(|hash| !hash.is_empty()),
        file_name: row.get(8)?,
        email,
    })
}

fn parse_category(raw: &str) -> rusqlite::Result<Category> {
    Category::parse(raw).ok_or_else(|| conversion_failure(3, format!("unknown category: {raw}")))
}

fn parse_sentiment(raw: &str) -> rusqlite::Result<Sentiment> {
    Sentiment::parse(raw).ok_or_else(|| conversion_failure(12, format!("unknown sentiment: {raw}")))
}

fn parse_time(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|error| conversion_failure(4, error.to_string()))
}

fn conversion_failure(column: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        rusqlite::types::Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeopleScope;
    use chrono::TimeZone;

    fn test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = Database::open(&dir.path().join("catalog.db")).expect("db");
        (dir, db)
    }

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 9, 30, 0).unwrap()
    }

    fn plain_file(path: &str, category: Category, at: DateTime<Utc>) -> NewFile {
        NewFile {
            path: path.to_string(),
            directory: path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("").to_string(),
            category,
            date: at,
            size: 4_096,
            privileged: false,
            duplicate_hash: None,
            file_name: path.rsplit('/').next().unwrap_or(path).to_string(),
            email: None,
        }
    }

    fn email_file(path: &str, at: DateTime<Utc>, topic: &str, sentiment: Sentiment) -> NewFile {
        let mut file = plain_file(path, Category::Email, at);
        file.email = Some(EmailAttributes {
            subject: format!("{topic} - {path}"),
            from_address: "john.doe@company.com".to_string(),
            to_address: "client1@external.com".to_string(),
            sentiment,
            is_internal: false,
            topic: topic.to_string(),
        });
        file
    }

    fn seed_emails_and_claims(db: &Database, emails: usize, claims: usize) {
        for index in 0..emails {
            let day = (index % 28) as u32 + 1;
            let year = 2022 + (index % 3) as i32;
            db.insert_file(&email_file(
                &format!("Email_Folder_{year}/email_{index}.pdf"),
                date(year, 3, day),
                if index % 2 == 0 { "Invoice" } else { "Proposal" },
                Sentiment::Neutral,
            ))
            .expect("insert email");
        }
        for index in 0..claims {
            let day = (index % 28) as u32 + 1;
            db.insert_file(&plain_file(
                &format!("Claim_Documents_2023/claim_{index}.pdf"),
                Category::Claim,
                date(2023, 6, day),
            ))
            .expect("insert claim");
        }
    }

    #[test]
    fn category_page_scenario_returns_a_full_page_and_correct_totals() {
        let (_dir, db) = test_db();
        seed_emails_and_claims(&db, 120, 80);

        let spec = FilterSpec {
            categories: vec![Category::Claim],
            ..FilterSpec::default()
        };
        let result = db.search_files(&spec, 1, 50).expect("search");
        assert_eq!(result.files.len(), 50);
        assert_eq!(result.total_count, 80);
        assert_eq!(result.total_pages, 2);
        assert!(result.files.iter().all(|file| file.category == Category::Claim));

        let second = db.search_files(&spec, 2, 50).expect("search");
        assert_eq!(second.files.len(), 30);
    }

    #[test]
    fn topic_filter_never_excludes_non_email_records() {
        let (_dir, db) = test_db();
        seed_emails_and_claims(&db, 40, 25);
        db.insert_file(&plain_file(
            "Other_Documents/note_1.pdf",
            Category::Other,
            date(2023, 1, 5),
        ))
        .expect("insert other");

        let spec = FilterSpec {
            topics: vec!["Invoice".to_string()],
            ..FilterSpec::default()
        };
        let result = db.search_files(&spec, 1, 1_000).expect("search");

        let claims = result
            .files
            .iter()
            .filter(|file| file.category == Category::Claim)
            .count();
        let others = result
            .files
            .iter()
            .filter(|file| file.category == Category::Other)
            .count();
        assert_eq!(claims, 25, "every claim passes the topic filter");
        assert_eq!(others, 1, "every other-category record passes");
        assert!(result
            .files
            .iter()
            .filter(|file| file.category == Category::Email)
            .all(|file| file.email.as_ref().map(|email| email.topic.as_str()) == Some("Invoice")));
    }

    #[test]
    fn sentiment_and_people_filters_are_email_only_dimensions() {
        let (_dir, db) = test_db();
        db.insert_file(&email_file(
            "Email_Folder_2023/angry.pdf",
            date(2023, 2, 1),
            "Legal Matter",
            Sentiment::Negative,
        ))
        .expect("insert email");
        db.insert_file(&plain_file(
            "Claim_Documents_2023/claim.pdf",
            Category::Claim,
            date(2023, 2, 2),
        ))
        .expect("insert claim");

        let spec = FilterSpec {
            sentiment: Some(Sentiment::Positive),
            people_scope: PeopleScope::Internal,
            ..FilterSpec::default()
        };
        let result = db.search_files(&spec, 1, 50).expect("search");
        assert_eq!(result.total_count, 1);
        assert_eq!(result.files[0].category, Category::Claim);
    }

    #[test]
    fn inverted_date_range_fails_before_querying() {
        let (_dir, db) = test_db();
        let spec = FilterSpec {
            date_start: Some(date(2024, 1, 1)),
            date_end: Some(date(2022, 1, 1)),
            ..FilterSpec::default()
        };
        let error = db.search_files(&spec, 1, 50).unwrap_err();
        assert!(matches!(error, AppError::InvalidRequest(_)));
    }

    #[test]
    fn inclusive_date_range_keeps_boundary_records() {
        let (_dir, db) = test_db();
        let boundary = date(2023, 6, 15);
        db.insert_file(&plain_file(
            "Claim_Documents_2023/on_boundary.pdf",
            Category::Claim,
            boundary,
        ))
        .expect("insert");

        let spec = FilterSpec {
            date_start: Some(boundary),
            date_end: Some(boundary),
            ..FilterSpec::default()
        };
        let result = db.search_files(&spec, 1, 50).expect("search");
        assert_eq!(result.total_count, 1);
    }

    #[test]
    fn page_inputs_are_coerced_not_rejected() {
        let (_dir, db) = test_db();
        seed_emails_and_claims(&db, 0, 5);

        let result = db
            .search_files(&FilterSpec::default(), 0, 0)
            .expect("search");
        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(result.total_pages, 1);

        let negative = db
            .search_files(&FilterSpec::default(), -3, -10)
            .expect("search");
        assert_eq!(negative.page, 1);
        assert_eq!(negative.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let (_dir, db) = test_db();
        let result = db
            .search_files(&FilterSpec::default(), 1, 50)
            .expect("search");
        assert_eq!(result.total_count, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.files.is_empty());
    }

    #[test]
    fn identical_searches_return_identical_pages() {
        let (_dir, db) = test_db();
        seed_emails_and_claims(&db, 30, 30);

        let spec = FilterSpec {
            exclude_privileged: true,
            ..FilterSpec::default()
        };
        let first = db.search_files(&spec, 2, 10).expect("search");
        let second = db.search_files(&spec, 2, 10).expect("search");
        assert_eq!(first, second);
    }

    #[test]
    fn colliding_dates_paginate_without_duplicates_or_gaps() {
        let (_dir, db) = test_db();
        let same_moment = date(2023, 4, 4);
        for index in 0..7 {
            db.insert_file(&plain_file(
                &format!("Other_Documents/tied_{index}.pdf"),
                Category::Other,
                same_moment,
            ))
            .expect("insert");
        }

        let mut seen = Vec::new();
        for page in 1..=7 {
            let result = db
                .search_files(&FilterSpec::default(), page, 1)
                .expect("search");
            assert_eq!(result.files.len(), 1);
            seen.push(result.files[0].id);
        }
        let mut deduped = seen.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), 7, "no row may repeat or vanish across pages");
    }

    #[test]
    fn results_are_ordered_newest_first() {
        let (_dir, db) = test_db();
        db.insert_file(&plain_file("a/old.pdf", Category::Other, date(2022, 1, 1)))
            .expect("insert");
        db.insert_file(&plain_file("a/new.pdf", Category::Other, date(2024, 1, 1)))
            .expect("insert");
        db.insert_file(&plain_file("a/mid.pdf", Category::Other, date(2023, 1, 1)))
            .expect("insert");

        let result = db
            .search_files(&FilterSpec::default(), 1, 10)
            .expect("search");
        let names: Vec<&str> = result.files.iter().map(|file| file.file_name.as_str()).collect();
        assert_eq!(names, vec!["new.pdf", "mid.pdf", "old.pdf"]);
    }

    #[test]
    fn privileged_exclusion_filters_flagged_records() {
        let (_dir, db) = test_db();
        let mut flagged = email_file(
            "Email_Folder_2023/privileged.pdf",
            date(2023, 8, 1),
            "Legal Matter",
            Sentiment::Neutral,
        );
        flagged.privileged = true;
        db.insert_file(&flagged).expect("insert");
        db.insert_file(&email_file(
            "Email_Folder_2023/ordinary.pdf",
            date(2023, 8, 2),
            "Invoice",
            Sentiment::Neutral,
        ))
        .expect("insert");

        let spec = FilterSpec {
            exclude_privileged: true,
            ..FilterSpec::default()
        };
        let result = db.search_files(&spec, 1, 50).expect("search");
        assert_eq!(result.total_count, 1);
        assert_eq!(result.files[0].file_name, "ordinary.pdf");
    }

    #[test]
    fn specific_people_filter_matches_either_side() {
        let (_dir, db) = test_db();
        let mut from_match = email_file(
            "Email_Folder_2023/from.pdf",
            date(2023, 9, 1),
            "Invoice",
            Sentiment::Neutral,
        );
        from_match.email.as_mut().unwrap().from_address = "alice.brown@company.com".to_string();
        db.insert_file(&from_match).expect("insert");

        let mut to_match = email_file(
            "Email_Folder_2023/to.pdf",
            date(2023, 9, 2),
            "Invoice",
            Sentiment::Neutral,
        );
        to_match.email.as_mut().unwrap().to_address = "alice.brown@company.com".to_string();
        db.insert_file(&to_match).expect("insert");

        db.insert_file(&email_file(
            "Email_Folder_2023/neither.pdf",
            date(2023, 9, 3),
            "Invoice",
            Sentiment::Neutral,
        ))
        .expect("insert");

        let spec = FilterSpec {
            people_scope: PeopleScope::Specific,
            people: vec!["alice.brown@company.com".to_string()],
            ..FilterSpec::default()
        };
        let result = db.search_files(&spec, 1, 50).expect("search");
        let names: Vec<&str> = result.files.iter().map(|file| file.file_name.as_str()).collect();
        assert_eq!(names, vec!["to.pdf", "from.pdf"]);
    }

    #[test]
    fn get_files_by_ids_resolves_only_known_ids() {
        let (_dir, db) = test_db();
        let id = db
            .insert_file(&plain_file(
                "Other_Documents/solo.pdf",
                Category::Other,
                date(2023, 10, 1),
            ))
            .expect("insert");

        let files = db.get_files_by_ids(&[id, id + 100]).expect("by ids");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].id, id);
        assert!(db.get_files_by_ids(&[]).expect("empty").is_empty());
    }

    #[test]
    fn non_email_rows_with_email_attributes_are_rejected() {
        let (_dir, db) = test_db();
        let mut bad = plain_file(
            "Claim_Documents_2023/claim.pdf",
            Category::Claim,
            date(2023, 1, 1),
        );
        bad.email = Some(EmailAttributes {
            subject: "stray".to_string(),
            from_address: String::new(),
            to_address: String::new(),
            sentiment: Sentiment::Unknown,
            is_internal: false,
            topic: String::new(),
        });
        let error = db.insert_file(&bad).unwrap_err();
        assert!(matches!(error, AppError::InvalidRequest(_)));
    }

    #[test]
    fn people_and_topic_lookups_reflect_inserted_emails() {
        let (_dir, db) = test_db();
        db.insert_file(&email_file(
            "Email_Folder_2023/one.pdf",
            date(2023, 5, 5),
            "Invoice",
            Sentiment::Positive,
        ))
        .expect("insert");

        assert_eq!(db.list_topics().expect("topics"), vec!["Invoice"]);
        let people = db.list_people().expect("people");
        assert!(people.external.contains(&"john.doe@company.com".to_string()));
        assert!(people.external.contains(&"client1@external.com".to_string()));
        assert!(people.internal.is_empty());
    }

    #[test]
    fn blank_production_request_titles_get_a_generated_label() {
        let (_dir, db) = test_db();
        db.upsert_production_request(&ProductionRequest {
            id: "PR-009".to_string(),
            title: String::new(),
            description: "untitled".to_string(),
        })
        .expect("upsert");

        let requests = db.list_production_requests().expect("list");
        assert_eq!(requests[0].title, "Production Request PR-009");
    }

    #[test]
    fn category_counts_group_by_category() {
        let (_dir, db) = test_db();
        seed_emails_and_claims(&db, 3, 2);
        db.insert_file(&plain_file(
            "Other_Documents/x.pdf",
            Category::Other,
            date(2023, 1, 1),
        ))
        .expect("insert");

        let counts = db.category_counts().expect("counts");
        assert_eq!(counts.email, 3);
        assert_eq!(counts.claim, 2);
        assert_eq!(counts.other, 1);
    }
}
