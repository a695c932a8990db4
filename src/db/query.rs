use chrono::{DateTime, Utc};
use rusqlite::types::Value;

use crate::errors::{AppError, AppResult};
use crate::models::{Category, FilterSpec, PeopleScope, Sentiment};

pub(crate) const SELECT_COLUMNS: &str = "id, path, directory, category, date, size, privileged, duplicate_hash, file_name, subject, from_email, to_email, sentiment, is_internal, topic";

/// Incremental WHERE-clause builder for the files table.
///
/// Each filter dimension appends one boolean clause together with the
/// positional arguments that clause binds, so placeholder order and argument
/// order stay in lockstep no matter which subset of dimensions is active.
/// The count form and the page form share the same clause list and argument
/// prefix; the page form appends page size and offset as its final two
/// arguments.
///
/// Topic, people, and sentiment clauses are written as
/// `(category != 'email' OR …)` on purpose: those attributes have no meaning
/// for claim/other records, which must never be excluded by them.
#[derive(Debug, Default)]
pub struct FileQuery {
    clauses: Vec<String>,
    args: Vec<Value>,
}

impl FileQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the full predicate for a filter specification. The only
    /// fallible dimension is the date range.
    pub fn from_spec(spec: &FilterSpec) -> AppResult<Self> {
        Ok(Self::new()
            .date_range(spec.date_start, spec.date_end)?
            .categories(&spec.categories)
            .topics(&spec.topics)
            .people(spec.people_scope, &spec.people)
            .sentiment(spec.sentiment)
            .exclude_privileged(spec.exclude_privileged))
    }

    /// Inclusive on both ends. An inverted range is a caller error and is
    /// rejected before any SQL is rendered.
    pub fn date_range(
        mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> AppResult<Self> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(AppError::InvalidRequest(format!(
                    "date range start {} is after end {}",
                    start.to_rfc3339(),
                    end.to_rfc3339()
                )));
            }
        }
        if let Some(start) = start {
            self.clauses.push("date >= ?".to_string());
            self.args.push(Value::Text(start.to_rfc3339()));
        }
        if let Some(end) = end {
            self.clauses.push("date <= ?".to_string());
            self.args.push(Value::Text(end.to_rfc3339()));
        }
        Ok(self)
    }

    /// OR-combined category membership; an empty set filters nothing.
    pub fn categories(mut self, categories: &[Category]) -> Self {
        if categories.is_empty() {
            return self;
        }
        self.clauses
            .push(format!("category IN ({})", placeholders(categories.len())));
        for category in categories {
            self.args.push(Value::Text(category.as_str().to_string()));
        }
        self
    }

    /// Topics only have meaning for emails; claim/other records always pass.
    pub fn topics(mut self, topics: &[String]) -> Self {
        if topics.is_empty() {
            return self;
        }
        self.clauses.push(format!(
            "(category != 'email' OR topic IN ({}))",
            placeholders(topics.len())
        ));
        for topic in topics {
            self.args.push(Value::Text(topic.clone()));
        }
        self
    }

    /// A specific-address match looks at both sides of the message, so every
    /// address is bound twice: the full set for the FROM list first, then the
    /// full set again for the TO list, matching placeholder order.
    pub fn people(mut self, scope: PeopleScope, addresses: &[String]) -> Self {
        match scope {
            PeopleScope::All => {}
            PeopleScope::Internal => {
                self.clauses
                    .push("(category != 'email' OR is_internal = 1)".to_string());
            }
            PeopleScope::External => {
                self.clauses
                    .push("(category != 'email' OR is_internal = 0)".to_string());
            }
            PeopleScope::Specific => {
                if addresses.is_empty() {
                    return self;
                }
                let list = placeholders(addresses.len());
                self.clauses.push(format!(
                    "(category != 'email' OR from_email IN ({list}) OR to_email IN ({list}))"
                ));
                for address in addresses {
                    self.args.push(Value::Text(address.clone()));
                }
                for address in addresses {
                    self.args.push(Value::Text(address.clone()));
                }
            }
        }
        self
    }

    /// `None` means "all sentiments" and filters nothing.
    pub fn sentiment(mut self, sentiment: Option<Sentiment>) -> Self {
        let Some(sentiment) = sentiment else {
            return self;
        };
        self.clauses
            .push("(category != 'email' OR sentiment = ?)".to_string());
        self.args.push(Value::Text(sentiment.as_str().to_string()));
        self
    }

    pub fn exclude_privileged(mut self, exclude: bool) -> Self {
        if exclude {
            self.clauses.push("privileged = 0".to_string());
        }
        self
    }

    fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            "1 = 1".to_string()
        } else {
            self.clauses.join(" AND ")
        }
    }

    /// COUNT rendering: shared WHERE clause, no pagination arguments.
    pub fn count_form(&self) -> (String, Vec<Value>) {
        (
            format!("SELECT COUNT(*) FROM files WHERE {}", self.where_clause()),
            self.args.clone(),
        )
    }

    /// Bounded-select rendering. Ordered by date descending with id as the
    /// stable tie-break so colliding dates cannot duplicate or skip rows
    /// across pages.
    pub fn page_form(&self, page_size: i64, offset: i64) -> (String, Vec<Value>) {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM files WHERE {} ORDER BY date DESC, id DESC LIMIT ? OFFSET ?",
            self.where_clause()
        );
        let mut args = self.args.clone();
        args.push(Value::Integer(page_size));
        args.push(Value::Integer(offset));
        (sql, args)
    }
}

fn placeholders(count: usize) -> String {
    let mut list = String::with_capacity(count * 2);
    for index in 0..count {
        if index > 0 {
            list.push(',');
        }
        list.push('?');
    }
    list
}
