use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed classification of catalog records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Email,
    Claim,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Claim => "claim",
            Self::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "email" => Some(Self::Email),
            "claim" => Some(Self::Claim),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// How the people dimension narrows email records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeopleScope {
    #[default]
    All,
    Internal,
    External,
    Specific,
}

/// Attributes that only exist for email records. Non-email records carry
/// `None` for the whole group, which keeps the "no stray email fields"
/// invariant out of every call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAttributes {
    pub subject: String,
    pub from_address: String,
    pub to_address: String,
    pub sentiment: Sentiment,
    pub is_internal: bool,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: i64,
    pub path: String,
    pub directory: String,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub size: i64,
    pub privileged: bool,
    pub duplicate_hash: Option<String>,
    pub file_name: String,
    pub email: Option<EmailAttributes>,
}

/// Row content for a record about to enter the catalog. Ids are assigned by
/// the store at insert time.
#[derive(Debug, Clone)]
pub struct NewFile {
    pub path: String,
    pub directory: String,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub size: i64,
    pub privileged: bool,
    pub duplicate_hash: Option<String>,
    pub file_name: String,
    pub email: Option<EmailAttributes>,
}

/// A bag of independent, optional predicates. Every field defaults to
/// "do not filter".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub date_start: Option<DateTime<Utc>>,
    pub date_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub people_scope: PeopleScope,
    #[serde(default)]
    pub people: Vec<String>,
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub exclude_privileged: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub files: Vec<FileRecord>,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

/// Human-facing label for a document production; exported archives are named
/// after its id. Nothing in the files table references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRequest {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleList {
    pub internal: Vec<String>,
    pub external: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub email: i64,
    pub claim: i64,
    pub other: i64,
}
