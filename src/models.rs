//! Data models for extracted listing entries.
//!
//! - [`Record`]: one (title, url, meta) entry produced by the extractor
//! - [`MetaSummary`]: downstream interpretation of a record's meta line
//! - [`ExportedRecord`]: the JSON export shape combining both

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One listing entry, built from a header row and the meta row right after it.
///
/// `index` is the zero-based position among emitted records. It only orders
/// records within one extraction and is not a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    /// Trimmed header row text, or the title link text in link-aware mode.
    pub title: String,
    /// Link target of the header row, if it has one.
    pub url: Option<String>,
    /// Trimmed text of the meta row (score, author, age, comments).
    pub meta: String,
    /// Ordinal among surviving records.
    pub index: usize,
}

static POINTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+points?\b").unwrap());
static AUTHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bby\s+([^\s|]+)").unwrap());
static AGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+\s+(?:second|minute|hour|day|week|month|year)s?\s+ago)").unwrap()
});
static COMMENTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*comments?\b").unwrap());

/// Fields recovered from a meta line such as
/// `"42 points by alice 3 hours ago | hide | 10 comments"`.
///
/// Every field is optional: job postings carry only an age, freshly posted
/// stories show `discuss` instead of a comment count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetaSummary {
    pub points: Option<u32>,
    pub author: Option<String>,
    pub age: Option<String>,
    pub comments: Option<u32>,
}

impl MetaSummary {
    pub fn parse(meta: &str) -> Self {
        let points = POINTS_RE
            .captures(meta)
            .and_then(|c| c[1].parse().ok());
        let author = AUTHOR_RE.captures(meta).map(|c| c[1].to_string());
        let age = AGE_RE
            .captures(meta)
            .map(|c| c[1].split_whitespace().collect::<Vec<_>>().join(" "));
        let comments = match COMMENTS_RE.captures(meta) {
            Some(c) => c[1].parse().ok(),
            None if meta.contains("discuss") => Some(0),
            None => None,
        };

        MetaSummary {
            points,
            author,
            age,
            comments,
        }
    }
}

/// JSON export shape: the raw record plus its parsed meta line.
#[derive(Debug, Serialize)]
pub struct ExportedRecord<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub summary: MetaSummary,
}

impl<'a> From<&'a Record> for ExportedRecord<'a> {
    fn from(record: &'a Record) -> Self {
        ExportedRecord {
            record,
            summary: MetaSummary::parse(&record.meta),
        }
    }
}
