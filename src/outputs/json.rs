//! JSON output.
//!
//! Serializes records as a pretty-printed array. Each element carries the
//! raw record fields plus a `summary` object parsed from the meta line:
//!
//! ```json
//! [{ "title": "Example A", "url": "https://example.com/a",
//!    "meta": "42 points by alice | 10 comments", "index": 0,
//!    "summary": { "points": 42, "author": "alice", "age": null, "comments": 10 } }]
//! ```

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{error, info, instrument};

use crate::error::ScrapeError;
use crate::models::{ExportedRecord, Record};

pub fn to_json_string(records: &[Record]) -> serde_json::Result<String> {
    let exported: Vec<ExportedRecord<'_>> = records.iter().map(ExportedRecord::from).collect();
    serde_json::to_string_pretty(&exported)
}

/// Write records to `path`, returning the path written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_records(records: &[Record], path: &Path) -> Result<PathBuf, ScrapeError> {
    let json = to_json_string(records).map_err(|e| {
        error!(error = %e, "Failed to serialize records");
        ScrapeError::Io(e.into())
    })?;

    fs::write(path, json).await?;
    info!(count = records.len(), "Wrote JSON file");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let records = vec![Record {
            title: "Example A".to_string(),
            url: Some("https://example.com/a".to_string()),
            meta: "42 points by alice | 10 comments".to_string(),
            index: 0,
        }];

        let json = to_json_string(&records).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["url"], "https://example.com/a");
        assert_eq!(value[0]["summary"]["author"], "alice");
        assert_eq!(value[0]["summary"]["comments"], 10);
        assert!(value[0]["summary"]["age"].is_null());
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(to_json_string(&[]).unwrap(), "[]");
    }
}
