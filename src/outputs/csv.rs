//! CSV output.
//!
//! Two columns, `header` and `meta`, one line per record. Fields containing
//! the delimiter, a quote, CR or LF are quoted and inner quotes doubled.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::error::ScrapeError;
use crate::models::Record;

const DELIMITER: char = ',';
pub const HEADER: [&str; 2] = ["header", "meta"];

fn needs_quotes(field: &str) -> bool {
    field.contains(DELIMITER) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Append one row, quoting only the fields that need it.
pub fn push_row(out: &mut String, row: &[&str]) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    // CRLF line endings, as spreadsheet tools expect.
    out.push_str("\r\n");
}

/// Render all records, header line first.
pub fn to_csv_string(records: &[Record]) -> String {
    let mut out = String::new();
    push_row(&mut out, &HEADER);
    for record in records {
        push_row(&mut out, &[record.title.as_str(), record.meta.as_str()]);
    }
    out
}

/// Write records to `path`, returning the path written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_records(records: &[Record], path: &Path) -> Result<PathBuf, ScrapeError> {
    tokio::fs::write(path, to_csv_string(records)).await?;
    info!(count = records.len(), "News data saved");
    Ok(path.to_path_buf())
}
