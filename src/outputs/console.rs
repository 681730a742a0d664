//! Console output.

use std::io::{self, Write};

use tracing::info;

use crate::models::Record;

/// Format one record as `title<TAB>-<TAB>meta`.
pub fn format_record(record: &Record) -> String {
    format!("{}\t-\t{}", record.title, record.meta)
}

/// Print every record, each surrounded by blank lines.
pub fn print_records<W: Write>(mut out: W, records: &[Record]) -> io::Result<()> {
    info!(count = records.len(), "Printing news items");
    for record in records {
        writeln!(out, "\n{}\n", format_record(record))?;
    }
    out.flush()
}
