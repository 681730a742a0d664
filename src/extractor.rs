//! Paired-row record extraction.
//!
//! A listing table encodes each entry as a fixed three-row group:
//!
//! ```text
//! row 3k     header   title text (and the title link)
//! row 3k+1   meta     "42 points by alice 3 hours ago | 10 comments"
//! row 3k+2   spacer   empty
//! ```
//!
//! The extractor walks the rows in windows of [`GROUP_PERIOD`], pairs each
//! window's header with its meta row, and skips the spacer. Windows that end
//! before the meta row, and windows whose title trims to nothing, are dropped
//! without consuming an index.
//!
//! Extraction is a pure function of its input. It reads rows through the
//! [`RowNode`] capability, so any parse tree can feed it through an adapter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Record;

/// Rows per logical entry: header, meta, spacer.
pub const GROUP_PERIOD: usize = 3;

/// Read-only view of one table row.
pub trait RowNode {
    /// Concatenated text content of the row, trimmed.
    fn text(&self) -> &str;

    /// Target of the row's title link, if the row has one.
    fn link(&self) -> Option<&str>;

    /// Trimmed text of the row's title link, if the row has one.
    fn link_text(&self) -> Option<&str> {
        None
    }

    /// Position of the row within its parent sequence.
    fn position(&self) -> usize;
}

/// How a record's title is taken from its header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractMode {
    /// Whole header row text.
    #[default]
    Text,
    /// Title link text, falling back to the whole row text.
    LinkAware,
}

impl ExtractMode {
    fn title<'r, R: RowNode>(self, header: &'r R) -> &'r str {
        match self {
            ExtractMode::Text => header.text(),
            ExtractMode::LinkAware => header
                .link_text()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| header.text()),
        }
    }
}

/// Lazy sequence of records over a row slice.
///
/// Cloning a `Records` yields an independent iterator at the same point, so
/// a fresh clone taken before iteration replays the full sequence.
#[derive(Debug)]
pub struct Records<'a, R> {
    rows: &'a [R],
    window: usize,
    emitted: usize,
    mode: ExtractMode,
}

impl<R> Clone for Records<'_, R> {
    fn clone(&self) -> Self {
        Records {
            rows: self.rows,
            window: self.window,
            emitted: self.emitted,
            mode: self.mode,
        }
    }
}

impl<'a, R: RowNode> Iterator for Records<'a, R> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        loop {
            let start = self.window * GROUP_PERIOD;
            if start >= self.rows.len() {
                return None;
            }
            self.window += 1;

            let (Some(header), Some(meta)) = (self.rows.get(start), self.rows.get(start + 1))
            else {
                debug!(position = start, "Dropping incomplete trailing group");
                return None;
            };

            let title = self.mode.title(header).trim();
            if title.is_empty() {
                debug!(
                    header = header.position(),
                    meta = meta.position(),
                    "Dropping group with empty title"
                );
                continue;
            }

            let record = Record {
                title: title.to_string(),
                url: header.link().map(str::to_string),
                meta: meta.text().trim().to_string(),
                index: self.emitted,
            };
            self.emitted += 1;
            return Some(record);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_rows = self.rows.len().saturating_sub(self.window * GROUP_PERIOD);
        // A window of at least two rows can yield a record.
        (0, Some((remaining_rows + 1) / GROUP_PERIOD))
    }
}

impl<R: RowNode> std::iter::FusedIterator for Records<'_, R> {}

/// Lazily pair header and meta rows from `rows`.
pub fn records<R: RowNode>(rows: &[R], mode: ExtractMode) -> Records<'_, R> {
    Records {
        rows,
        window: 0,
        emitted: 0,
        mode,
    }
}

/// Extract all records using [`ExtractMode::Text`].
///
/// `None` stands for "no row sequence available" and yields an empty result,
/// same as an empty slice.
pub fn extract<R: RowNode>(rows: Option<&[R]>) -> Vec<Record> {
    extract_with(rows, ExtractMode::Text)
}

/// Extract all records with an explicit title mode.
pub fn extract_with<R: RowNode>(rows: Option<&[R]>, mode: ExtractMode) -> Vec<Record> {
    match rows {
        Some(rows) if !rows.is_empty() => records(rows, mode).collect(),
        _ => Vec::new(),
    }
}
