//! Error taxonomy for the fetch → parse → sink pipeline.
//!
//! The record extractor itself never fails; malformed groups are filtered
//! out there. Everything that can go wrong upstream (network, missing table)
//! or downstream (file output) is surfaced through [`ScrapeError`].

use std::fmt;

/// Errors raised around the extraction core.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Transport failure or non-success HTTP status while fetching a page.
    #[error("failed to get response from {url}: {message}")]
    Fetch {
        url: String,
        status: Option<u16>,
        message: String,
    },
    /// The document had no table matching the configured selector.
    #[error("could not parse document: {0}")]
    Parse(String),
    /// Invalid configuration (bad selector, zero pages, unreadable config file).
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Filesystem failure while writing a sink.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn fetch_status(url: &str, status: u16) -> Self {
        ScrapeError::Fetch {
            url: url.to_string(),
            status: Some(status),
            message: format!("non-success status {}", status),
        }
    }

    pub fn fetch_transport(url: &str, err: impl fmt::Display) -> Self {
        ScrapeError::Fetch {
            url: url.to_string(),
            status: None,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_fetch_status_display() {
        let e = ScrapeError::fetch_status("https://news.ycombinator.com/", 503);
        let msg = e.to_string();
        assert!(msg.contains("https://news.ycombinator.com/"));
        assert!(msg.contains("503"));
        assert!(matches!(e, ScrapeError::Fetch { status: Some(503), .. }));
    }

    #[test]
    fn test_io_has_source() {
        let e: ScrapeError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("i/o error: disk full"));
        assert!(ScrapeError::Parse("no table".into()).source().is_none());
    }
}
