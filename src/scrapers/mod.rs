//! Listing sources feeding the extractor.
//!
//! Each scraper follows the same three steps:
//!
//! 1. **Fetch**: download the raw document through a [`DocumentSource`]
//! 2. **Parse**: locate the listing table and adapt its rows to
//!    [`RowNode`](crate::extractor::RowNode)
//! 3. **Extract**: hand the rows to [`crate::extractor`]
//!
//! # Supported Sources
//!
//! | Source | Module | Method |
//! |--------|--------|--------|
//! | Hacker News | [`ycombinator`] | HTML table scraping, `?p=N` pagination |

pub mod ycombinator;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::error::ScrapeError;
use crate::utils::truncate_for_log;

/// Anything that can turn a URL into raw document text.
///
/// [`HttpSource`] is the production implementation; tests substitute
/// in-memory fixtures.
pub trait DocumentSource {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// HTTP document source with a per-request deadline.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ScrapeError::Config(format!("http client: {}", e)))?;
        Ok(HttpSource { client })
    }
}

impl DocumentSource for HttpSource {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::fetch_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Failed to get response");
            return Err(ScrapeError::fetch_status(url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::fetch_transport(url, e))?;
        debug!(
            bytes = body.len(),
            preview = %truncate_for_log(&body, 200),
            "Fetched document"
        );
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port, returning its URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/", addr)
    }

    fn source(timeout: Duration) -> HttpSource {
        HttpSource::new(timeout, "yc_news_list-test").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 15\r\nConnection: close\r\n\r\n<table></table>",
        )
        .await;

        let body = source(Duration::from_secs(5)).fetch(&url).await.unwrap();
        assert_eq!(body, "<table></table>");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let err = source(Duration::from_secs(5)).fetch(&url).await.unwrap_err();
        match err {
            ScrapeError::Fetch { url: failed, status, .. } => {
                assert_eq!(failed, url);
                assert_eq!(status, Some(503));
            }
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_times_out_on_silent_server() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        tokio::spawn(async move {
            // Accept and hold the connection without ever replying.
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let started = std::time::Instant::now();
        let err = source(Duration::from_secs(1)).fetch(&url).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch { status: None, .. }));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let err = source(Duration::from_secs(2)).fetch(&url).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch { status: None, .. }));
    }
}
