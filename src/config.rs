//! Scraper configuration.
//!
//! Values come from three layers, later ones winning:
//! built-in defaults, an optional YAML file (`--config`), then CLI flags.
//!
//! ```yaml
//! url: https://news.ycombinator.com/
//! pages: 2
//! timeout_secs: 10
//! table_selector: "table"
//! mode: link-aware
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};

use crate::cli::Cli;
use crate::error::ScrapeError;
use crate::extractor::ExtractMode;

pub const DEFAULT_URL: &str = "https://news.ycombinator.com/";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Listing page to scrape.
    pub url: String,
    /// Number of listing pages (`?p=N`) to fetch.
    pub pages: usize,
    /// Maximum in-flight page fetches.
    pub concurrency: usize,
    /// Per-request deadline.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// First element matching this selector is the listing table.
    pub table_selector: String,
    /// Rows inside the table, in document order.
    pub row_selector: String,
    /// Title link inside a header row.
    pub title_link_selector: String,
    pub mode: ExtractMode,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            url: DEFAULT_URL.to_string(),
            pages: 1,
            concurrency: 4,
            timeout_secs: 15,
            user_agent: format!("yc_news_list/{}", env!("CARGO_PKG_VERSION")),
            table_selector: "table".to_string(),
            row_selector: "tr".to_string(),
            title_link_selector: ".titleline > a".to_string(),
            mode: ExtractMode::Text,
        }
    }
}

impl ScraperConfig {
    /// Parse a YAML document; missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScrapeError> {
        serde_yaml::from_str(yaml).map_err(|e| ScrapeError::Config(e.to_string()))
    }

    /// Load the YAML file at `path`.
    #[instrument(level = "info")]
    pub async fn load(path: &str) -> Result<Self, ScrapeError> {
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path, e)))?;
        let config = Self::from_yaml(&yaml)?;
        info!(path, "Loaded configuration");
        Ok(config)
    }

    /// Resolve the effective configuration for a run.
    pub async fn resolve(cli: &Cli) -> Result<Self, ScrapeError> {
        let base = match &cli.config {
            Some(path) => Self::load(path).await?,
            None => Self::default(),
        };
        let config = base.with_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    /// Apply the CLI flags that were actually given.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.url {
            self.url = url.clone();
        }
        if let Some(pages) = cli.pages {
            self.pages = pages;
        }
        if let Some(timeout) = cli.timeout_secs {
            self.timeout_secs = timeout;
        }
        if let Some(selector) = &cli.table_selector {
            self.table_selector = selector.clone();
        }
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.pages == 0 {
            return Err(ScrapeError::Config("pages must be at least 1".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ScrapeError::Config("timeout_secs must be at least 1".into()));
        }
        if self.concurrency == 0 {
            return Err(ScrapeError::Config("concurrency must be at least 1".into()));
        }
        url::Url::parse(&self.url)
            .map_err(|e| ScrapeError::Config(format!("url {}: {}", self.url, e)))?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
