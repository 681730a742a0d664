//! Hacker News listing scraper.
//!
//! The front page is one table whose rows repeat as
//! `tr.athing` (rank, vote arrow, title link), `tr` (subtext) and
//! `tr.spacer`. Rows are copied out of the parse tree into owned
//! [`HtmlRow`]s so the extractor never touches `scraper` types.

use futures::stream::{self, StreamExt, TryStreamExt};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::extractor::{self, ExtractMode, RowNode};
use crate::models::Record;
use crate::scrapers::DocumentSource;

/// One table row, detached from the document it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRow {
    text: String,
    href: Option<String>,
    link_text: Option<String>,
    position: usize,
}

impl RowNode for HtmlRow {
    fn text(&self) -> &str {
        &self.text
    }

    fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }

    fn link_text(&self) -> Option<&str> {
        self.link_text.as_deref()
    }

    fn position(&self) -> usize {
        self.position
    }
}

/// Compiled CSS selectors for locating the table, its rows and title links.
#[derive(Debug)]
pub struct RowSelectors {
    table: Selector,
    row: Selector,
    title_link: Selector,
    any_link: Selector,
}

impl RowSelectors {
    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(RowSelectors {
            table: compile(&config.table_selector)?,
            row: compile(&config.row_selector)?,
            title_link: compile(&config.title_link_selector)?,
            any_link: compile("a[href]")?,
        })
    }
}

fn compile(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Config(format!("selector {:?}: {}", css, e)))
}

/// Collapse an element's text nodes into one whitespace-normalized string.
fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn row_from_element(
    element: ElementRef<'_>,
    position: usize,
    selectors: &RowSelectors,
    base: Option<&Url>,
) -> HtmlRow {
    let anchor = element
        .select(&selectors.title_link)
        .find(|a| a.value().attr("href").is_some())
        .or_else(|| element.select(&selectors.any_link).next());

    let href = anchor.and_then(|a| a.value().attr("href")).map(|href| {
        base.and_then(|b| b.join(href).ok())
            .map(|u| u.to_string())
            .unwrap_or_else(|| href.to_string())
    });
    let link_text = anchor.map(|a| element_text(&a)).filter(|t| !t.is_empty());

    HtmlRow {
        text: element_text(&element),
        href,
        link_text,
        position,
    }
}

/// Parse a document into the rows of its listing table.
///
/// Fails with [`ScrapeError::Parse`] when no table matches; a table without
/// rows yields an empty vector.
#[instrument(level = "info", skip_all, fields(bytes = html.len()))]
pub fn parse_document(
    html: &str,
    base_url: &str,
    selectors: &RowSelectors,
) -> Result<Vec<HtmlRow>, ScrapeError> {
    let document = Html::parse_document(html);
    let base = Url::parse(base_url).ok();

    let table = document
        .select(&selectors.table)
        .next()
        .ok_or_else(|| ScrapeError::Parse(format!("no listing table in {}", base_url)))?;
    debug!("Found news table");

    let rows: Vec<HtmlRow> = table
        .select(&selectors.row)
        .enumerate()
        .map(|(position, tr)| row_from_element(tr, position, selectors, base.as_ref()))
        .collect();

    info!(count = rows.len(), "Found listing rows");
    Ok(rows)
}

/// URL of listing page `page` (1-based). Page 1 is the base URL unchanged;
/// later pages replace any `p` already in the query.
pub fn page_url(base_url: &str, page: usize) -> Result<String, ScrapeError> {
    let mut url =
        Url::parse(base_url).map_err(|e| ScrapeError::Config(format!("url {}: {}", base_url, e)))?;
    if page > 1 {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "p")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("p", &page.to_string());
    }
    Ok(url.to_string())
}

/// Fetch, parse and extract every configured listing page.
///
/// Pages are fetched concurrently but extracted in page order. Groups never
/// straddle a page boundary, and indices run on across pages.
#[instrument(level = "info", skip_all, fields(url = %config.url, pages = config.pages))]
pub async fn scrape_listing<S: DocumentSource>(
    source: &S,
    config: &ScraperConfig,
) -> Result<Vec<Record>, ScrapeError> {
    let selectors = RowSelectors::from_config(config)?;
    let urls = (1..=config.pages)
        .map(|page| page_url(&config.url, page))
        .collect::<Result<Vec<_>, _>>()?;

    let pages: Vec<Vec<HtmlRow>> = stream::iter(urls)
        .map(|url| {
            let selectors = &selectors;
            async move {
                let html = source.fetch(&url).await?;
                parse_document(&html, &url, selectors)
            }
        })
        .buffered(config.concurrency)
        .try_collect()
        .await?;

    let records = renumber(pages.iter().map(|rows| extract_page(rows, config.mode)));
    info!(count = records.len(), "Extracted records");
    Ok(records)
}

fn extract_page(rows: &[HtmlRow], mode: ExtractMode) -> Vec<Record> {
    extractor::extract_with(Some(rows), mode)
}

fn renumber(pages: impl Iterator<Item = Vec<Record>>) -> Vec<Record> {
    pages
        .flatten()
        .enumerate()
        .map(|(index, record)| Record { index, ..record })
        .collect()
}
