//! Command-line interface definitions.
//!
//! Flags left unset fall back to the config file, then to built-in defaults
//! (see [`crate::config::ScraperConfig`]).

use clap::Parser;

use crate::extractor::ExtractMode;

/// Command-line arguments for the listing scraper.
///
/// # Examples
///
/// ```sh
/// # Print the front page
/// yc_news_list
///
/// # First three pages, saved as CSV and JSON
/// yc_news_list --pages 3 --csv --json -o ./out
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Listing page to scrape
    #[arg(short, long, env = "YC_NEWS_URL")]
    pub url: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of listing pages to fetch
    #[arg(short, long)]
    pub pages: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// CSS selector of the listing table
    #[arg(long)]
    pub table_selector: Option<String>,

    /// How titles are read from header rows
    #[arg(long, value_enum)]
    pub mode: Option<ExtractMode>,

    /// Write records to a timestamped CSV file
    #[arg(long)]
    pub csv: bool,

    /// Write records to a timestamped JSON file
    #[arg(long)]
    pub json: bool,

    /// Output directory for CSV/JSON files
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Do not print records to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["yc_news_list"]);
        assert_eq!(cli.pages, None);
        assert_eq!(cli.output_dir, ".");
        assert!(!cli.csv);
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "yc_news_list",
            "-u",
            "https://example.com/",
            "-p",
            "2",
            "-o",
            "/tmp/out",
            "-q",
        ]);

        assert_eq!(cli.url.as_deref(), Some("https://example.com/"));
        assert_eq!(cli.pages, Some(2));
        assert_eq!(cli.output_dir, "/tmp/out");
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_mode_value() {
        let cli = Cli::parse_from(["yc_news_list", "--mode", "link-aware", "--csv"]);
        assert_eq!(cli.mode, Some(ExtractMode::LinkAware));
        assert!(cli.csv);
    }
}
