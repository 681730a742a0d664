//! Paired-row record extraction for Hacker News style listing tables.
//!
//! The binary in `main.rs` wires these modules into a fetch → parse →
//! extract → sink pipeline; each step is usable on its own.

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod utils;

pub use error::ScrapeError;
pub use extractor::{ExtractMode, GROUP_PERIOD, Records, RowNode, extract, extract_with, records};
pub use models::{MetaSummary, Record};
