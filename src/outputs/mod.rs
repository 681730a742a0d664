//! Sinks for extracted records.
//!
//! # Submodules
//!
//! - [`console`]: prints `title<TAB>-<TAB>meta` lines to stdout
//! - [`csv`]: writes a two-column `header,meta` file
//! - [`json`]: writes records with their parsed meta summary
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── yc_news_20250506_203000.csv
//! └── yc_news_20250506_203000.json
//! ```

pub mod console;
pub mod csv;
pub mod json;
