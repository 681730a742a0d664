//! Utility functions for logging, output naming, and file system checks.

use chrono::{DateTime, Local};
use std::fs as stdfs;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

use crate::error::ScrapeError;

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to a char
/// boundary) with `"…(+N bytes)"` appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Output file name for a run started at `now`, e.g. `yc_news_20250506_203000.csv`.
pub fn timestamped_filename(now: DateTime<Local>, extension: &str) -> String {
    format!("yc_news_{}.{}", now.format("%Y%m%d_%H%M%S"), extension)
}

/// Full output path inside `dir`.
pub fn output_path(dir: &str, now: DateTime<Local>, extension: &str) -> PathBuf {
    Path::new(dir).join(timestamped_filename(now, extension))
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), ScrapeError> {
    fs::create_dir_all(path).await?;
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = Path::new(path).join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        // 'é' is two bytes; cutting at 1 must back off to 0.
        assert_eq!(truncate_for_log("éé", 1), "…(+4 bytes)");
    }

    #[test]
    fn test_timestamped_filename() {
        let now = Local.with_ymd_and_hms(2025, 5, 6, 20, 30, 0).unwrap();
        assert_eq!(timestamped_filename(now, "csv"), "yc_news_20250506_203000.csv");
        assert_eq!(
            output_path("out", now, "json"),
            Path::new("out").join("yc_news_20250506_203000.json")
        );
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing() {
        let dir = std::env::temp_dir().join(format!("yc_news_list_probe_{}", std::process::id()));
        let path = dir.join("nested");
        let path_str = path.to_str().unwrap();

        ensure_writable_dir(path_str).await.unwrap();
        assert!(path.is_dir());
        assert!(!path.join("..__probe_write__").exists());

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
