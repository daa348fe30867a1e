//! Shared test utilities for the emotes test suite.
//!
//! Fixture builders for temp emote directories plus in-memory [`ImageFile`]
//! constructors, so rendering tests never need a real filesystem.

use std::path::PathBuf;
use tempfile::TempDir;

use crate::scan::ImageFile;
use chrono::{DateTime, TimeZone, Utc};

/// Create a temp directory containing the named files.
///
/// Each file's content is its own name, so no two files are accidental
/// content duplicates.
pub fn emote_dir(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        std::fs::write(tmp.path().join(name), name.as_bytes()).unwrap();
    }
    tmp
}

/// Create a temp directory with explicit file contents, for dedup tests.
pub fn emote_dir_with_contents(entries: &[(&str, &[u8])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, content) in entries {
        std::fs::write(tmp.path().join(name), content).unwrap();
    }
    tmp
}

/// Build an [`ImageFile`] from a path string, no filesystem involved.
pub fn image(path: &str) -> ImageFile {
    ImageFile::new(PathBuf::from(path))
}

/// Build several [`ImageFile`]s, preserving the given order.
pub fn images(paths: &[&str]) -> Vec<ImageFile> {
    paths.iter().map(|p| image(p)).collect()
}

/// Fixed timestamp for rendering tests: 2026-01-02 03:04:05 UTC.
pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
}
