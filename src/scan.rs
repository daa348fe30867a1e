//! Emote directory enumeration.
//!
//! Stage 1 of the listing pipeline. Lists the image files directly under the
//! emote directory — no recursion, the collection is flat — and produces the
//! sorted [`ImageFile`] sequence every other stage consumes.
//!
//! ## Matching
//!
//! A file counts as an emote when its extension, lowercased, is one of
//! `png`, `gif`, `jpg`, `jpeg`. Subdirectories are skipped, and so are
//! files with no extension at all (they cannot be images we can embed).
//!
//! ## Ordering
//!
//! The result is sorted lexicographically by path. Grouping and rendering
//! both rely on this: within a section of the README, entries appear in
//! sorted order, and section order itself is derived from first encounter
//! over the sorted list.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No images to continue with in {0}")]
    NoImages(PathBuf),
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "gif", "jpg", "jpeg"];

/// Bytes escaped when a path is emitted as a URL: everything except
/// unreserved characters and the path separator.
const URL_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A single emote image discovered under the source directory.
///
/// All fields are derived from the path once at scan time:
/// - `path`: the full path as scanned, e.g. `emoji/Ant.png`
/// - `file_name`: base name, e.g. `Ant.png`
/// - `name`: display name without extension, e.g. `Ant`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    pub name: String,
}

impl ImageFile {
    pub fn new(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        ImageFile {
            path,
            file_name,
            name,
        }
    }

    /// The path percent-encoded for use in `src` attributes. Emote names
    /// may contain `%`, `?`, `:` and friends, which are not valid raw in a
    /// URL even though they are fine on disk.
    pub fn url(&self) -> String {
        utf8_percent_encode(&self.path.to_string_lossy(), URL_ESCAPE).to_string()
    }
}

/// Enumerate emote images directly under `dir`, sorted by path.
///
/// The empty result is the one fatal condition of the whole pipeline:
/// nothing has been written yet when it fires, so aborting here leaves any
/// previously generated listing untouched.
pub fn scan(dir: &Path) -> Result<Vec<ImageFile>, ScanError> {
    let mut files: Vec<ImageFile> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_image(p))
        .map(ImageFile::new)
        .collect();

    files.sort_by(|a, b| a.path.cmp(&b.path));

    if files.is_empty() {
        return Err(ScanError::NoImages(dir.to_path_buf()));
    }
    Ok(files)
}

fn is_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}
