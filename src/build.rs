//! Build orchestration: scan, render, write.
//!
//! Ties the pipeline together so the CLI is a thin shell. The scan runs to
//! completion before the first write, which is what makes the empty-input
//! abort safe: a previously generated listing stays byte-identical when a
//! build run fails to find any images.

use crate::scan::{self, ImageFile, ScanError};
use crate::{html, readme};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Scan `dir`, render both documents, and overwrite `readme_path` and
/// `index_path`. Returns the scanned files for the summary output.
pub fn build(
    dir: &Path,
    readme_path: &Path,
    index_path: &Path,
    generated_at: DateTime<Utc>,
) -> Result<Vec<ImageFile>, BuildError> {
    let files = scan::scan(dir)?;

    fs::write(readme_path, readme::render(&files, generated_at))?;
    fs::write(index_path, html::render(&files))?;

    Ok(files)
}
