//! Duplicate emote removal.
//!
//! The collection accumulates re-uploads of the same image under different
//! names. This pass hashes every emote's contents with SHA-256, groups files
//! by digest, and for each group keeps the first file in case-insensitive
//! name order, deleting the rest.
//!
//! Detection ([`find_duplicates`]) and deletion ([`dedup`]) are separate so
//! tests can assert on the planned groups without touching the filesystem
//! twice. [`run`] is the CLI entry point: scan plus dedup, where an
//! image-free directory is a no-op rather than an error.

use crate::scan::{self, ImageFile, ScanError};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DedupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One set of byte-identical files: the file kept and the files removed.
#[derive(Debug)]
pub struct DuplicateGroup {
    pub keep: ImageFile,
    pub remove: Vec<ImageFile>,
}

/// Outcome of a dedup run.
#[derive(Debug)]
pub struct DedupReport {
    pub scanned: usize,
    pub groups: Vec<DuplicateGroup>,
    pub removed: usize,
}

/// SHA-256 of a file's contents as a hex string.
fn hash_file(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{:x}", digest))
}

/// Group `files` by content hash and plan removals.
///
/// Only groups with more than one member are returned. Within a group the
/// kept file is the first in case-insensitive name order; group order
/// follows the kept file's name so output is stable run to run.
pub fn find_duplicates(files: &[ImageFile]) -> Result<Vec<DuplicateGroup>, DedupError> {
    let mut by_hash: HashMap<String, Vec<&ImageFile>> = HashMap::new();
    for file in files {
        let digest = hash_file(&file.path)?;
        by_hash.entry(digest).or_default().push(file);
    }

    let mut groups: Vec<DuplicateGroup> = by_hash
        .into_values()
        .filter(|members| members.len() > 1)
        .map(|mut members| {
            members.sort_by_key(|f| f.file_name.to_lowercase());
            let keep = members[0].clone();
            let remove = members[1..].iter().map(|f| (*f).clone()).collect();
            DuplicateGroup { keep, remove }
        })
        .collect();

    groups.sort_by(|a, b| a.keep.file_name.cmp(&b.keep.file_name));
    Ok(groups)
}

/// Scan `dir` and dedup its contents.
///
/// Unlike the listing build, an empty directory is not an error here:
/// there is nothing to deduplicate, so the run is a no-op reported as
/// `Ok(None)`.
pub fn run(dir: &Path) -> Result<Option<DedupReport>, DedupError> {
    let files = match scan::scan(dir) {
        Ok(files) => files,
        Err(ScanError::NoImages(_)) => return Ok(None),
        Err(ScanError::Io(e)) => return Err(DedupError::Io(e)),
    };
    dedup(&files).map(Some)
}

/// Find and delete duplicates among `files`.
pub fn dedup(files: &[ImageFile]) -> Result<DedupReport, DedupError> {
    let groups = find_duplicates(files)?;

    let mut removed = 0;
    for group in &groups {
        for file in &group.remove {
            fs::remove_file(&file.path)?;
            removed += 1;
        }
    }

    Ok(DedupReport {
        scanned: files.len(),
        groups,
        removed,
    })
}
