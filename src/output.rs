//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Build
//!
//! ```text
//! Groups
//! 001 \[^a-zA-Z:\] (1 emotes)
//! 002 A (1 emotes)
//!
//! Generated README.md with 4 emotes
//! Generated index.html with 4 emotes
//! ```
//!
//! ## Dedup
//!
//! ```text
//! Duplicate group (3 files):
//!     KEEP: a.png
//!     DELETE: b.png
//!     DELETE: c.png
//!
//! Files scanned: 4
//! Duplicate groups: 1
//! Files removed: 2
//! ```

use crate::dedup::DedupReport;
use crate::listing::Listing;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the build summary: group inventory plus written outputs.
pub fn format_build_output(listing: &Listing<'_>, total: usize) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Groups".to_string());
    for (i, (key, group)) in listing.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} emotes)",
            format_index(i + 1),
            key,
            group.len()
        ));
    }

    lines.push(String::new());
    lines.push(format!("Generated README.md with {} emotes", total));
    lines.push(format!("Generated index.html with {} emotes", total));
    lines
}

pub fn print_build_output(listing: &Listing<'_>, total: usize) {
    for line in format_build_output(listing, total) {
        println!("{}", line);
    }
}

/// Format the dedup report: one block per duplicate group, then totals.
pub fn format_dedup_report(report: &DedupReport) -> Vec<String> {
    let mut lines = Vec::new();

    if report.groups.is_empty() {
        lines.push("No duplicates found.".to_string());
        return lines;
    }

    for group in &report.groups {
        lines.push(format!(
            "Duplicate group ({} files):",
            group.remove.len() + 1
        ));
        lines.push(format!("    KEEP: {}", group.keep.file_name));
        for file in &group.remove {
            lines.push(format!("    DELETE: {}", file.file_name));
        }
    }

    lines.push(String::new());
    lines.push(format!("Files scanned: {}", report.scanned));
    lines.push(format!("Duplicate groups: {}", report.groups.len()));
    lines.push(format!("Files removed: {}", report.removed));
    lines
}

pub fn print_dedup_report(report: &DedupReport) {
    for line in format_dedup_report(report) {
        println!("{}", line);
    }
}
