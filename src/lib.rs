//! # Emotes
//!
//! Listing generator and maintenance tool for a custom emote image
//! collection. The filesystem is the data source: every image directly under
//! `emoji/` is an emote, its filename is its name, and the generated listing
//! is committed alongside the images.
//!
//! # Architecture: One Linear Pass
//!
//! A build run is a single synchronous pipeline:
//!
//! ```text
//! emoji/  →  sorted file list  →  grouping  →  README.md + index.html
//! ```
//!
//! No intermediate state survives a run. The only fatal condition is an
//! empty scan, which aborts before anything is written, so a bad invocation
//! never clobbers a previously generated listing.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Enumerates image files under the emote directory, sorted |
//! | [`build`] | Orchestrates a build run: scan, render, write outputs |
//! | [`listing`] | Groups files by leading character into ordered sections |
//! | [`readme`] | Renders the Markdown listing (grid of images and labels) |
//! | [`html`] | Renders the searchable `index.html` companion page |
//! | [`dedup`] | Removes byte-identical duplicate images by content hash |
//! | [`output`] | CLI output formatting — pure `format_*`, thin `print_*` |
//!
//! # Design Decisions
//!
//! ## Two Grouping Rules, Not One
//!
//! The README keys sections by the literal first character (case-sensitive,
//! `:` allowed, everything else in one fallback bucket); the HTML index
//! folds case and buckets non-letters under `#`. The README rule mirrors how
//! chat clients sort custom emote names; the index rule reads better in a
//! browser. Both live next to their renderer rather than being unified.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): compile-time
//! checked, auto-escaped, no template files to ship. The README embeds raw
//! HTML grids inside Markdown, so its renderer mixes Maud fragments with
//! plain string assembly.
//!
//! ## Fixed Paths
//!
//! Source and output paths are constants. The tool runs from the repository
//! root of the emote collection; there is nothing to configure.

pub mod build;
pub mod dedup;
pub mod html;
pub mod listing;
pub mod output;
pub mod readme;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;

/// Source directory holding the emote images.
pub const EMOJI_DIR: &str = "emoji";
/// Markdown listing output path.
pub const README_PATH: &str = "README.md";
/// HTML index output path.
pub const INDEX_PATH: &str = "index.html";
