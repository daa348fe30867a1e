//! README rendering.
//!
//! Produces the Markdown listing: a title, a count-and-timestamp line, a
//! markdownlint directive (the body is raw HTML, MD033 would fire on every
//! line), then one section per group key. Each section holds rows of five
//! bordered cells, image on top, name underneath in a `<kbd>` chip.
//!
//! The HTML fragments are built with [maud](https://maud.lambda.xyz/), the
//! Markdown scaffolding around them is plain string assembly. Rendering is
//! pure — the caller supplies the timestamp and writes the result — so tests
//! can pin the clock and compare documents structurally.

use crate::listing::{self, Listing};
use crate::scan::ImageFile;
use chrono::{DateTime, SecondsFormat, Utc};
use maud::{Markup, html};

/// Entries per rendered row.
pub const PER_ROW: usize = 5;

/// Render the complete README document for `files` (pre-sorted by scan).
pub fn render(files: &[ImageFile], generated_at: DateTime<Utc>) -> String {
    let listing = listing::group_files(files);
    render_listing(&listing, files.len(), generated_at)
}

fn render_listing(listing: &Listing<'_>, total: usize, generated_at: DateTime<Utc>) -> String {
    let mut doc = String::new();
    doc.push_str("# Emotes\n\n");
    doc.push_str(&format!(
        "{} emotes, generated {}\n\n",
        total,
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    doc.push_str("<!-- markdownlint-disable MD033 -->\n\n");

    for (key, group) in listing {
        doc.push_str(&format!("## {key}\n\n"));
        doc.push_str(&render_group(group).into_string());
        doc.push_str("\n\n");
    }

    doc
}

/// One section body: files chunked into rows of [`PER_ROW`].
fn render_group(group: &[&ImageFile]) -> Markup {
    // Cell width derived from PER_ROW; the grid template below pins the
    // column count at five on its own, so this percentage carries no layout
    // weight. Kept to match the original output.
    let cell_width = 100 / PER_ROW;
    html! {
        div {
            @for row in group.chunks(PER_ROW) {
                div style="display: grid; grid-template-columns: repeat(5, 1fr); gap: 8px;" {
                    @for file in row {
                        (render_entry(file, cell_width))
                    }
                }
            }
        }
    }
}

fn render_entry(file: &ImageFile, cell_width: usize) -> Markup {
    let path = file.path.display().to_string();
    let cell_style = format!(
        "border: 1px solid #d0d7de; border-radius: 6px; padding: 8px; \
         text-align: center; width: {cell_width}%;"
    );
    html! {
        div style=(cell_style) {
            img src=(file.url()) alt=(path) width="32";
            br;
            kbd style="display: inline-block; max-width: 96px; overflow-x: auto;" {
                (file.name)
            }
        }
    }
}
