//! Searchable HTML index rendering.
//!
//! The browser-facing counterpart of [`crate::readme`]: a single
//! `index.html` with every emote in an alphabetical grid and a client-side
//! search box. Grouping here differs from the README on purpose — the index
//! folds case (`Apple` and `apple` share a section) and buckets everything
//! outside `[a-z]` under `#`, shown as "0-9 / Special" at the top.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/); the stylesheet
//! and the ~25 lines of vanilla search JavaScript are embedded at compile
//! time, so the output is one self-contained file.

use crate::scan::ImageFile;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/search.js");

/// Section key for names not starting with an ASCII letter.
const SPECIAL_KEY: &str = "#";

/// Render the complete `index.html` document for `files`.
pub fn render(files: &[ImageFile]) -> String {
    let sections = group_for_index(files);

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Emotes" }
                style { (PreEscaped(CSS)) }
            }
            body {
                h1 {
                    a href="https://github.com/ivuorinen/emoji" { "ivuorinen/emoji" }
                }
                input type="text" id="search" placeholder="Search emotes..." autofocus;
                div id="count" { (files.len()) " emotes" }
                div id="content" {
                    @for (key, group) in &sections {
                        (render_section(key, group))
                    }
                }
                script { (PreEscaped(JS)) }
            }
        }
    };

    markup.into_string()
}

/// Case-folded grouping for the index, `#` section first, letters sorted.
fn group_for_index(files: &[ImageFile]) -> Vec<(String, Vec<&ImageFile>)> {
    let mut sections: Vec<(String, Vec<&ImageFile>)> = Vec::new();
    for file in files {
        let key = index_key(&file.file_name);
        match sections.iter_mut().find(|(k, _)| *k == key) {
            Some((_, group)) => group.push(file),
            None => sections.push((key, vec![file])),
        }
    }
    sections.sort_by(|(a, _), (b, _)| (a != SPECIAL_KEY, a).cmp(&(b != SPECIAL_KEY, b)));
    sections
}

fn index_key(file_name: &str) -> String {
    match file_name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_lowercase().to_string(),
        _ => SPECIAL_KEY.to_string(),
    }
}

fn section_heading(key: &str) -> String {
    if key == SPECIAL_KEY {
        "0-9 / Special".to_string()
    } else {
        key.to_uppercase()
    }
}

fn render_section(key: &str, group: &[&ImageFile]) -> Markup {
    html! {
        section data-group=(key) {
            h2 { (section_heading(key)) }
            div.grid {
                @for file in group {
                    div.emote data-keyword=(file.name) {
                        img src=(file.url())
                            alt=(file.name)
                            title=(format!(":{}:", file.name));
                    }
                }
            }
        }
    }
}
