//! Grouping of emotes by leading character.
//!
//! The README is sectioned by the first character of each file name. A
//! character in `[a-zA-Z:]` is its own group key, verbatim — there is no
//! case folding, so `Apple.png` and `apple.png` land in different sections.
//! Anything else (digits, punctuation, unicode) collapses into the single
//! fallback bucket keyed by [`FALLBACK_KEY`].
//!
//! Groups are kept as an explicit `(key, files)` sequence in first-encounter
//! order over the already-sorted input, so section order falls out of the
//! sort: the fallback bucket surfaces wherever its first file sorts to
//! (digits sort before letters in ASCII, so in practice it leads).

use crate::scan::ImageFile;

/// Group key for names whose first character is outside `[a-zA-Z:]`.
/// The token is the character class itself, escaped to survive Markdown.
pub const FALLBACK_KEY: &str = r"\[^a-zA-Z:\]";

/// Ordered listing: one `(key, files)` pair per section, in the order keys
/// were first seen. Built once per run and handed to the renderers.
pub type Listing<'a> = Vec<(String, Vec<&'a ImageFile>)>;

/// Derive the group key from a file's base name.
pub fn group_key(file_name: &str) -> String {
    match file_name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == ':' => c.to_string(),
        _ => FALLBACK_KEY.to_string(),
    }
}

/// Bucket `files` (assumed sorted) into the ordered listing.
///
/// Every file lands in exactly one group; within a group, input order is
/// preserved.
pub fn group_files(files: &[ImageFile]) -> Listing<'_> {
    let mut listing: Listing = Vec::new();
    for file in files {
        let key = group_key(&file.file_name);
        match listing.iter_mut().find(|(k, _)| *k == key) {
            Some((_, group)) => group.push(file),
            None => listing.push((key, vec![file])),
        }
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::image;

    #[test]
    fn uppercase_letter_is_its_own_key() {
        assert_eq!(group_key("Apple.png"), "A");
    }

    #[test]
    fn lowercase_letter_is_distinct_from_uppercase() {
        assert_eq!(group_key("apple.png"), "a");
        assert_ne!(group_key("apple.png"), group_key("Apple.png"));
    }

    #[test]
    fn digit_falls_back() {
        assert_eq!(group_key("3d.png"), FALLBACK_KEY);
    }

    #[test]
    fn colon_is_kept_verbatim() {
        assert_eq!(group_key(":wave:.gif"), ":");
    }

    #[test]
    fn unicode_falls_back() {
        assert_eq!(group_key("ümlaut.png"), FALLBACK_KEY);
    }

    #[test]
    fn every_file_lands_in_exactly_one_group() {
        let files = [
            image("emoji/1up.png"),
            image("emoji/Ant.png"),
            image("emoji/Bee.jpg"),
            image("emoji/ant.gif"),
        ];
        let listing = group_files(&files);
        let total: usize = listing.iter().map(|(_, g)| g.len()).sum();
        assert_eq!(total, files.len());
    }

    #[test]
    fn groups_appear_in_first_encounter_order() {
        // Sorted input: 1up, Ant, Bee, ant — so the fallback bucket leads.
        let files = [
            image("emoji/1up.png"),
            image("emoji/Ant.png"),
            image("emoji/Bee.jpg"),
            image("emoji/ant.gif"),
        ];
        let listing = group_files(&files);
        let keys: Vec<&str> = listing.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec![FALLBACK_KEY, "A", "B", "a"]);
    }

    #[test]
    fn files_within_a_group_keep_input_order() {
        let files = [
            image("emoji/Bear.png"),
            image("emoji/Bee.jpg"),
            image("emoji/Bird.gif"),
        ];
        let listing = group_files(&files);
        assert_eq!(listing.len(), 1);
        let names: Vec<&str> = listing[0].1.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Bear", "Bee", "Bird"]);
    }

    #[test]
    fn fallback_bucket_collects_all_non_alphabetic_leads() {
        let files = [
            image("emoji/100.png"),
            image("emoji/8ball.png"),
            image("emoji/_blank.png"),
        ];
        let listing = group_files(&files);
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].0, FALLBACK_KEY);
        assert_eq!(listing[0].1.len(), 3);
    }
}
