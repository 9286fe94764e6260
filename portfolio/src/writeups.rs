use std::{collections::HashSet, sync::LazyLock};

use crate::content::{WRITEUPS, Writeup};

pub const ALL_TAG: &str = "All";

// "All" followed by every distinct tag in first-seen order
pub fn derive_tags<'a>(writeups: &'a [Writeup]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut tags = vec![ALL_TAG];

    for tag in writeups.iter().flat_map(|w| w.tags.iter().copied()) {
        // a writeup literally tagged "All" would otherwise produce a second sentinel
        if tag != ALL_TAG && seen.insert(tag) {
            tags.push(tag);
        }
    }

    tags
}

// the static list never changes, so its tag set is computed once
pub static WRITEUP_TAGS: LazyLock<Vec<&'static str>> = LazyLock::new(|| derive_tags(WRITEUPS));

// writeup tag filter
//
// the active tag is always a member of the derived set; selecting anything else is refused
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagFilter<'a> {
    tags: Vec<&'a str>,
    active: &'a str,
}

impl<'a> TagFilter<'a> {
    pub fn new(tags: Vec<&'a str>) -> Self {
        TagFilter {
            tags,
            active: ALL_TAG,
        }
    }

    pub fn tags(&self) -> &[&'a str] {
        &self.tags
    }

    pub fn active(&self) -> &'a str {
        self.active
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active == tag
    }

    pub fn select(&mut self, tag: &str) -> bool {
        match self.tags.iter().find(|t| **t == tag) {
            Some(t) => {
                self.active = *t;
                true
            }
            None => false,
        }
    }

    pub fn filter<'w>(&self, writeups: &'w [Writeup]) -> Vec<&'w Writeup> {
        writeups
            .iter()
            .filter(|w| self.active == ALL_TAG || w.tags.iter().any(|t| *t == self.active))
            .collect()
    }
}

impl Default for TagFilter<'static> {
    fn default() -> Self {
        TagFilter::new(WRITEUP_TAGS.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writeup(id: u32, tags: &'static [&'static str]) -> Writeup {
        Writeup {
            id,
            title: "",
            description: "",
            date: "",
            read_time: "",
            image: "",
            tags,
            url: "#",
        }
    }

    #[test]
    fn active_tag_selects_matching_writeups() {
        let writeups = [
            writeup(1, &["CTF", "Cryptography"]),
            writeup(2, &["Malware Analysis"]),
        ];
        let mut filter = TagFilter::new(derive_tags(&writeups));

        assert!(filter.select("CTF"));
        let ids: Vec<_> = filter.filter(&writeups).iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn all_returns_everything_in_order() {
        let filter = TagFilter::default();
        let shown = filter.filter(WRITEUPS);
        assert_eq!(shown.len(), WRITEUPS.len());
        assert!(shown.iter().zip(WRITEUPS).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn membership_matches_filter_for_every_tag() {
        let mut filter = TagFilter::default();
        for tag in WRITEUP_TAGS.iter().skip(1) {
            assert!(filter.select(tag));
            let shown: Vec<u32> = filter.filter(WRITEUPS).iter().map(|w| w.id).collect();
            for w in WRITEUPS {
                assert_eq!(shown.contains(&w.id), w.tags.contains(tag), "{tag}");
            }
        }
    }

    #[test]
    fn derived_tags_are_unique_with_all_first() {
        let writeups = [
            writeup(1, &["CTF", "Web"]),
            writeup(2, &["Web", "All", "CTF", "OSINT"]),
        ];
        let tags = derive_tags(&writeups);
        assert_eq!(tags, vec!["All", "CTF", "Web", "OSINT"]);
        assert_eq!(tags.iter().filter(|t| **t == ALL_TAG).count(), 1);
    }

    #[test]
    fn unknown_tag_is_refused() {
        let mut filter = TagFilter::default();
        filter.select("CTF");
        assert!(!filter.select("Gardening"));
        assert_eq!(filter.active(), "CTF");
    }

    #[test]
    fn cached_tags_match_derivation() {
        assert_eq!(*WRITEUP_TAGS, derive_tags(WRITEUPS));
    }
}
