//! Song tag index.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Static mapping from tag label to the songs carrying it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagIndex {
    tags: BTreeMap<String, BTreeSet<u32>>,
}

impl TagIndex {
    pub fn new(tags: BTreeMap<String, BTreeSet<u32>>) -> Self {
        Self { tags }
    }

    /// Labels offered in the tag selector, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn songs(&self, label: &str) -> Option<&BTreeSet<u32>> {
        self.tags.get(label)
    }

    /// True when nothing is selected or any selected label covers the song.
    pub fn has_any_tag(&self, selected: &BTreeSet<String>, song_id: u32) -> bool {
        if selected.is_empty() {
            return true;
        }
        selected
            .iter()
            .any(|label| self.songs(label).is_some_and(|songs| songs.contains(&song_id)))
    }
}

impl<L: Into<String>, S: IntoIterator<Item = u32>> FromIterator<(L, S)> for TagIndex {
    fn from_iter<I: IntoIterator<Item = (L, S)>>(iter: I) -> Self {
        Self {
            tags: iter
                .into_iter()
                .map(|(label, songs)| (label.into(), songs.into_iter().collect()))
                .collect(),
        }
    }
}
