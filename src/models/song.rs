//! Song catalog entries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A song of the catalog. Media fields are opaque references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: u32,
    #[serde(default)]
    pub game_song_id: u32,
    pub title: String,
    #[serde(default)]
    pub bpm: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub cover_thumb: String,
    #[serde(default)]
    pub music: String,
}

impl Song {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            game_song_id: id,
            title: title.into(),
            bpm: String::new(),
            release_date: String::new(),
            cover: String::new(),
            cover_thumb: String::new(),
            music: String::new(),
        }
    }
}

/// Complete song catalog keyed by song id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongCatalog {
    songs: HashMap<u32, Song>,
}

impl SongCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, song: Song) {
        self.songs.insert(song.id, song);
    }

    pub fn get(&self, song_id: u32) -> Option<&Song> {
        self.songs.get(&song_id)
    }

    pub fn title(&self, song_id: u32) -> Option<&str> {
        self.get(song_id).map(|song| song.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl From<Vec<Song>> for SongCatalog {
    fn from(songs: Vec<Song>) -> Self {
        songs.into_iter().collect()
    }
}

impl FromIterator<Song> for SongCatalog {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        Self {
            songs: iter.into_iter().map(|song| (song.id, song)).collect(),
        }
    }
}
