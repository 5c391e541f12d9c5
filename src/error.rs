//! Error types surfaced by the engine and its config layer.

use std::path::PathBuf;
use thiserror::Error;

/// A chart refers to a song the catalog does not contain.
///
/// Aborts the ranking pass; callers are expected to show a loading or empty
/// state instead of a partially sorted list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("song {song_id} referenced by entry {entry_id} is missing from the catalog")]
    MissingSong { song_id: u32, entry_id: u32 },
    #[error("title collation data is unavailable: {0}")]
    Collation(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
