//! Normalized rows handed to the presentation layer.

use super::DifficultyName;
use serde::{Deserialize, Serialize};

/// Placeholder shown instead of a score for charts never attempted.
pub const NO_SCORE: &str = "No score";

/// Status flags decoded from a result's bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlagData {
    pub cleared: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableEntry {
    pub id: u32,
    pub song_id: u32,
    pub score: String,
    pub difficulty: u8,
    /// Always the active difficulty tab, never the label stored on the result.
    pub difficulty_name: DifficultyName,
    pub flags: FlagData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}
