//! Filter and sort configuration for the score list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Highest score a chart can award.
pub const SCORE_MAX: u32 = 100_000;
pub const DIFFICULTY_MIN: u8 = 1;
pub const DIFFICULTY_MAX: u8 = 27;

/// Which population of charts is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayStatus {
    #[default]
    All,
    Played,
    Unplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearStatus {
    #[default]
    All,
    Cleared,
    Failed,
}

/// Sort key. Declaration order is the order offered in the sort selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Title,
    Score,
    Difficulty,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Title, SortKey::Score, SortKey::Difficulty];

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Score => "Score",
            SortKey::Difficulty => "Difficulty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Inclusive score bounds.
    pub score_range: [u32; 2],
    /// Inclusive difficulty level bounds.
    pub difficulty_range: [u8; 2],
    #[serde(alias = "charts")]
    pub play_status: PlayStatus,
    #[serde(alias = "cleared")]
    pub clear_status: ClearStatus,
    /// Selected tag labels; empty means no constraint, several mean any of them.
    pub tags: BTreeSet<String>,
    pub primary: SortKey,
    pub primary_asc: bool,
    pub secondary: SortKey,
    pub secondary_asc: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            score_range: [0, SCORE_MAX],
            difficulty_range: [DIFFICULTY_MIN, DIFFICULTY_MAX],
            play_status: PlayStatus::All,
            clear_status: ClearStatus::All,
            tags: BTreeSet::new(),
            primary: SortKey::Difficulty,
            primary_asc: true,
            secondary: SortKey::Title,
            secondary_asc: true,
        }
    }
}

impl FilterState {
    /// Returns true when any filter or sort setting differs from the reset value.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Changes the primary key, moving the secondary key off it if they would collide.
    pub fn set_primary(&mut self, key: SortKey) {
        if key == self.secondary
            && let Some(other) = SortKey::ALL.into_iter().find(|candidate| *candidate != key)
        {
            self.secondary = other;
        }
        self.primary = key;
    }

    /// Sets the secondary key unless it equals the primary one.
    pub fn set_secondary(&mut self, key: SortKey) -> bool {
        if key == self.primary {
            return false;
        }
        self.secondary = key;
        true
    }

    /// Keys selectable as secondary for the current primary key.
    pub fn secondary_options(&self) -> Vec<SortKey> {
        SortKey::ALL
            .into_iter()
            .filter(|key| *key != self.primary)
            .collect()
    }

    pub fn score_contains(&self, score: u32) -> bool {
        let [low, high] = self.score_range;
        low <= score && score <= high
    }

    pub fn difficulty_contains(&self, difficulty: u8) -> bool {
        let [low, high] = self.difficulty_range;
        low <= difficulty && difficulty <= high
    }
}
