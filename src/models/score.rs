//! Played results, derived unplayed charts and the entry union over both.

use serde::{Deserialize, Serialize};

/// Chart identity: a song at a numeric difficulty level.
pub type ChartKey = (u32, u8);

/// Judgement breakdown published with every result. Passthrough only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Judgements {
    pub grade: u32,
    pub max_combo: u32,
    pub perfect1: u32,
    pub perfect2: u32,
    pub early: u32,
    pub late: u32,
    pub misses: u32,
    pub green: u32,
    pub yellow: u32,
    pub red: u32,
    pub steps: u32,
}

/// A recorded attempt by one player on one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedResult {
    pub id: u32,
    pub gamer_id: u32,
    #[serde(default)]
    pub song_chart_id: u32,
    pub song_id: u32,
    pub difficulty: u8,
    /// Label recorded by the score service; not guaranteed to agree with the tab it was loaded for.
    #[serde(default)]
    pub difficulty_name: String,
    pub score: u32,
    #[serde(default)]
    pub flags: u32,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub hex_color: Option<String>,
    #[serde(default)]
    pub picture_path: Option<String>,
    #[serde(flatten)]
    pub judgements: Judgements,
}

impl PlayedResult {
    /// Builds a result with empty display fields and no judgement breakdown.
    pub fn new(
        id: u32,
        gamer_id: u32,
        song_id: u32,
        difficulty: u8,
        score: u32,
        flags: u32,
    ) -> Self {
        Self {
            id,
            gamer_id,
            song_chart_id: 0,
            song_id,
            difficulty,
            difficulty_name: String::new(),
            score,
            flags,
            username: String::new(),
            country: String::new(),
            hex_color: None,
            picture_path: None,
            judgements: Judgements::default(),
        }
    }

    pub fn chart_key(&self) -> ChartKey {
        (self.song_id, self.difficulty)
    }
}

/// A chart the selected player never attempted, evidenced by someone else's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnplayedChart {
    /// Id of the other player's result this row was derived from.
    pub id: u32,
    pub song_id: u32,
    pub difficulty: u8,
    pub difficulty_name: String,
}

impl UnplayedChart {
    pub fn chart_key(&self) -> ChartKey {
        (self.song_id, self.difficulty)
    }
}

impl From<&PlayedResult> for UnplayedChart {
    fn from(result: &PlayedResult) -> Self {
        Self {
            id: result.id,
            song_id: result.song_id,
            difficulty: result.difficulty,
            difficulty_name: result.difficulty_name.clone(),
        }
    }
}

/// One row of the merged list, borrowed from either population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartEntry<'a> {
    Played(&'a PlayedResult),
    Unplayed(&'a UnplayedChart),
}

impl ChartEntry<'_> {
    pub fn id(&self) -> u32 {
        match self {
            ChartEntry::Played(result) => result.id,
            ChartEntry::Unplayed(chart) => chart.id,
        }
    }

    pub fn song_id(&self) -> u32 {
        match self {
            ChartEntry::Played(result) => result.song_id,
            ChartEntry::Unplayed(chart) => chart.song_id,
        }
    }

    pub fn difficulty(&self) -> u8 {
        match self {
            ChartEntry::Played(result) => result.difficulty,
            ChartEntry::Unplayed(chart) => chart.difficulty,
        }
    }

    /// Score used for filtering and sorting; unplayed charts count as 0.
    pub fn effective_score(&self) -> u32 {
        match self {
            ChartEntry::Played(result) => result.score,
            ChartEntry::Unplayed(_) => 0,
        }
    }

    /// Raw flag bits; unplayed charts carry none.
    pub fn flags(&self) -> u32 {
        match self {
            ChartEntry::Played(result) => result.flags,
            ChartEntry::Unplayed(_) => 0,
        }
    }

    pub fn is_played(&self) -> bool {
        matches!(self, ChartEntry::Played(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORE_JSON: &str = r#"{
        "id": 11, "gamer_id": 3, "song_chart_id": 90, "score": 91234, "grade": 2,
        "max_combo": 410, "perfect1": 300, "perfect2": 80, "early": 10, "late": 12,
        "misses": 3, "green": 1, "yellow": 2, "red": 0, "steps": 405,
        "country": "JP", "username": "rin", "hex_color": null, "picture_path": null,
        "song_id": 42, "difficulty": 12, "difficulty_name": "hard", "flags": 1
    }"#;

    #[test]
    fn decodes_score_service_record() {
        let result: PlayedResult = serde_json::from_str(SCORE_JSON).unwrap();
        assert_eq!(result.chart_key(), (42, 12));
        assert_eq!(result.username, "rin");
        assert_eq!(result.judgements.max_combo, 410);
        assert_eq!(result.hex_color, None);
    }

    #[test]
    fn unplayed_entry_synthesizes_zero_score_and_flags() {
        let chart = UnplayedChart {
            id: 5,
            song_id: 2,
            difficulty: 7,
            difficulty_name: "easy".into(),
        };
        let entry = ChartEntry::Unplayed(&chart);
        assert_eq!(entry.effective_score(), 0);
        assert_eq!(entry.flags(), 0);
        assert!(!entry.is_played());
        assert_eq!((entry.id(), entry.song_id(), entry.difficulty()), (5, 2, 7));
    }
}
