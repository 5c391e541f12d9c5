//! Payload shapes of the score service and the parameters used to request them.
//!
//! Fetching is done by the host; these types only describe what goes over the wire.

use super::{DifficultyName, PlayedResult, Song};
use serde::{Deserialize, Serialize};

/// A player as returned by the user search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(default)]
    pub country: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub players: Vec<User>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongsResponse {
    #[serde(default)]
    pub songs: Vec<Song>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoresResponse {
    #[serde(default)]
    pub scores: Vec<PlayedResult>,
}

/// Parameters of a high score request for one difficulty tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreQuery {
    pub difficulty: DifficultyName,
    pub user_id: Option<u32>,
}

impl ScoreQuery {
    /// Scores of the selected player. No player selected means everyone.
    pub fn for_player(difficulty: DifficultyName, user: Option<&User>) -> Self {
        Self {
            difficulty,
            user_id: user.map(|user| user.id),
        }
    }

    /// Scores of every player, used to discover charts the selected player lacks.
    pub fn for_everyone(difficulty: DifficultyName) -> Self {
        Self {
            difficulty,
            user_id: None,
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("difficulty", self.difficulty.as_str().to_string())];
        if let Some(user_id) = self.user_id {
            params.push(("user_id", user_id.to_string()));
        }
        params
    }

    /// `key=value` pairs joined with `&`. Values are digits or lowercase ASCII.
    pub fn query_string(&self) -> String {
        self.params()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}
