//! Difficulty tabs used to select which score sets are loaded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named difficulty of a chart, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyName {
    #[default]
    Beginner,
    Easy,
    Hard,
    Wild,
    Dual,
    Full,
}

impl DifficultyName {
    pub const ALL: [DifficultyName; 6] = [
        DifficultyName::Beginner,
        DifficultyName::Easy,
        DifficultyName::Hard,
        DifficultyName::Wild,
        DifficultyName::Dual,
        DifficultyName::Full,
    ];

    /// Wire name, as sent to and received from the score service.
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyName::Beginner => "beginner",
            DifficultyName::Easy => "easy",
            DifficultyName::Hard => "hard",
            DifficultyName::Wild => "wild",
            DifficultyName::Dual => "dual",
            DifficultyName::Full => "full",
        }
    }

    /// Capitalised name shown next to the chart level.
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyName::Beginner => "Beginner",
            DifficultyName::Easy => "Easy",
            DifficultyName::Hard => "Hard",
            DifficultyName::Wild => "Wild",
            DifficultyName::Dual => "Dual",
            DifficultyName::Full => "Full",
        }
    }
}

impl fmt::Display for DifficultyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known difficulty names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty name: {0}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for DifficultyName {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DifficultyName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names_case_insensitively() {
        assert_eq!("hard".parse::<DifficultyName>(), Ok(DifficultyName::Hard));
        assert_eq!(" Full ".parse::<DifficultyName>(), Ok(DifficultyName::Full));
        assert!("expert".parse::<DifficultyName>().is_err());
    }

    #[test]
    fn label_is_capitalised_wire_name() {
        for name in DifficultyName::ALL {
            let wire = name.as_str();
            let mut expected = wire[..1].to_uppercase();
            expected.push_str(&wire[1..]);
            assert_eq!(name.label(), expected);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DifficultyName::Wild).unwrap();
        assert_eq!(json, "\"wild\"");
        let back: DifficultyName = serde_json::from_str("\"dual\"").unwrap();
        assert_eq!(back, DifficultyName::Dual);
    }
}
