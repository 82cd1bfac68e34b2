//! Problem model

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ParseEnumError;

/// Problem database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: i64,
    pub lc_id: i32,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub difficulty: Difficulty,
    pub url: Option<String>,
    pub description: Option<String>,
    pub starred: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Problem difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Get difficulty as stored string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Ordinal used for ranking, harder is larger
    pub fn rank(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            other => Err(ParseEnumError::new("difficulty", other)),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brief problem reference embedded in solution and activity payloads
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRef {
    pub id: i64,
    pub lc_id: i32,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub difficulty: Difficulty,
}

/// Fields accepted when creating a problem
#[derive(Debug, Clone)]
pub struct NewProblem {
    pub lc_id: i32,
    pub title: String,
    pub difficulty: Difficulty,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Partial problem update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default)]
pub struct ProblemChanges {
    pub lc_id: Option<i32>,
    pub title: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub starred: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trips_through_strings() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(difficulty.as_str().parse::<Difficulty>().unwrap(), difficulty);
        }
        assert!("easy".parse::<Difficulty>().is_err());
        assert!(Difficulty::try_from("Expert".to_string()).is_err());
    }

    #[test]
    fn test_difficulty_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"Medium\"");
    }

    #[test]
    fn test_difficulty_rank_orders_hard_highest() {
        assert!(Difficulty::Hard.rank() > Difficulty::Medium.rank());
        assert!(Difficulty::Medium.rank() > Difficulty::Easy.rank());
    }
}
