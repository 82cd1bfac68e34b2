//! Solution model

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Difficulty, ParseEnumError, ProblemRef};
use crate::constants::languages;

/// Solution database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: i64,
    pub problem_id: i64,
    pub code: String,
    #[sqlx(try_from = "String")]
    pub language: Language,
    pub complexity: Option<String>,
    /// Runtime in milliseconds
    pub runtime: Option<i32>,
    /// Memory in megabytes
    pub memory: Option<f64>,
    pub note: Option<String>,
    pub attempt_no: i32,
    #[sqlx(try_from = "String")]
    pub status: SolutionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Languages a solution may be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Python,
    Cpp,
    Java,
    Go,
    Rust,
}

impl Language {
    /// Get language as stored identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Javascript => languages::JAVASCRIPT,
            Self::Typescript => languages::TYPESCRIPT,
            Self::Python => languages::PYTHON,
            Self::Cpp => languages::CPP,
            Self::Java => languages::JAVA,
            Self::Go => languages::GO,
            Self::Rust => languages::RUST,
        }
    }
}

impl FromStr for Language {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            languages::JAVASCRIPT => Ok(Self::Javascript),
            languages::TYPESCRIPT => Ok(Self::Typescript),
            languages::PYTHON => Ok(Self::Python),
            languages::CPP => Ok(Self::Cpp),
            languages::JAVA => Ok(Self::Java),
            languages::GO => Ok(Self::Go),
            languages::RUST => Ok(Self::Rust),
            other => Err(ParseEnumError::new("language", other)),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Judge outcome recorded for a solution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolutionStatus {
    #[default]
    Accepted,
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
    #[serde(rename = "Time Limit Exceeded")]
    TimeLimitExceeded,
    #[serde(rename = "Memory Limit Exceeded")]
    MemoryLimitExceeded,
    #[serde(rename = "Runtime Error")]
    RuntimeError,
    #[serde(rename = "Compile Error")]
    CompileError,
}

impl SolutionStatus {
    /// Get status as stored string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
            Self::MemoryLimitExceeded => "Memory Limit Exceeded",
            Self::RuntimeError => "Runtime Error",
            Self::CompileError => "Compile Error",
        }
    }
}

impl FromStr for SolutionStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Accepted" => Ok(Self::Accepted),
            "Wrong Answer" => Ok(Self::WrongAnswer),
            "Time Limit Exceeded" => Ok(Self::TimeLimitExceeded),
            "Memory Limit Exceeded" => Ok(Self::MemoryLimitExceeded),
            "Runtime Error" => Ok(Self::RuntimeError),
            "Compile Error" => Ok(Self::CompileError),
            other => Err(ParseEnumError::new("status", other)),
        }
    }
}

impl TryFrom<String> for SolutionStatus {
    type Error = ParseEnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields accepted when recording a solution. The attempt number is not
/// among them: it is always assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewSolution {
    pub problem_id: i64,
    pub code: String,
    pub language: Language,
    pub complexity: Option<String>,
    pub runtime: Option<i32>,
    pub memory: Option<f64>,
    pub note: Option<String>,
    pub status: SolutionStatus,
}

/// Partial solution update
#[derive(Debug, Clone, Default)]
pub struct SolutionChanges {
    pub code: Option<String>,
    pub language: Option<Language>,
    pub complexity: Option<String>,
    pub runtime: Option<i32>,
    pub memory: Option<f64>,
    pub note: Option<String>,
    pub status: Option<SolutionStatus>,
}

/// Solution joined with the fields of its problem shown in listings
#[derive(Debug, Clone, FromRow)]
pub struct SolutionWithProblem {
    #[sqlx(flatten)]
    pub solution: Solution,
    pub problem_lc_id: i32,
    pub problem_title: String,
    #[sqlx(try_from = "String")]
    pub problem_difficulty: Difficulty,
}

impl SolutionWithProblem {
    pub fn problem(&self) -> ProblemRef {
        ProblemRef {
            id: self.solution.problem_id,
            lc_id: self.problem_lc_id,
            title: self.problem_title.clone(),
            difficulty: self.problem_difficulty,
        }
    }
}
