//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod category;
pub mod filter;
pub mod problem;
pub mod solution;
pub mod tag;

pub use category::*;
pub use filter::*;
pub use problem::*;
pub use solution::*;
pub use tag::*;

/// A stored or submitted value that is not a member of its enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
