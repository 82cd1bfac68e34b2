//! Typed list filters, sorting and pagination
//!
//! Each filterable field has exactly one typed slot, so a filter can only
//! express combinations the repositories know how to run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Difficulty, Language, SolutionStatus};

/// Case-insensitive substring search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSearch(String);

impl TextSearch {
    /// Build a search term, ignoring blank input
    pub fn new(term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            None
        } else {
            Some(Self(term.to_string()))
        }
    }

    /// `ILIKE` pattern matching the term literally anywhere in a value
    pub fn ilike_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// Half-open `[from, to)` timestamp range; either bound may be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Filter for problem listings
#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    pub difficulty: Option<Difficulty>,
    /// Matches title or description
    pub search: Option<TextSearch>,
    pub starred: Option<bool>,
}

/// Filter for solution listings
#[derive(Debug, Clone, Default)]
pub struct SolutionFilter {
    pub language: Option<Language>,
    pub status: Option<SolutionStatus>,
    pub problem_id: Option<i64>,
    /// Matches the parent problem's title or the solution note
    pub search: Option<TextSearch>,
    pub created: Option<DateRange>,
}

/// Sortable solution columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SolutionSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Runtime,
    Memory,
}

impl SolutionSortField {
    /// Column name used in `ORDER BY`
    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "s.created_at",
            Self::UpdatedAt => "s.updated_at",
            Self::Runtime => "s.runtime",
            Self::Memory => "s.memory",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Solution ordering, newest first by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolutionSort {
    pub field: SolutionSortField,
    pub order: SortOrder,
}

impl SolutionSort {
    /// `ORDER BY` clause body. Nulls go last in both directions and the id
    /// breaks ties so pages never overlap.
    pub fn order_by(&self) -> String {
        format!(
            "{} {} NULLS LAST, s.id {}",
            self.field.column(),
            self.order.keyword(),
            self.order.keyword()
        )
    }
}

/// 1-indexed page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    /// Build a page from optional query values, clamping both into range
    pub fn new(page: Option<u32>, limit: Option<u32>, default_limit: u32, max_limit: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(default_limit).clamp(1, max_limit.max(1)),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }

    pub fn limit(&self) -> i64 {
        self.limit as i64
    }

    /// Pagination metadata for a listing with `total` matching rows
    pub fn meta(&self, total: i64) -> PageMeta {
        let limit = self.limit as i64;
        PageMeta {
            page: self.page,
            limit: self.limit,
            total,
            pages: (total + limit - 1) / limit,
        }
    }
}

/// Pagination metadata returned alongside list items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub pages: i64,
}
