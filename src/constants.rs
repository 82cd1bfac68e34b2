//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Default maximum request body size in bytes (1 MB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Language identifiers accepted for solutions
pub mod languages {
    pub const JAVASCRIPT: &str = "javascript";
    pub const TYPESCRIPT: &str = "typescript";
    pub const PYTHON: &str = "python";
    pub const CPP: &str = "cpp";
    pub const JAVA: &str = "java";
    pub const GO: &str = "go";
    pub const RUST: &str = "rust";

    /// All supported language identifiers
    pub const ALL: &[&str] = &[JAVASCRIPT, TYPESCRIPT, PYTHON, CPP, JAVA, GO, RUST];
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Statistics snapshot limits and windows
pub mod statistics {
    /// Number of tags reported in the popularity ranking
    pub const TOP_TAGS: usize = 10;

    /// Number of solutions reported as recent activity
    pub const RECENT_ACTIVITY: i64 = 10;

    /// Trailing window of the monthly trend, in calendar months
    pub const MONTHLY_TREND_MONTHS: u32 = 12;

    /// Trailing window of the weekly trend, in weeks
    pub const WEEKLY_TREND_WEEKS: i64 = 8;
}

/// Number of latest solutions embedded in a problem detail response
pub const PROBLEM_DETAIL_RECENT_SOLUTIONS: i64 = 5;

// =============================================================================
// API
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 256;

/// Maximum problem description length
pub const MAX_PROBLEM_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum category name length
pub const MAX_CATEGORY_NAME_LENGTH: u64 = 50;

/// Maximum category description length
pub const MAX_CATEGORY_DESCRIPTION_LENGTH: u64 = 200;

/// Maximum tag name length
pub const MAX_TAG_NAME_LENGTH: u64 = 50;

/// Maximum solution source code size in bytes (64 KB)
pub const MAX_SOLUTION_CODE_LENGTH: u64 = 65536;

/// Maximum free-text complexity annotation length
pub const MAX_COMPLEXITY_LENGTH: u64 = 100;

/// Maximum solution note length
pub const MAX_NOTE_LENGTH: u64 = 10000;
