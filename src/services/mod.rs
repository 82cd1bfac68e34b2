//! Business logic services

pub mod category_service;
pub mod problem_service;
pub mod solution_service;
pub mod stats_service;
pub mod tag_service;

pub use category_service::CategoryService;
pub use problem_service::ProblemService;
pub use solution_service::SolutionService;
pub use stats_service::StatsService;
pub use tag_service::TagService;
