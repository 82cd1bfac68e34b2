//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod category_repo;
pub mod problem_repo;
pub mod solution_repo;
pub mod tag_repo;

pub use category_repo::CategoryRepository;
pub use problem_repo::ProblemRepository;
pub use solution_repo::SolutionRepository;
pub use tag_repo::TagRepository;
