//! Test utilities backed by a throwaway Postgres container
//!
//! Every caller gets its own container so tests never share rows.

use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use crate::{
    db,
    models::{Difficulty, Language, NewProblem, NewSolution, SolutionStatus},
};

/// A migrated database; the container stops when this is dropped
pub struct TestDatabase {
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

/// Start Postgres and apply the schema migrations
pub async fn test_database() -> TestDatabase {
    let container = Postgres::default()
        .with_user("leetrack")
        .with_password("leetrack_test")
        .with_db_name("leetrack_test")
        .with_tag("16-alpine")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let url = format!("postgres://leetrack:leetrack_test@{host}:{port}/leetrack_test");

    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    TestDatabase {
        pool,
        _container: container,
    }
}

pub fn new_problem(lc_id: i32, difficulty: Difficulty) -> NewProblem {
    NewProblem {
        lc_id,
        title: format!("Problem {lc_id}"),
        difficulty,
        url: Some(format!("https://leetcode.com/problems/problem-{lc_id}/")),
        description: Some("Find the answer".to_string()),
    }
}

pub fn new_solution(problem_id: i64, language: Language) -> NewSolution {
    NewSolution {
        problem_id,
        code: "fn main() {}".to_string(),
        language,
        complexity: Some("O(n)".to_string()),
        runtime: Some(12),
        memory: Some(2.5),
        note: None,
        status: SolutionStatus::Accepted,
    }
}
