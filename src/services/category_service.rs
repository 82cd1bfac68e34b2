//! Category service

use sqlx::PgPool;

use crate::{
    db::repositories::CategoryRepository,
    error::{AppError, AppResult},
    handlers::categories::{
        request::{CreateCategoryRequest, UpdateCategoryRequest},
        response::{CategoriesListResponse, CategoryDetailResponse, CategoryEnvelope, CategoryResponse},
    },
    models::{Category, Page},
    services::ProblemService,
};

/// Category service for business logic
pub struct CategoryService;

impl CategoryService {
    /// List categories by name, optionally with progress counters
    pub async fn list_categories(pool: &PgPool, include_stats: bool) -> AppResult<CategoriesListResponse> {
        let categories = if include_stats {
            CategoryRepository::list_with_stats(pool)
                .await?
                .into_iter()
                .map(|row| CategoryResponse {
                    category: row.category,
                    stats: Some(row.progress.into()),
                })
                .collect()
        } else {
            CategoryRepository::list(pool)
                .await?
                .into_iter()
                .map(|category| CategoryResponse { category, stats: None })
                .collect()
        };

        Ok(CategoriesListResponse { categories })
    }

    /// Create a new category
    pub async fn create_category(pool: &PgPool, payload: CreateCategoryRequest) -> AppResult<CategoryEnvelope> {
        Self::ensure_name_free(pool, &payload.name, None).await?;

        let category =
            CategoryRepository::create(pool, &payload.name, payload.description.as_deref()).await?;

        tracing::info!(category_id = category.id, name = %category.name, "Category created");

        Ok(Self::envelope(category))
    }

    /// Get category with its progress and, when `page` is given, a page of its problems
    pub async fn get_category(pool: &PgPool, id: i64, page: Option<Page>) -> AppResult<CategoryDetailResponse> {
        let category = CategoryRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let progress = CategoryRepository::progress(pool, id).await?;

        let (problems, pagination) = match page {
            Some(page) => {
                let (problems, total) = CategoryRepository::problems_page(pool, id, page).await?;
                let problems = ProblemService::with_associations(pool, problems).await?;
                (Some(problems), Some(page.meta(total)))
            }
            None => (None, None),
        };

        Ok(CategoryDetailResponse {
            category: CategoryResponse {
                category,
                stats: Some(progress.into()),
            },
            problems,
            pagination,
        })
    }

    /// Update category
    pub async fn update_category(
        pool: &PgPool,
        id: i64,
        payload: UpdateCategoryRequest,
    ) -> AppResult<CategoryEnvelope> {
        if let Some(name) = &payload.name {
            Self::ensure_name_free(pool, name, Some(id)).await?;
        }

        let category = CategoryRepository::update(
            pool,
            id,
            payload.name.as_deref(),
            payload.description.as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        tracing::info!(category_id = id, "Category updated");

        Ok(Self::envelope(category))
    }

    /// Delete a category; refused while problems are filed under it
    pub async fn delete_category(pool: &PgPool, id: i64) -> AppResult<()> {
        ensure_no_problems(CategoryRepository::problem_count(pool, id).await?)?;

        let deleted = CategoryRepository::delete(pool, id)
            .await
            .map_err(restricted_delete_conflict)?;

        if !deleted {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        tracing::info!(category_id = id, "Category deleted");

        Ok(())
    }

    /// Reject a name already used by a category other than `own_id`
    async fn ensure_name_free(pool: &PgPool, name: &str, own_id: Option<i64>) -> AppResult<()> {
        match CategoryRepository::find_by_name(pool, name).await? {
            Some(existing) if Some(existing.id) != own_id => Err(AppError::Conflict(format!(
                "Category '{name}' already exists"
            ))),
            _ => Ok(()),
        }
    }

    fn envelope(category: Category) -> CategoryEnvelope {
        CategoryEnvelope {
            category: CategoryResponse { category, stats: None },
        }
    }
}

/// Refuse to delete a category that problems are still filed under
fn ensure_no_problems(problems: i64) -> AppResult<()> {
    if problems > 0 {
        return Err(AppError::Conflict(format!(
            "Category still has {problems} problem(s) associated"
        )));
    }
    Ok(())
}

/// A problem filed under the category after the count check trips the
/// `RESTRICT` foreign key, which surfaces as an invalid reference
fn restricted_delete_conflict(err: AppError) -> AppError {
    match err {
        AppError::InvalidReference(_) => {
            AppError::Conflict("Category still has problems associated".to_string())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::repositories::ProblemRepository,
        models::Difficulty,
        test_utils::{new_problem, test_database},
    };

    fn create_request(name: &str) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
            description: Some("Sliding windows and two pointers".to_string()),
        }
    }

    #[test]
    fn test_guard_refuses_categories_with_problems() {
        assert!(ensure_no_problems(0).is_ok());
        let err = ensure_no_problems(3).unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref msg) if msg.contains('3')));
        assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_restrict_violation_maps_to_conflict() {
        let err = restricted_delete_conflict(AppError::InvalidReference("fk".to_string()));
        assert!(matches!(err, AppError::Conflict(_)));

        let err = restricted_delete_conflict(AppError::StoreUnavailable("down".to_string()));
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_delete_with_problems_is_conflict_and_keeps_links() {
        let db = test_database().await;
        let created = CategoryService::create_category(&db.pool, create_request("Arrays"))
            .await
            .unwrap();
        let id = created.category.category.id;
        let problem = ProblemRepository::create(&db.pool, &new_problem(1, Difficulty::Easy), &[], &[id])
            .await
            .unwrap();

        let err = CategoryService::delete_category(&db.pool, id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        assert!(CategoryRepository::find_by_id(&db.pool, id).await.unwrap().is_some());
        let links = ProblemRepository::categories_for(&db.pool, &[problem.id]).await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].category.id, id);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_detail_reports_progress_and_problem_page() {
        let db = test_database().await;
        let created = CategoryService::create_category(&db.pool, create_request("Graphs"))
            .await
            .unwrap();
        let id = created.category.category.id;
        for lc_id in [200, 100] {
            ProblemRepository::create(&db.pool, &new_problem(lc_id, Difficulty::Medium), &[], &[id])
                .await
                .unwrap();
        }

        let page = Page::new(Some(1), Some(1), 10, 100);
        let detail = CategoryService::get_category(&db.pool, id, Some(page)).await.unwrap();

        let stats = detail.category.stats.expect("stats");
        assert_eq!(stats.problems_count, 2);
        assert_eq!(stats.solved_count, 0);
        assert_eq!(stats.completion_rate, 0);
        let problems = detail.problems.expect("problems");
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].problem.lc_id, 100);
        assert_eq!(detail.pagination.expect("pagination").total, 2);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_duplicate_name_is_conflict() {
        let db = test_database().await;
        CategoryService::create_category(&db.pool, create_request("DP")).await.unwrap();

        let err = CategoryService::create_category(&db.pool, create_request("DP"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_delete_missing_category_is_not_found() {
        let db = test_database().await;

        let err = CategoryService::delete_category(&db.pool, 42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
