use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::features::problem_categories::models::ProblemCategory;
use crate::features::problem_types::models::ProblemType;
use crate::features::problem_types::repositories::{
    load_linked_problem_types, replace_linked_problem_types, ProblemTypeLink,
};

/// Persistence operations for problem categories.
///
/// Every read returns categories with their problem types eagerly loaded.
#[async_trait]
pub trait ProblemCategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<ProblemCategory>, sqlx::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProblemCategory>, sqlx::Error>;
    /// Insert or update the category and replace its problem type links
    async fn save(&self, category: ProblemCategory) -> Result<ProblemCategory, sqlx::Error>;
    /// Returns the number of deleted rows
    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, FromRow)]
struct ProblemCategoryRow {
    id: Uuid,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProblemCategoryRow {
    fn into_category(self, problem_types: Vec<ProblemType>) -> ProblemCategory {
        ProblemCategory {
            id: self.id,
            name: self.name,
            description: self.description,
            problem_types,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub struct PgProblemCategoryRepository {
    pool: PgPool,
}

impl PgProblemCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_problem_types(
        &self,
        rows: Vec<ProblemCategoryRow>,
    ) -> Result<Vec<ProblemCategory>, sqlx::Error> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut links =
            load_linked_problem_types(&self.pool, ProblemTypeLink::CATEGORY, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let problem_types = links.remove(&row.id).unwrap_or_default();
                row.into_category(problem_types)
            })
            .collect())
    }
}

#[async_trait]
impl ProblemCategoryRepository for PgProblemCategoryRepository {
    async fn find_all(&self) -> Result<Vec<ProblemCategory>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ProblemCategoryRow>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM problem_categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list problem categories: {:?}", e);
            e
        })?;

        self.with_problem_types(rows).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProblemCategory>, sqlx::Error> {
        let row = sqlx::query_as::<_, ProblemCategoryRow>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM problem_categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get problem category {}: {:?}", id, e);
            e
        })?;

        match row {
            Some(row) => Ok(self.with_problem_types(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn save(&self, category: ProblemCategory) -> Result<ProblemCategory, sqlx::Error> {
        let problem_type_ids = category.problem_type_ids();
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProblemCategoryRow>(
            r#"
            INSERT INTO problem_categories (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                description = EXCLUDED.description,
                updated_at = NOW()
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save problem category {}: {:?}", category.id, e);
            e
        })?;

        replace_linked_problem_types(
            &mut tx,
            ProblemTypeLink::CATEGORY,
            row.id,
            &problem_type_ids,
        )
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to link problem types to category {}: {:?}",
                row.id,
                e
            );
            e
        })?;

        tx.commit().await?;

        Ok(row.into_category(category.problem_types))
    }

    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM problem_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete problem category {}: {:?}", id, e);
                e
            })?;

        Ok(result.rows_affected())
    }
}

/// In-memory repository for service and handler tests
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryProblemCategoryRepository {
        rows: Mutex<Vec<ProblemCategory>>,
        fail_saves: AtomicBool,
        saves: AtomicUsize,
        deletes: AtomicUsize,
    }

    impl InMemoryProblemCategoryRepository {
        pub fn with_rows(rows: Vec<ProblemCategory>) -> Self {
            Self {
                rows: Mutex::new(rows),
                ..Default::default()
            }
        }

        pub fn fail_saves(&self) {
            self.fail_saves.store(true, Ordering::SeqCst);
        }

        pub fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }

        /// Deletes that actually removed a row
        pub fn delete_count(&self) -> usize {
            self.deletes.load(Ordering::SeqCst)
        }

        pub fn stored(&self, id: Uuid) -> Option<ProblemCategory> {
            self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned()
        }
    }

    #[async_trait]
    impl ProblemCategoryRepository for InMemoryProblemCategoryRepository {
        async fn find_all(&self) -> Result<Vec<ProblemCategory>, sqlx::Error> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<ProblemCategory>, sqlx::Error> {
            Ok(self.stored(id))
        }

        async fn save(
            &self,
            mut category: ProblemCategory,
        ) -> Result<ProblemCategory, sqlx::Error> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(sqlx::Error::PoolTimedOut);
            }
            self.saves.fetch_add(1, Ordering::SeqCst);

            category.updated_at = Utc::now();
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|c| c.id == category.id) {
                Some(existing) => *existing = category.clone(),
                None => rows.push(category.clone()),
            }
            Ok(category)
        }

        async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| c.id != id);
            let removed = (before - rows.len()) as u64;
            if removed > 0 {
                self.deletes.fetch_add(1, Ordering::SeqCst);
            }
            Ok(removed)
        }
    }
}
