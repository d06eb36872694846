use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use crate::features::problem_types::models::ProblemType;

/// Select list for a problem type aliased as `pt`, including its issue IDs
const PROBLEM_TYPE_COLUMNS: &str = r#"
    pt.id,
    pt.name,
    pt.problem_category_id,
    COALESCE(
        (SELECT array_agg(DISTINCT iopt.issue_open_id)
         FROM issue_open_problem_types iopt
         WHERE iopt.problem_type_id = pt.id),
        '{}'
    ) AS issues_ids,
    pt.created_at,
    pt.updated_at
"#;

/// Persistence operations for problem types
#[async_trait]
pub trait ProblemTypeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<ProblemType>, sqlx::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProblemType>, sqlx::Error>;
    /// Fetch every type whose ID is in `ids`, in no particular order
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProblemType>, sqlx::Error>;
    /// Insert or update the row keyed by `problem_type.id`
    async fn save(&self, problem_type: ProblemType) -> Result<ProblemType, sqlx::Error>;
    /// Returns the number of deleted rows
    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error>;
}

pub struct PgProblemTypeRepository {
    pool: PgPool,
}

impl PgProblemTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProblemTypeRepository for PgProblemTypeRepository {
    async fn find_all(&self) -> Result<Vec<ProblemType>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM problem_types pt ORDER BY pt.name",
            PROBLEM_TYPE_COLUMNS
        );

        sqlx::query_as::<_, ProblemType>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list problem types: {:?}", e);
                e
            })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProblemType>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM problem_types pt WHERE pt.id = $1",
            PROBLEM_TYPE_COLUMNS
        );

        sqlx::query_as::<_, ProblemType>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get problem type {}: {:?}", id, e);
                e
            })
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProblemType>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {} FROM problem_types pt WHERE pt.id = ANY($1)",
            PROBLEM_TYPE_COLUMNS
        );

        sqlx::query_as::<_, ProblemType>(&query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to resolve problem types: {:?}", e);
                e
            })
    }

    async fn save(&self, problem_type: ProblemType) -> Result<ProblemType, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO problem_types AS pt (id, name, problem_category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                problem_category_id = EXCLUDED.problem_category_id,
                updated_at = NOW()
            RETURNING {}
            "#,
            PROBLEM_TYPE_COLUMNS
        );

        sqlx::query_as::<_, ProblemType>(&query)
            .bind(problem_type.id)
            .bind(&problem_type.name)
            .bind(problem_type.problem_category_id)
            .bind(problem_type.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to save problem type {}: {:?}", problem_type.id, e);
                e
            })
    }

    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM problem_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete problem type {}: {:?}", id, e);
                e
            })?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// LINK TABLES
// =============================================================================

/// An ordered link table from an owning entity to problem types
#[derive(Debug, Clone, Copy)]
pub struct ProblemTypeLink {
    pub table: &'static str,
    pub owner_column: &'static str,
}

impl ProblemTypeLink {
    pub const CATEGORY: Self = Self {
        table: "problem_category_problem_types",
        owner_column: "problem_category_id",
    };

    pub const ISSUE: Self = Self {
        table: "issue_open_problem_types",
        owner_column: "issue_open_id",
    };
}

#[derive(FromRow)]
struct LinkedProblemTypeRow {
    owner_id: Uuid,
    #[sqlx(flatten)]
    problem_type: ProblemType,
}

/// Load the linked problem types of every owner in `owner_ids`, keyed by owner,
/// each list in stored position order
pub async fn load_linked_problem_types(
    pool: &PgPool,
    link: ProblemTypeLink,
    owner_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<ProblemType>>, sqlx::Error> {
    if owner_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let query = format!(
        r#"
        SELECT l.{owner} AS owner_id, {columns}
        FROM {table} l
        JOIN problem_types pt ON pt.id = l.problem_type_id
        WHERE l.{owner} = ANY($1)
        ORDER BY l.{owner}, l.position
        "#,
        owner = link.owner_column,
        columns = PROBLEM_TYPE_COLUMNS,
        table = link.table,
    );

    let rows: Vec<LinkedProblemTypeRow> = sqlx::query_as(&query)
        .bind(owner_ids)
        .fetch_all(pool)
        .await?;

    let mut grouped: HashMap<Uuid, Vec<ProblemType>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.owner_id)
            .or_default()
            .push(row.problem_type);
    }

    Ok(grouped)
}

/// Replace the full link list of `owner_id`, keeping the order of `problem_type_ids`
pub async fn replace_linked_problem_types(
    conn: &mut PgConnection,
    link: ProblemTypeLink,
    owner_id: Uuid,
    problem_type_ids: &[Uuid],
) -> Result<(), sqlx::Error> {
    let delete = format!("DELETE FROM {} WHERE {} = $1", link.table, link.owner_column);
    sqlx::query(&delete)
        .bind(owner_id)
        .execute(&mut *conn)
        .await?;

    if problem_type_ids.is_empty() {
        return Ok(());
    }

    let insert = format!(
        r#"
        INSERT INTO {table} ({owner}, problem_type_id, position)
        SELECT $1, t.id, (t.ord - 1)::INT
        FROM UNNEST($2::UUID[]) WITH ORDINALITY AS t(id, ord)
        "#,
        table = link.table,
        owner = link.owner_column,
    );
    sqlx::query(&insert)
        .bind(owner_id)
        .bind(problem_type_ids)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// In-memory repository for service and handler tests
#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryProblemTypeRepository {
        rows: Mutex<Vec<ProblemType>>,
        fail_saves: AtomicBool,
        saves: AtomicUsize,
    }

    impl InMemoryProblemTypeRepository {
        pub fn with_rows(rows: Vec<ProblemType>) -> Self {
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
    }

    #[async_trait]
    impl ProblemTypeRepository for InMemoryProblemTypeRepository {
        async fn find_all(&self) -> Result<Vec<ProblemType>, sqlx::Error> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<ProblemType>, sqlx::Error> {
            Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
        }

        async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProblemType>, sqlx::Error> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|t| ids.contains(&t.id))
                .cloned()
                .collect())
        }

        async fn save(&self, mut problem_type: ProblemType) -> Result<ProblemType, sqlx::Error> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(sqlx::Error::PoolTimedOut);
            }
            self.saves.fetch_add(1, Ordering::SeqCst);

            problem_type.updated_at = Utc::now();
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|t| t.id == problem_type.id) {
                Some(existing) => *existing = problem_type.clone(),
                None => rows.push(problem_type.clone()),
            }
            Ok(problem_type)
        }

        async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|t| t.id != id);
            Ok((before - rows.len()) as u64)
        }
    }
}
