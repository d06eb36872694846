use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::features::issues_open::models::{IssueOpen, IssueStatus};
use crate::features::problem_types::models::ProblemType;
use crate::features::problem_types::repositories::{
    load_linked_problem_types, replace_linked_problem_types, ProblemTypeLink,
};
use crate::features::schedules_open::models::ScheduleOpen;
use crate::features::schedules_open::repositories::upsert_schedule;

/// Persistence operations for issues, problem types eagerly loaded
#[async_trait]
pub trait IssueOpenRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<IssueOpen>, sqlx::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<IssueOpen>, sqlx::Error>;
    /// Insert or update the issue and replace its problem type links
    async fn save(&self, issue: IssueOpen) -> Result<IssueOpen, sqlx::Error>;
    /// Insert a new issue together with its optional follow-up schedule,
    /// both or neither
    async fn create(
        &self,
        issue: IssueOpen,
        follow_up: Option<ScheduleOpen>,
    ) -> Result<IssueOpen, sqlx::Error>;
    /// Returns the number of deleted rows
    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error>;
}

const ISSUE_COLUMNS: &str = r#"
    id, requester, phone, cellphone, email, city_id, workstation_id,
    problem_category_id, date, description, status, is_homolog,
    created_at, updated_at
"#;

#[derive(Debug, FromRow)]
struct IssueOpenRow {
    id: Uuid,
    requester: String,
    phone: String,
    cellphone: Option<String>,
    email: Option<String>,
    city_id: String,
    workstation_id: String,
    problem_category_id: Uuid,
    date: DateTime<Utc>,
    description: Option<String>,
    status: IssueStatus,
    is_homolog: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl IssueOpenRow {
    fn into_issue(self, problem_types: Vec<ProblemType>) -> IssueOpen {
        IssueOpen {
            id: self.id,
            requester: self.requester,
            phone: self.phone,
            cellphone: self.cellphone,
            email: self.email,
            city_id: self.city_id,
            workstation_id: self.workstation_id,
            problem_category_id: self.problem_category_id,
            problem_types,
            date: self.date,
            description: self.description,
            status: self.status,
            is_homolog: self.is_homolog,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub struct PgIssueOpenRepository {
    pool: PgPool,
}

impl PgIssueOpenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_problem_types(
        &self,
        rows: Vec<IssueOpenRow>,
    ) -> Result<Vec<IssueOpen>, sqlx::Error> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut links = load_linked_problem_types(&self.pool, ProblemTypeLink::ISSUE, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let problem_types = links.remove(&row.id).unwrap_or_default();
                row.into_issue(problem_types)
            })
            .collect())
    }

    async fn write(
        &self,
        issue: IssueOpen,
        follow_up: Option<ScheduleOpen>,
    ) -> Result<IssueOpen, sqlx::Error> {
        let problem_type_ids = issue.problem_type_ids();
        let mut tx = self.pool.begin().await?;

        let query = format!(
            r#"
            INSERT INTO issues_open (
                id, requester, phone, cellphone, email, city_id, workstation_id,
                problem_category_id, date, description, status, is_homolog,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
            ON CONFLICT (id) DO UPDATE
            SET requester = EXCLUDED.requester,
                phone = EXCLUDED.phone,
                cellphone = EXCLUDED.cellphone,
                email = EXCLUDED.email,
                city_id = EXCLUDED.city_id,
                workstation_id = EXCLUDED.workstation_id,
                problem_category_id = EXCLUDED.problem_category_id,
                date = EXCLUDED.date,
                description = EXCLUDED.description,
                status = EXCLUDED.status,
                is_homolog = EXCLUDED.is_homolog,
                updated_at = NOW()
            RETURNING {}
            "#,
            ISSUE_COLUMNS
        );

        let row = sqlx::query_as::<_, IssueOpenRow>(&query)
            .bind(issue.id)
            .bind(&issue.requester)
            .bind(&issue.phone)
            .bind(&issue.cellphone)
            .bind(&issue.email)
            .bind(&issue.city_id)
            .bind(&issue.workstation_id)
            .bind(issue.problem_category_id)
            .bind(issue.date)
            .bind(&issue.description)
            .bind(issue.status)
            .bind(issue.is_homolog)
            .bind(issue.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to save issue {}: {:?}", issue.id, e);
                e
            })?;

        replace_linked_problem_types(&mut tx, ProblemTypeLink::ISSUE, row.id, &problem_type_ids)
            .await
            .map_err(|e| {
                tracing::error!("Failed to link problem types to issue {}: {:?}", row.id, e);
                e
            })?;

        if let Some(schedule) = follow_up {
            upsert_schedule(&mut *tx, &schedule).await?;
        }

        tx.commit().await?;

        Ok(row.into_issue(issue.problem_types))
    }
}

#[async_trait]
impl IssueOpenRepository for PgIssueOpenRepository {
    async fn find_all(&self) -> Result<Vec<IssueOpen>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM issues_open ORDER BY date DESC",
            ISSUE_COLUMNS
        );

        let rows = sqlx::query_as::<_, IssueOpenRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list issues: {:?}", e);
                e
            })?;

        self.with_problem_types(rows).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<IssueOpen>, sqlx::Error> {
        let query = format!("SELECT {} FROM issues_open WHERE id = $1", ISSUE_COLUMNS);

        let row = sqlx::query_as::<_, IssueOpenRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get issue {}: {:?}", id, e);
                e
            })?;

        match row {
            Some(row) => Ok(self.with_problem_types(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn save(&self, issue: IssueOpen) -> Result<IssueOpen, sqlx::Error> {
        self.write(issue, None).await
    }

    async fn create(
        &self,
        issue: IssueOpen,
        follow_up: Option<ScheduleOpen>,
    ) -> Result<IssueOpen, sqlx::Error> {
        self.write(issue, follow_up).await
    }

    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM issues_open WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete issue {}: {:?}", id, e);
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
    pub struct InMemoryIssueOpenRepository {
        rows: Mutex<Vec<IssueOpen>>,
        follow_ups: Mutex<Vec<ScheduleOpen>>,
        fail_saves: AtomicBool,
        saves: AtomicUsize,
    }

    impl InMemoryIssueOpenRepository {
        pub fn with_rows(rows: Vec<IssueOpen>) -> Self {
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

        /// Schedules written alongside created issues
        pub fn follow_ups(&self) -> Vec<ScheduleOpen> {
            self.follow_ups.lock().unwrap().clone()
        }

        /// Fill `issues_ids` from the stored link lists, as the join does
        fn with_issue_links(&self, mut issue: IssueOpen, rows: &[IssueOpen]) -> IssueOpen {
            for problem_type in issue.problem_types.iter_mut() {
                problem_type.issues_ids = rows
                    .iter()
                    .filter(|i| i.problem_type_ids().contains(&problem_type.id))
                    .map(|i| i.id)
                    .collect();
            }
            issue
        }
    }

    #[async_trait]
    impl IssueOpenRepository for InMemoryIssueOpenRepository {
        async fn find_all(&self) -> Result<Vec<IssueOpen>, sqlx::Error> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .cloned()
                .map(|i| self.with_issue_links(i, &rows))
                .collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<IssueOpen>, sqlx::Error> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .map(|i| self.with_issue_links(i, &rows)))
        }

        async fn save(&self, mut issue: IssueOpen) -> Result<IssueOpen, sqlx::Error> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(sqlx::Error::PoolTimedOut);
            }
            self.saves.fetch_add(1, Ordering::SeqCst);

            issue.updated_at = Utc::now();
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|i| i.id == issue.id) {
                Some(existing) => *existing = issue.clone(),
                None => rows.push(issue.clone()),
            }
            Ok(issue)
        }

        async fn create(
            &self,
            issue: IssueOpen,
            follow_up: Option<ScheduleOpen>,
        ) -> Result<IssueOpen, sqlx::Error> {
            let saved = self.save(issue).await?;
            if let Some(schedule) = follow_up {
                self.follow_ups.lock().unwrap().push(schedule);
            }
            Ok(saved)
        }

        async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|i| i.id != id);
            Ok((before - rows.len()) as u64)
        }
    }
}
