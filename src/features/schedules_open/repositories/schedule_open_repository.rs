use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::features::schedules_open::models::ScheduleOpen;

#[async_trait]
pub trait ScheduleOpenRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<ScheduleOpen>, sqlx::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ScheduleOpen>, sqlx::Error>;
    /// Insert or update by primary key
    async fn save(&self, schedule: ScheduleOpen) -> Result<ScheduleOpen, sqlx::Error>;
    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error>;
}

pub struct PgScheduleOpenRepository {
    pool: PgPool,
}

impl PgScheduleOpenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleOpenRepository for PgScheduleOpenRepository {
    async fn find_all(&self) -> Result<Vec<ScheduleOpen>, sqlx::Error> {
        sqlx::query_as::<_, ScheduleOpen>(
            r#"
            SELECT id, issue_id, alerts, description, status_e, date_time,
                   created_at, updated_at
            FROM schedules_open
            ORDER BY date_time
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list schedules: {:?}", e);
            e
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ScheduleOpen>, sqlx::Error> {
        sqlx::query_as::<_, ScheduleOpen>(
            r#"
            SELECT id, issue_id, alerts, description, status_e, date_time,
                   created_at, updated_at
            FROM schedules_open
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get schedule {}: {:?}", id, e);
            e
        })
    }

    async fn save(&self, schedule: ScheduleOpen) -> Result<ScheduleOpen, sqlx::Error> {
        upsert_schedule(&self.pool, &schedule).await
    }

    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedules_open WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete schedule {}: {:?}", id, e);
                e
            })?;

        Ok(result.rows_affected())
    }
}

/// Insert or update a schedule on any executor, so callers can include it in
/// their own transaction
pub async fn upsert_schedule<'e, E>(
    executor: E,
    schedule: &ScheduleOpen,
) -> Result<ScheduleOpen, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as::<_, ScheduleOpen>(
        r#"
        INSERT INTO schedules_open (
            id, issue_id, alerts, description, status_e, date_time,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        ON CONFLICT (id) DO UPDATE
        SET issue_id = EXCLUDED.issue_id,
            alerts = EXCLUDED.alerts,
            description = EXCLUDED.description,
            status_e = EXCLUDED.status_e,
            date_time = EXCLUDED.date_time,
            updated_at = NOW()
        RETURNING id, issue_id, alerts, description, status_e, date_time,
                  created_at, updated_at
        "#,
    )
    .bind(schedule.id)
    .bind(schedule.issue_id)
    .bind(&schedule.alerts)
    .bind(&schedule.description)
    .bind(schedule.status_e)
    .bind(schedule.date_time)
    .bind(schedule.created_at)
    .fetch_one(executor)
    .await
    .map_err(|e| {
        tracing::error!("Failed to save schedule {}: {:?}", schedule.id, e);
        e
    })
}
