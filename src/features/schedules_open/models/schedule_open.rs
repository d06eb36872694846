use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Schedule status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "schedule_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleStatus {
    Progress,
    Closed,
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleStatus::Progress => write!(f, "PROGRESS"),
            ScheduleStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ScheduleOpen {
    pub id: Uuid,
    pub issue_id: Uuid,
    pub alerts: Vec<DateTime<Utc>>,
    pub description: String,
    pub status_e: ScheduleStatus,
    pub date_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduleOpen {
    pub fn new(
        issue_id: Uuid,
        alerts: Vec<DateTime<Utc>>,
        description: String,
        status_e: ScheduleStatus,
        date_time: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            issue_id,
            alerts,
            description,
            status_e,
            date_time,
            created_at: now,
            updated_at: now,
        }
    }
}
