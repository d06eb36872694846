use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::schedules_open::models::{ScheduleOpen, ScheduleStatus};

/// Request DTO for creating a schedule
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateScheduleOpenDto {
    pub issue_id: Uuid,

    /// Reminder timestamps
    #[serde(default)]
    pub alerts: Vec<DateTime<Utc>>,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    pub status_e: ScheduleStatus,

    #[serde(rename = "dateTime")]
    pub date_time: DateTime<Utc>,
}

/// Request DTO for updating a schedule.
///
/// Same shape as [`CreateScheduleOpenDto`]; every field replaces the stored one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateScheduleOpenDto {
    pub issue_id: Uuid,

    #[serde(default)]
    pub alerts: Vec<DateTime<Utc>>,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    pub status_e: ScheduleStatus,

    #[serde(rename = "dateTime")]
    pub date_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleOpenResponseDto {
    pub id: Uuid,
    pub issue_id: Uuid,
    pub alerts: Vec<DateTime<Utc>>,
    pub description: String,
    pub status_e: ScheduleStatus,
    #[serde(rename = "dateTime")]
    pub date_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ScheduleOpen> for ScheduleOpenResponseDto {
    fn from(s: ScheduleOpen) -> Self {
        Self {
            id: s.id,
            issue_id: s.issue_id,
            alerts: s.alerts,
            description: s.description,
            status_e: s.status_e,
            date_time: s.date_time,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
