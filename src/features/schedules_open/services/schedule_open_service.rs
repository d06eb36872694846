use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::issues_open::IssueResolver;
use crate::features::schedules_open::dtos::{CreateScheduleOpenDto, UpdateScheduleOpenDto};
use crate::features::schedules_open::models::ScheduleOpen;
use crate::features::schedules_open::repositories::ScheduleOpenRepository;

const SAVE_ERROR: &str = "Error saving schedule to the database";
const NOT_FOUND: &str = "Schedule not found";
const DELETE_NOT_FOUND: &str = "No schedule was found with the given ID";

pub struct SchedulesOpenService {
    repo: Arc<dyn ScheduleOpenRepository>,
    issues: Arc<dyn IssueResolver>,
}

impl SchedulesOpenService {
    pub fn new(repo: Arc<dyn ScheduleOpenRepository>, issues: Arc<dyn IssueResolver>) -> Self {
        Self { repo, issues }
    }

    /// Create a schedule for an existing issue
    pub async fn create_schedule_open(&self, dto: CreateScheduleOpenDto) -> Result<ScheduleOpen> {
        self.issues.find_issue_open(dto.issue_id).await?;

        let schedule = ScheduleOpen::new(
            dto.issue_id,
            dto.alerts,
            dto.description,
            dto.status_e,
            dto.date_time,
        );

        let saved = self
            .repo
            .save(schedule)
            .await
            .map_err(|_| AppError::Internal(SAVE_ERROR.to_string()))?;

        tracing::info!(
            "Schedule created: id={}, issue={}, status={}",
            saved.id,
            saved.issue_id,
            saved.status_e
        );
        Ok(saved)
    }

    /// Replace every field of an existing schedule with the DTO's values
    pub async fn update_schedule_open(
        &self,
        dto: UpdateScheduleOpenDto,
        id: Uuid,
    ) -> Result<ScheduleOpen> {
        let mut schedule = self.find_schedule_open_by_id(id).await?;
        self.issues.find_issue_open(dto.issue_id).await?;

        schedule.issue_id = dto.issue_id;
        schedule.alerts = dto.alerts;
        schedule.description = dto.description;
        schedule.status_e = dto.status_e;
        schedule.date_time = dto.date_time;

        self.repo
            .save(schedule)
            .await
            .map_err(|_| AppError::Internal(SAVE_ERROR.to_string()))
    }

    pub async fn find_schedules_open(&self) -> Result<Vec<ScheduleOpen>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn find_schedule_open_by_id(&self, id: Uuid) -> Result<ScheduleOpen> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn delete_schedule_open(&self, id: Uuid) -> Result<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(DELETE_NOT_FOUND.to_string()));
        }

        tracing::info!("Schedule deleted: id={}", id);
        Ok(())
    }
}
