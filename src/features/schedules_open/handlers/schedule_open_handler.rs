use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::schedules_open::dtos::{
    CreateScheduleOpenDto, ScheduleOpenResponseDto, UpdateScheduleOpenDto,
};
use crate::features::schedules_open::services::SchedulesOpenService;
use crate::shared::types::{ApiResponse, Meta};

/// Create a schedule for an issue
#[utoipa::path(
    post,
    path = "/api/schedules-open",
    request_body = CreateScheduleOpenDto,
    responses(
        (status = 201, description = "Schedule created", body = ApiResponse<ScheduleOpenResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Issue not found"),
        (status = 500, description = "Schedule could not be saved")
    ),
    tag = "schedules-open"
)]
pub async fn create_schedule_open(
    State(service): State<Arc<SchedulesOpenService>>,
    AppJson(dto): AppJson<CreateScheduleOpenDto>,
) -> Result<(StatusCode, Json<ApiResponse<ScheduleOpenResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let schedule = service.create_schedule_open(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(schedule.into()), None, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/schedules-open",
    responses(
        (status = 200, description = "List of schedules", body = ApiResponse<Vec<ScheduleOpenResponseDto>>)
    ),
    tag = "schedules-open"
)]
pub async fn list_schedules_open(
    State(service): State<Arc<SchedulesOpenService>>,
) -> Result<Json<ApiResponse<Vec<ScheduleOpenResponseDto>>>> {
    let schedules: Vec<ScheduleOpenResponseDto> = service
        .find_schedules_open()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let meta = Meta::for_items(&schedules);
    Ok(Json(ApiResponse::success(Some(schedules), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/schedules-open/{id}",
    params(
        ("id" = Uuid, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Schedule found", body = ApiResponse<ScheduleOpenResponseDto>),
        (status = 404, description = "Schedule not found")
    ),
    tag = "schedules-open"
)]
pub async fn get_schedule_open(
    State(service): State<Arc<SchedulesOpenService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ScheduleOpenResponseDto>>> {
    let schedule = service.find_schedule_open_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(schedule.into()), None, None)))
}

/// Overwrite a schedule
///
/// Every field in the body replaces the stored value.
#[utoipa::path(
    put,
    path = "/api/schedules-open/{id}",
    params(
        ("id" = Uuid, Path, description = "Schedule ID")
    ),
    request_body = UpdateScheduleOpenDto,
    responses(
        (status = 200, description = "Schedule updated", body = ApiResponse<ScheduleOpenResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Schedule or issue not found"),
        (status = 500, description = "Schedule could not be saved")
    ),
    tag = "schedules-open"
)]
pub async fn update_schedule_open(
    State(service): State<Arc<SchedulesOpenService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateScheduleOpenDto>,
) -> Result<Json<ApiResponse<ScheduleOpenResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let schedule = service.update_schedule_open(dto, id).await?;
    Ok(Json(ApiResponse::success(Some(schedule.into()), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/schedules-open/{id}",
    params(
        ("id" = Uuid, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Schedule deleted"),
        (status = 404, description = "Schedule not found")
    ),
    tag = "schedules-open"
)]
pub async fn delete_schedule_open(
    State(service): State<Arc<SchedulesOpenService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_schedule_open(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Schedule removed successfully".to_string()),
        None,
    )))
}
