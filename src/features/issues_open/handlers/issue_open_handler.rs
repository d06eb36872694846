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
use crate::features::issues_open::dtos::{
    CreateIssueOpenDto, IssueOpenResponseDto, UpdateIssueOpenDto,
};
use crate::features::issues_open::services::IssuesOpenService;
use crate::shared::types::{ApiResponse, Meta};

/// Open an issue. With `dateTime` set, a `PROGRESS` follow-up schedule is
/// opened in the same transaction.
#[utoipa::path(
    post,
    path = "/api/issues-open",
    request_body = CreateIssueOpenDto,
    responses(
        (status = 201, description = "Issue opened", body = ApiResponse<IssueOpenResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced category or problem type not found"),
        (status = 500, description = "Issue could not be saved")
    ),
    tag = "issues-open"
)]
pub async fn create_issue_open(
    State(service): State<Arc<IssuesOpenService>>,
    AppJson(dto): AppJson<CreateIssueOpenDto>,
) -> Result<(StatusCode, Json<ApiResponse<IssueOpenResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let issue = service.create_issue(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(issue.into()), None, None)),
    ))
}

/// List issues, most recent first
#[utoipa::path(
    get,
    path = "/api/issues-open",
    responses(
        (status = 200, description = "List of issues", body = ApiResponse<Vec<IssueOpenResponseDto>>)
    ),
    tag = "issues-open"
)]
pub async fn list_issues_open(
    State(service): State<Arc<IssuesOpenService>>,
) -> Result<Json<ApiResponse<Vec<IssueOpenResponseDto>>>> {
    let issues: Vec<IssueOpenResponseDto> = service
        .find_issues_open()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let meta = Meta::for_items(&issues);
    Ok(Json(ApiResponse::success(Some(issues), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/issues-open/{id}",
    params(
        ("id" = Uuid, Path, description = "Issue ID")
    ),
    responses(
        (status = 200, description = "Issue found", body = ApiResponse<IssueOpenResponseDto>),
        (status = 404, description = "Issue not found")
    ),
    tag = "issues-open"
)]
pub async fn get_issue_open(
    State(service): State<Arc<IssuesOpenService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<IssueOpenResponseDto>>> {
    let issue = service.find_issue_open_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(issue.into()), None, None)))
}

#[utoipa::path(
    put,
    path = "/api/issues-open/{id}",
    params(
        ("id" = Uuid, Path, description = "Issue ID")
    ),
    request_body = UpdateIssueOpenDto,
    responses(
        (status = 200, description = "Issue updated", body = ApiResponse<IssueOpenResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Issue or referenced record not found"),
        (status = 500, description = "Issue could not be saved")
    ),
    tag = "issues-open"
)]
pub async fn update_issue_open(
    State(service): State<Arc<IssuesOpenService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateIssueOpenDto>,
) -> Result<Json<ApiResponse<IssueOpenResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let issue = service.update_issue_open(dto, id).await?;
    Ok(Json(ApiResponse::success(Some(issue.into()), None, None)))
}

/// Delete an issue together with its schedules
#[utoipa::path(
    delete,
    path = "/api/issues-open/{id}",
    params(
        ("id" = Uuid, Path, description = "Issue ID")
    ),
    responses(
        (status = 200, description = "Issue deleted"),
        (status = 404, description = "Issue not found")
    ),
    tag = "issues-open"
)]
pub async fn delete_issue_open(
    State(service): State<Arc<IssuesOpenService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_issue_open(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Issue removed successfully".to_string()),
        None,
    )))
}
