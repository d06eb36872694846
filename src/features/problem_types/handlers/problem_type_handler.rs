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
use crate::features::problem_types::dtos::{
    CreateProblemTypeDto, ProblemTypeResponseDto, UpdateProblemTypeDto,
};
use crate::features::problem_types::services::ProblemTypesService;
use crate::shared::types::{ApiResponse, Meta};

/// Create a problem type
#[utoipa::path(
    post,
    path = "/api/problem-types",
    request_body = CreateProblemTypeDto,
    responses(
        (status = 201, description = "Problem type created", body = ApiResponse<ProblemTypeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Problem type could not be saved")
    ),
    tag = "problem-types"
)]
pub async fn create_problem_type(
    State(service): State<Arc<ProblemTypesService>>,
    AppJson(dto): AppJson<CreateProblemTypeDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProblemTypeResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let problem_type = service.create_problem_type(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(problem_type.into()), None, None)),
    ))
}

/// List all problem types
#[utoipa::path(
    get,
    path = "/api/problem-types",
    responses(
        (status = 200, description = "List of problem types", body = ApiResponse<Vec<ProblemTypeResponseDto>>),
    ),
    tag = "problem-types"
)]
pub async fn list_problem_types(
    State(service): State<Arc<ProblemTypesService>>,
) -> Result<Json<ApiResponse<Vec<ProblemTypeResponseDto>>>> {
    let problem_types: Vec<ProblemTypeResponseDto> = service
        .find_problem_types()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let meta = Meta::for_items(&problem_types);
    Ok(Json(ApiResponse::success(Some(problem_types), None, Some(meta))))
}

/// Get a problem type by ID
#[utoipa::path(
    get,
    path = "/api/problem-types/{id}",
    params(
        ("id" = Uuid, Path, description = "Problem type ID")
    ),
    responses(
        (status = 200, description = "Problem type found", body = ApiResponse<ProblemTypeResponseDto>),
        (status = 404, description = "Problem type not found")
    ),
    tag = "problem-types"
)]
pub async fn get_problem_type(
    State(service): State<Arc<ProblemTypesService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProblemTypeResponseDto>>> {
    let problem_type = service.find_problem_type(id).await?;
    Ok(Json(ApiResponse::success(Some(problem_type.into()), None, None)))
}

/// Update a problem type
///
/// Absent or empty fields keep their stored value.
#[utoipa::path(
    put,
    path = "/api/problem-types/{id}",
    params(
        ("id" = Uuid, Path, description = "Problem type ID")
    ),
    request_body = UpdateProblemTypeDto,
    responses(
        (status = 200, description = "Problem type updated", body = ApiResponse<ProblemTypeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Problem type not found")
    ),
    tag = "problem-types"
)]
pub async fn update_problem_type(
    State(service): State<Arc<ProblemTypesService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProblemTypeDto>,
) -> Result<Json<ApiResponse<ProblemTypeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let problem_type = service.update_problem_type(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(problem_type.into()), None, None)))
}

/// Delete a problem type
#[utoipa::path(
    delete,
    path = "/api/problem-types/{id}",
    params(
        ("id" = Uuid, Path, description = "Problem type ID")
    ),
    responses(
        (status = 200, description = "Problem type deleted"),
        (status = 404, description = "Problem type not found")
    ),
    tag = "problem-types"
)]
pub async fn delete_problem_type(
    State(service): State<Arc<ProblemTypesService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_problem_type(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Problem type removed successfully".to_string()),
        None,
    )))
}
