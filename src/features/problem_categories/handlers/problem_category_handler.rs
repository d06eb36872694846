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
use crate::features::problem_categories::dtos::{
    CreateProblemCategoryDto, ProblemCategoryResponseDto, UpdateProblemCategoryDto,
};
use crate::features::problem_categories::services::ProblemCategoryService;
use crate::shared::types::{ApiResponse, Meta};

/// Create a problem category
///
/// Every ID in `problem_types_ids` must refer to an existing problem type,
/// otherwise nothing is saved and 404 is returned.
#[utoipa::path(
    post,
    path = "/api/problem-categories",
    request_body = CreateProblemCategoryDto,
    responses(
        (status = 201, description = "Problem category created", body = ApiResponse<ProblemCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced problem type not found"),
        (status = 500, description = "Problem category could not be saved")
    ),
    tag = "problem-categories"
)]
pub async fn create_problem_category(
    State(service): State<Arc<ProblemCategoryService>>,
    AppJson(dto): AppJson<CreateProblemCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProblemCategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create_problem_category(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(category.into()), None, None)),
    ))
}

/// List all problem categories with their problem types
#[utoipa::path(
    get,
    path = "/api/problem-categories",
    responses(
        (status = 200, description = "List of problem categories", body = ApiResponse<Vec<ProblemCategoryResponseDto>>),
        (status = 404, description = "No problem categories exist")
    ),
    tag = "problem-categories"
)]
pub async fn list_problem_categories(
    State(service): State<Arc<ProblemCategoryService>>,
) -> Result<Json<ApiResponse<Vec<ProblemCategoryResponseDto>>>> {
    let categories: Vec<ProblemCategoryResponseDto> = service
        .find_problem_categories()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let meta = Meta::for_items(&categories);
    Ok(Json(ApiResponse::success(Some(categories), None, Some(meta))))
}

/// Get a problem category by ID
#[utoipa::path(
    get,
    path = "/api/problem-categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Problem category ID")
    ),
    responses(
        (status = 200, description = "Problem category found", body = ApiResponse<ProblemCategoryResponseDto>),
        (status = 404, description = "Problem category not found")
    ),
    tag = "problem-categories"
)]
pub async fn get_problem_category(
    State(service): State<Arc<ProblemCategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProblemCategoryResponseDto>>> {
    let category = service.find_problem_category_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(category.into()), None, None)))
}

/// Update a problem category
#[utoipa::path(
    put,
    path = "/api/problem-categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Problem category ID")
    ),
    request_body = UpdateProblemCategoryDto,
    responses(
        (status = 200, description = "Problem category updated", body = ApiResponse<ProblemCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Problem category or referenced problem type not found"),
        (status = 500, description = "Problem category could not be saved")
    ),
    tag = "problem-categories"
)]
pub async fn update_problem_category(
    State(service): State<Arc<ProblemCategoryService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProblemCategoryDto>,
) -> Result<Json<ApiResponse<ProblemCategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update_problem_category(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(category.into()), None, None)))
}

/// Delete a problem category
#[utoipa::path(
    delete,
    path = "/api/problem-categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Problem category ID")
    ),
    responses(
        (status = 200, description = "Problem category deleted"),
        (status = 404, description = "Problem category not found")
    ),
    tag = "problem-categories"
)]
pub async fn delete_problem_category(
    State(service): State<Arc<ProblemCategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_problem_category(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Problem category removed successfully".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::features::problem_categories::dtos::ProblemCategoryResponseDto;
    use crate::features::problem_categories::models::ProblemCategory;
    use crate::features::problem_categories::repositories::mock::InMemoryProblemCategoryRepository;
    use crate::features::problem_categories::{routes, ProblemCategoryService};
    use crate::features::problem_types::models::ProblemType;
    use crate::features::problem_types::repositories::mock::InMemoryProblemTypeRepository;
    use crate::features::problem_types::ProblemTypesService;
    use crate::shared::test_helpers::test_server;
    use crate::shared::types::ApiResponse;

    fn server_with(
        categories: Vec<ProblemCategory>,
        types: Vec<ProblemType>,
    ) -> axum_test::TestServer {
        let types_service = Arc::new(ProblemTypesService::new(Arc::new(
            InMemoryProblemTypeRepository::with_rows(types),
        )));
        let service = ProblemCategoryService::new(
            Arc::new(InMemoryProblemCategoryRepository::with_rows(categories)),
            types_service,
        );
        test_server(routes::routes(Arc::new(service)))
    }

    #[tokio::test]
    async fn test_create_with_types() {
        let t1 = ProblemType::new("Cabling".to_string(), None);
        let t2 = ProblemType::new("Wi-Fi".to_string(), None);
        let server = server_with(vec![], vec![t1.clone(), t2.clone()]);

        let response = server
            .post("/api/problem-categories")
            .json(&json!({
                "name": "Network",
                "description": "Net issues",
                "problem_types_ids": [t1.id, t2.id],
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body: ApiResponse<ProblemCategoryResponseDto> = response.json();
        let category = body.data.unwrap();
        let ids: Vec<_> = category.problem_types.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t1.id, t2.id]);
    }

    #[tokio::test]
    async fn test_create_with_unknown_type_is_not_found() {
        let server = server_with(vec![], vec![]);

        let response = server
            .post("/api/problem-categories")
            .json(&json!({
                "name": "Network",
                "description": "Net issues",
                "problem_types_ids": [uuid::Uuid::now_v7()],
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let server = server_with(vec![], vec![]);

        let response = server
            .post("/api/problem-categories")
            .json(&json!({ "name": 42 }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_empty_is_not_found() {
        let server = server_with(vec![], vec![]);
        let response = server.get("/api/problem-categories").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_partial_update_and_delete() {
        let category = ProblemCategory::new("Network".into(), "Net issues".into(), vec![]);
        let id = category.id;
        let server = server_with(vec![category], vec![]);

        let response = server
            .put(&format!("/api/problem-categories/{}", id))
            .json(&json!({ "name": "Networking" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: ApiResponse<ProblemCategoryResponseDto> = response.json();
        let updated = body.data.unwrap();
        assert_eq!(updated.name, "Networking");
        assert_eq!(updated.description, "Net issues");

        let response = server
            .delete(&format!("/api/problem-categories/{}", id))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let response = server
            .get(&format!("/api/problem-categories/{}", id))
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
