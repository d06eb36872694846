use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::problem_categories::models::ProblemCategory;
use crate::features::problem_types::dtos::ProblemTypeResponseDto;

/// Request DTO for creating a problem category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProblemCategoryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 1000, message = "Description must be 1-1000 characters"))]
    pub description: String,

    /// Problem types to attach, in display order
    pub problem_types_ids: Option<Vec<Uuid>>,
}

/// Request DTO for updating a problem category
///
/// `name` and `description` are replaced only when a non-empty value is
/// supplied. `problem_types_ids`, when present, replaces the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProblemCategoryDto {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    pub problem_types_ids: Option<Vec<Uuid>>,
}

/// Response DTO for problem category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemCategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub problem_types: Vec<ProblemTypeResponseDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProblemCategory> for ProblemCategoryResponseDto {
    fn from(c: ProblemCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            problem_types: c.problem_types.into_iter().map(Into::into).collect(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
