use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::problem_types::models::ProblemType;

/// Request DTO for creating a problem type
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProblemTypeDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Owning category, if any
    pub problem_category_id: Option<Uuid>,
}

/// Request DTO for updating a problem type
///
/// Fields that are absent or empty keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProblemTypeDto {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub name: Option<String>,

    pub problem_category_id: Option<Uuid>,
}

/// Response DTO for problem type
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemTypeResponseDto {
    pub id: Uuid,
    pub name: String,
    pub problem_category_id: Option<Uuid>,
    pub issues_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProblemType> for ProblemTypeResponseDto {
    fn from(t: ProblemType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            problem_category_id: t.problem_category_id,
            issues_ids: t.issues_ids,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
