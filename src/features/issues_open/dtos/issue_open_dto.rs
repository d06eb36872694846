use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::issues_open::models::{IssueOpen, IssueStatus};
use crate::features::problem_types::dtos::ProblemTypeResponseDto;
use crate::shared::validation::{validate_optional_phone, PHONE_REGEX};

/// Request DTO for opening an issue
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIssueOpenDto {
    #[validate(length(min = 1, max = 200, message = "Requester must be 1-200 characters"))]
    pub requester: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    /// Empty string is treated as no cellphone
    #[validate(custom(function = "validate_optional_phone"))]
    pub cellphone: Option<String>,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 255, message = "Email must not exceed 255 characters")
    )]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city_id: String,

    #[validate(length(min = 1, max = 100, message = "Workstation must be 1-100 characters"))]
    pub workstation_id: String,

    pub problem_category_id: Uuid,

    /// Problem types concerned by the issue, in display order
    #[serde(default)]
    pub problem_types_ids: Vec<Uuid>,

    pub date: DateTime<Utc>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[serde(rename = "isHomolog", default)]
    pub is_homolog: bool,

    /// Reminders for the follow-up schedule, used with `dateTime`
    #[serde(default)]
    pub alerts: Vec<DateTime<Utc>>,

    /// When present, a follow-up schedule in `PROGRESS` is opened with the issue
    #[serde(rename = "dateTime")]
    pub date_time: Option<DateTime<Utc>>,
}

/// Request DTO for updating an issue. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateIssueOpenDto {
    #[validate(length(max = 200, message = "Requester must not exceed 200 characters"))]
    pub requester: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(custom(function = "validate_optional_phone"))]
    pub cellphone: Option<String>,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 255, message = "Email must not exceed 255 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 100, message = "City must not exceed 100 characters"))]
    pub city_id: Option<String>,

    #[validate(length(max = 100, message = "Workstation must not exceed 100 characters"))]
    pub workstation_id: Option<String>,

    pub problem_category_id: Option<Uuid>,
    pub problem_types_ids: Option<Vec<Uuid>>,
    pub date: Option<DateTime<Utc>>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    pub status: Option<IssueStatus>,

    #[serde(rename = "isHomolog")]
    pub is_homolog: Option<bool>,
}

/// Response DTO for issue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueOpenResponseDto {
    pub id: Uuid,
    pub requester: String,
    pub phone: String,
    pub cellphone: Option<String>,
    pub email: Option<String>,
    pub city_id: String,
    pub workstation_id: String,
    pub problem_category_id: Uuid,
    pub problem_types: Vec<ProblemTypeResponseDto>,
    pub date: DateTime<Utc>,
    pub description: Option<String>,
    pub status: IssueStatus,
    #[serde(rename = "isHomolog")]
    pub is_homolog: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<IssueOpen> for IssueOpenResponseDto {
    fn from(i: IssueOpen) -> Self {
        Self {
            id: i.id,
            requester: i.requester,
            phone: i.phone,
            cellphone: i.cellphone,
            email: i.email,
            city_id: i.city_id,
            workstation_id: i.workstation_id,
            problem_category_id: i.problem_category_id,
            problem_types: i.problem_types.into_iter().map(Into::into).collect(),
            date: i.date,
            description: i.description,
            status: i.status,
            is_homolog: i.is_homolog,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}
