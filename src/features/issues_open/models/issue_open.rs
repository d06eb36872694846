use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::problem_types::models::ProblemType;

/// Issue status enum matching database enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "issue_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueStatus {
    #[default]
    Open,
    Progress,
    Closed,
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueStatus::Open => write!(f, "OPEN"),
            IssueStatus::Progress => write!(f, "PROGRESS"),
            IssueStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

/// Issue ticket with its problem types loaded, in stored order
#[derive(Debug, Clone, PartialEq)]
pub struct IssueOpen {
    pub id: Uuid,
    pub requester: String,
    pub phone: String,
    pub cellphone: Option<String>,
    pub email: Option<String>,
    pub city_id: String,
    pub workstation_id: String,
    pub problem_category_id: Uuid,
    pub problem_types: Vec<ProblemType>,
    pub date: DateTime<Utc>,
    pub description: Option<String>,
    pub status: IssueStatus,
    pub is_homolog: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IssueOpen {
    pub fn problem_type_ids(&self) -> Vec<Uuid> {
        self.problem_types.iter().map(|t| t.id).collect()
    }
}
