use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for problem type
///
/// `issues_ids` is derived from the issue link table and is read-only
/// from this side of the relation.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProblemType {
    pub id: Uuid,
    pub name: String,
    pub problem_category_id: Option<Uuid>,
    pub issues_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProblemType {
    /// Build a new, not yet persisted problem type
    pub fn new(name: String, problem_category_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            problem_category_id,
            issues_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
