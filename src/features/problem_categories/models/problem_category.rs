use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::features::problem_types::models::ProblemType;

/// Problem category with its problem types loaded, in stored order
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemCategory {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub problem_types: Vec<ProblemType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProblemCategory {
    /// Build a new, not yet persisted category
    pub fn new(name: String, description: String, problem_types: Vec<ProblemType>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            description,
            problem_types,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn problem_type_ids(&self) -> Vec<Uuid> {
        self.problem_types.iter().map(|t| t.id).collect()
    }
}
