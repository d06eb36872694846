use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::problem_categories::dtos::{
    CreateProblemCategoryDto, UpdateProblemCategoryDto,
};
use crate::features::problem_categories::models::ProblemCategory;
use crate::features::problem_categories::repositories::ProblemCategoryRepository;
use crate::features::problem_types::models::ProblemType;
use crate::features::problem_types::ProblemTypeResolver;

const CREATE_ERROR: &str = "Error saving problem category to the database";
const UPDATE_ERROR: &str = "Error saving data to the database";
const NOT_FOUND: &str = "Problem category not found";
const DELETE_NOT_FOUND: &str = "No problem category was found with the given ID";

/// Narrow capability used by features that reference a problem category
#[async_trait]
pub trait ProblemCategoryResolver: Send + Sync {
    async fn find_problem_category(&self, id: Uuid) -> Result<ProblemCategory>;
}

/// Service for problem category operations
pub struct ProblemCategoryService {
    repo: Arc<dyn ProblemCategoryRepository>,
    problem_types: Arc<dyn ProblemTypeResolver>,
}

impl ProblemCategoryService {
    pub fn new(
        repo: Arc<dyn ProblemCategoryRepository>,
        problem_types: Arc<dyn ProblemTypeResolver>,
    ) -> Self {
        Self {
            repo,
            problem_types,
        }
    }

    /// Resolve type IDs to records in input order. Any unknown ID fails the
    /// whole call with the resolver's `NotFound`.
    pub async fn update_problem_types(
        &self,
        problem_types_ids: &[Uuid],
    ) -> Result<Vec<ProblemType>> {
        self.problem_types
            .resolve_problem_types(problem_types_ids)
            .await
    }

    pub async fn create_problem_category(
        &self,
        dto: CreateProblemCategoryDto,
    ) -> Result<ProblemCategory> {
        let problem_types = match dto.problem_types_ids {
            Some(ref ids) => self.update_problem_types(ids).await?,
            None => Vec::new(),
        };

        let category = ProblemCategory::new(dto.name, dto.description, problem_types);

        let saved = self
            .repo
            .save(category)
            .await
            .map_err(|_| AppError::Internal(CREATE_ERROR.to_string()))?;

        tracing::info!(
            "Problem category created: id={}, problem_types={}",
            saved.id,
            saved.problem_types.len()
        );
        Ok(saved)
    }

    /// List every category with its problem types. No rows is reported as `NotFound`.
    pub async fn find_problem_categories(&self) -> Result<Vec<ProblemCategory>> {
        let categories = self.repo.find_all().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        Ok(categories)
    }

    pub async fn find_problem_category_by_id(&self, id: Uuid) -> Result<ProblemCategory> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn update_problem_category(
        &self,
        id: Uuid,
        dto: UpdateProblemCategoryDto,
    ) -> Result<ProblemCategory> {
        let mut category = self.find_problem_category_by_id(id).await?;

        let UpdateProblemCategoryDto {
            name,
            description,
            problem_types_ids,
        } = dto;

        if let Some(ids) = problem_types_ids {
            category.problem_types = self.update_problem_types(&ids).await?;
        }
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            category.name = name;
        }
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            category.description = description;
        }

        self.repo
            .save(category)
            .await
            .map_err(|_| AppError::Internal(UPDATE_ERROR.to_string()))
    }

    pub async fn delete_problem_category(&self, id: Uuid) -> Result<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(DELETE_NOT_FOUND.to_string()));
        }

        tracing::info!("Problem category deleted: id={}", id);
        Ok(())
    }
}

#[async_trait]
impl ProblemCategoryResolver for ProblemCategoryService {
    async fn find_problem_category(&self, id: Uuid) -> Result<ProblemCategory> {
        self.find_problem_category_by_id(id).await
    }
}
