use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::problem_types::dtos::{CreateProblemTypeDto, UpdateProblemTypeDto};
use crate::features::problem_types::models::ProblemType;
use crate::features::problem_types::repositories::ProblemTypeRepository;

const SAVE_ERROR: &str = "Error saving problem type to the database";

/// Narrow capability used by features that reference problem types
#[async_trait]
pub trait ProblemTypeResolver: Send + Sync {
    /// Resolve `ids` to records in input order, duplicates included.
    /// Fails with `NotFound` naming the first unresolved ID.
    async fn resolve_problem_types(&self, ids: &[Uuid]) -> Result<Vec<ProblemType>>;
}

/// Service for problem type operations
pub struct ProblemTypesService {
    repo: Arc<dyn ProblemTypeRepository>,
}

impl ProblemTypesService {
    pub fn new(repo: Arc<dyn ProblemTypeRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_problem_type(&self, dto: CreateProblemTypeDto) -> Result<ProblemType> {
        let problem_type = ProblemType::new(dto.name, dto.problem_category_id);

        let saved = self
            .repo
            .save(problem_type)
            .await
            .map_err(|_| AppError::Internal(SAVE_ERROR.to_string()))?;

        tracing::info!("Problem type created: id={}", saved.id);
        Ok(saved)
    }

    pub async fn find_problem_types(&self) -> Result<Vec<ProblemType>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn find_problem_type(&self, id: Uuid) -> Result<ProblemType> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Problem type {} not found", id)))
    }

    /// Update name and owning category; absent or empty values keep the stored ones
    pub async fn update_problem_type(
        &self,
        id: Uuid,
        dto: UpdateProblemTypeDto,
    ) -> Result<ProblemType> {
        let mut problem_type = self.find_problem_type(id).await?;

        if let Some(name) = dto.name.filter(|n| !n.is_empty()) {
            problem_type.name = name;
        }
        if let Some(category_id) = dto.problem_category_id {
            problem_type.problem_category_id = Some(category_id);
        }

        self.repo
            .save(problem_type)
            .await
            .map_err(|_| AppError::Internal(SAVE_ERROR.to_string()))
    }

    pub async fn delete_problem_type(&self, id: Uuid) -> Result<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(
                "No problem type was found with the given ID".to_string(),
            ));
        }

        tracing::info!("Problem type deleted: id={}", id);
        Ok(())
    }
}

#[async_trait]
impl ProblemTypeResolver for ProblemTypesService {
    async fn resolve_problem_types(&self, ids: &[Uuid]) -> Result<Vec<ProblemType>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashMap<Uuid, ProblemType> = self
            .repo
            .find_by_ids(ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        ids.iter()
            .map(|id| {
                found
                    .get(id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound(format!("Problem type {} not found", id)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::problem_types::repositories::mock::InMemoryProblemTypeRepository;

    fn service_with(
        rows: Vec<ProblemType>,
    ) -> (ProblemTypesService, Arc<InMemoryProblemTypeRepository>) {
        let repo = Arc::new(InMemoryProblemTypeRepository::with_rows(rows));
        (ProblemTypesService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_problem_type() {
        let (service, repo) = service_with(vec![]);
        let category_id = Uuid::now_v7();

        let created = service
            .create_problem_type(CreateProblemTypeDto {
                name: "Printer".to_string(),
                problem_category_id: Some(category_id),
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Printer");
        assert_eq!(created.problem_category_id, Some(category_id));
        assert!(created.issues_ids.is_empty());
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_create_problem_type_save_failure() {
        let (service, repo) = service_with(vec![]);
        repo.fail_saves();

        let result = service
            .create_problem_type(CreateProblemTypeDto {
                name: "Printer".to_string(),
                problem_category_id: None,
            })
            .await;

        match result {
            Err(AppError::Internal(msg)) => assert_eq!(msg, SAVE_ERROR),
            other => panic!("expected internal error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_find_problem_type_not_found() {
        let (service, _) = service_with(vec![]);
        let result = service.find_problem_type(Uuid::now_v7()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_problem_types_empty_is_ok() {
        let (service, _) = service_with(vec![]);
        assert!(service.find_problem_types().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_problem_type_keeps_absent_fields() {
        let category_id = Uuid::now_v7();
        let existing = ProblemType::new("Printer".to_string(), Some(category_id));
        let id = existing.id;
        let (service, _) = service_with(vec![existing]);

        let updated = service
            .update_problem_type(
                id,
                UpdateProblemTypeDto {
                    name: Some(String::new()),
                    problem_category_id: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Printer");
        assert_eq!(updated.problem_category_id, Some(category_id));

        let renamed = service
            .update_problem_type(
                id,
                UpdateProblemTypeDto {
                    name: Some("Scanner".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "Scanner");
    }

    #[tokio::test]
    async fn test_update_problem_type_not_found() {
        let (service, repo) = service_with(vec![]);
        let result = service
            .update_problem_type(Uuid::now_v7(), UpdateProblemTypeDto::default())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_problem_type() {
        let existing = ProblemType::new("Printer".to_string(), None);
        let id = existing.id;
        let (service, _) = service_with(vec![existing]);

        service.delete_problem_type(id).await.unwrap();

        assert!(matches!(
            service.find_problem_type(id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_problem_type(id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_resolve_preserves_input_order_and_duplicates() {
        let a = ProblemType::new("A".to_string(), None);
        let b = ProblemType::new("B".to_string(), None);
        let (service, _) = service_with(vec![a.clone(), b.clone()]);

        let resolved = service
            .resolve_problem_types(&[b.id, a.id, b.id])
            .await
            .unwrap();

        let ids: Vec<Uuid> = resolved.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![b.id, a.id, b.id]);
    }

    #[tokio::test]
    async fn test_resolve_reports_first_missing_id() {
        let a = ProblemType::new("A".to_string(), None);
        let missing_first = Uuid::now_v7();
        let missing_second = Uuid::now_v7();
        let (service, _) = service_with(vec![a.clone()]);

        let result = service
            .resolve_problem_types(&[a.id, missing_first, missing_second])
            .await;

        match result {
            Err(AppError::NotFound(msg)) => {
                assert!(msg.contains(&missing_first.to_string()));
                assert!(!msg.contains(&missing_second.to_string()));
            }
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_empty_list() {
        let (service, _) = service_with(vec![]);
        assert!(service.resolve_problem_types(&[]).await.unwrap().is_empty());
    }
}
