use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::issues_open::dtos::{CreateIssueOpenDto, UpdateIssueOpenDto};
use crate::features::issues_open::models::{IssueOpen, IssueStatus};
use crate::features::issues_open::repositories::IssueOpenRepository;
use crate::features::problem_categories::services::ProblemCategoryResolver;
use crate::features::problem_types::ProblemTypeResolver;
use crate::features::schedules_open::models::{ScheduleOpen, ScheduleStatus};

const SAVE_ERROR: &str = "Error saving issue to the database";
const NOT_FOUND: &str = "Issue not found";

/// Narrow capability used by features that reference an issue
#[async_trait]
pub trait IssueResolver: Send + Sync {
    async fn find_issue_open(&self, id: Uuid) -> Result<IssueOpen>;
}

pub struct IssuesOpenService {
    repo: Arc<dyn IssueOpenRepository>,
    categories: Arc<dyn ProblemCategoryResolver>,
    problem_types: Arc<dyn ProblemTypeResolver>,
}

impl IssuesOpenService {
    pub fn new(
        repo: Arc<dyn IssueOpenRepository>,
        categories: Arc<dyn ProblemCategoryResolver>,
        problem_types: Arc<dyn ProblemTypeResolver>,
    ) -> Self {
        Self {
            repo,
            categories,
            problem_types,
        }
    }

    /// Open a new issue. The category and every problem type must exist.
    ///
    /// When `date_time` is given, a follow-up schedule in `PROGRESS` is written
    /// in the same transaction, carrying the alerts and the issue description.
    pub async fn create_issue(&self, dto: CreateIssueOpenDto) -> Result<IssueOpen> {
        let category = self
            .categories
            .find_problem_category(dto.problem_category_id)
            .await?;
        let problem_types = self
            .problem_types
            .resolve_problem_types(&dto.problem_types_ids)
            .await?;

        let now = Utc::now();
        let id = Uuid::now_v7();
        let follow_up = dto.date_time.map(|date_time| {
            ScheduleOpen::new(
                id,
                dto.alerts,
                dto.description.clone().unwrap_or_default(),
                ScheduleStatus::Progress,
                date_time,
            )
        });
        let issue = IssueOpen {
            id,
            requester: dto.requester,
            phone: dto.phone,
            cellphone: dto.cellphone.filter(|c| !c.is_empty()),
            email: dto.email,
            city_id: dto.city_id,
            workstation_id: dto.workstation_id,
            problem_category_id: category.id,
            problem_types,
            date: dto.date,
            description: dto.description,
            status: IssueStatus::Open,
            is_homolog: dto.is_homolog,
            created_at: now,
            updated_at: now,
        };

        let has_follow_up = follow_up.is_some();
        let saved = self
            .repo
            .create(issue, follow_up)
            .await
            .map_err(|_| AppError::Internal(SAVE_ERROR.to_string()))?;

        tracing::info!(
            "Issue opened: id={}, category={}, problem_types={}, follow_up={}",
            saved.id,
            saved.problem_category_id,
            saved.problem_types.len(),
            has_follow_up
        );
        self.find_issue_open_by_id(saved.id).await
    }

    pub async fn find_issues_open(&self) -> Result<Vec<IssueOpen>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn find_issue_open_by_id(&self, id: Uuid) -> Result<IssueOpen> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn update_issue_open(&self, dto: UpdateIssueOpenDto, id: Uuid) -> Result<IssueOpen> {
        let mut issue = self.find_issue_open_by_id(id).await?;

        if let Some(category_id) = dto.problem_category_id {
            issue.problem_category_id =
                self.categories.find_problem_category(category_id).await?.id;
        }
        if let Some(ids) = dto.problem_types_ids {
            issue.problem_types = self.problem_types.resolve_problem_types(&ids).await?;
        }

        replace_non_empty(&mut issue.requester, dto.requester);
        replace_non_empty(&mut issue.phone, dto.phone);
        replace_non_empty(&mut issue.city_id, dto.city_id);
        replace_non_empty(&mut issue.workstation_id, dto.workstation_id);
        if dto.cellphone.is_some() {
            issue.cellphone = dto.cellphone.filter(|c| !c.is_empty());
        }
        if dto.email.is_some() {
            issue.email = dto.email;
        }
        if dto.description.is_some() {
            issue.description = dto.description;
        }
        if let Some(date) = dto.date {
            issue.date = date;
        }
        if let Some(status) = dto.status {
            issue.status = status;
        }
        if let Some(is_homolog) = dto.is_homolog {
            issue.is_homolog = is_homolog;
        }

        let saved = self
            .repo
            .save(issue)
            .await
            .map_err(|_| AppError::Internal(SAVE_ERROR.to_string()))?;

        tracing::info!("Issue updated: id={}, status={}", saved.id, saved.status);
        self.find_issue_open_by_id(saved.id).await
    }

    /// Delete an issue. Its schedules go with it.
    pub async fn delete_issue_open(&self, id: Uuid) -> Result<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        tracing::info!("Issue deleted: id={}", id);
        Ok(())
    }
}

fn replace_non_empty(target: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *target = value;
    }
}

#[async_trait]
impl IssueResolver for IssuesOpenService {
    async fn find_issue_open(&self, id: Uuid) -> Result<IssueOpen> {
        self.find_issue_open_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::issues_open::repositories::mock::InMemoryIssueOpenRepository;
    use crate::features::problem_categories::models::ProblemCategory;
    use crate::features::problem_categories::repositories::mock::InMemoryProblemCategoryRepository;
    use crate::features::problem_categories::services::ProblemCategoryService;
    use crate::features::problem_types::models::ProblemType;
    use crate::features::problem_types::repositories::mock::InMemoryProblemTypeRepository;
    use crate::features::problem_types::ProblemTypesService;

    struct Fixture {
        service: IssuesOpenService,
        repo: Arc<InMemoryIssueOpenRepository>,
        category: ProblemCategory,
        types: Vec<ProblemType>,
    }

    fn fixture(issues: Vec<IssueOpen>) -> Fixture {
        let types = vec![
            ProblemType::new("Cabling".to_string(), None),
            ProblemType::new("Wi-Fi".to_string(), None),
        ];
        let category = ProblemCategory::new("Network".into(), "Net issues".into(), vec![]);

        let types_service = Arc::new(ProblemTypesService::new(Arc::new(
            InMemoryProblemTypeRepository::with_rows(types.clone()),
        )));
        let categories = Arc::new(ProblemCategoryService::new(
            Arc::new(InMemoryProblemCategoryRepository::with_rows(vec![category.clone()])),
            types_service.clone(),
        ));
        let repo = Arc::new(InMemoryIssueOpenRepository::with_rows(issues));

        Fixture {
            service: IssuesOpenService::new(repo.clone(), categories, types_service),
            repo,
            category,
            types,
        }
    }

    fn create_dto(category_id: Uuid, problem_types_ids: Vec<Uuid>) -> CreateIssueOpenDto {
        CreateIssueOpenDto {
            requester: "Maria".to_string(),
            phone: "+556233334444".to_string(),
            cellphone: Some(String::new()),
            email: Some("maria@example.com".to_string()),
            city_id: "goiania".to_string(),
            workstation_id: "ws-12".to_string(),
            problem_category_id: category_id,
            problem_types_ids,
            date: Utc::now(),
            description: None,
            is_homolog: false,
            alerts: vec![],
            date_time: None,
        }
    }

    #[tokio::test]
    async fn test_create_issue_resolves_references() {
        let f = fixture(vec![]);
        let ids = vec![f.types[1].id, f.types[0].id];

        let issue = f
            .service
            .create_issue(create_dto(f.category.id, ids.clone()))
            .await
            .unwrap();

        assert_eq!(issue.status, IssueStatus::Open);
        assert_eq!(issue.problem_category_id, f.category.id);
        assert_eq!(issue.problem_type_ids(), ids);
        assert_eq!(issue.cellphone, None);
        assert_eq!(f.repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_create_issue_with_unknown_category_writes_nothing() {
        let f = fixture(vec![]);

        let result = f.service.create_issue(create_dto(Uuid::now_v7(), vec![])).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(f.repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_create_issue_with_unknown_type_writes_nothing() {
        let f = fixture(vec![]);

        let result = f
            .service
            .create_issue(create_dto(f.category.id, vec![f.types[0].id, Uuid::now_v7()]))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(f.repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_create_issue_save_failure_is_internal() {
        let f = fixture(vec![]);
        f.repo.fail_saves();

        let result = f.service.create_issue(create_dto(f.category.id, vec![])).await;

        match result {
            Err(AppError::Internal(msg)) => assert_eq!(msg, SAVE_ERROR),
            other => panic!("expected internal error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let f = fixture(vec![]);
        let issue = f
            .service
            .create_issue(create_dto(f.category.id, vec![f.types[0].id]))
            .await
            .unwrap();

        let dto = UpdateIssueOpenDto {
            requester: Some(String::new()),
            status: Some(IssueStatus::Progress),
            description: Some("Router keeps rebooting".to_string()),
            ..Default::default()
        };
        let updated = f.service.update_issue_open(dto, issue.id).await.unwrap();

        assert_eq!(updated.requester, "Maria");
        assert_eq!(updated.status, IssueStatus::Progress);
        assert_eq!(updated.description.as_deref(), Some("Router keeps rebooting"));
        assert_eq!(updated.problem_type_ids(), vec![f.types[0].id]);
    }

    #[tokio::test]
    async fn test_update_replaces_problem_types() {
        let f = fixture(vec![]);
        let issue = f
            .service
            .create_issue(create_dto(f.category.id, vec![f.types[0].id]))
            .await
            .unwrap();

        let dto = UpdateIssueOpenDto {
            problem_types_ids: Some(vec![f.types[1].id]),
            ..Default::default()
        };
        let updated = f.service.update_issue_open(dto, issue.id).await.unwrap();

        assert_eq!(updated.problem_type_ids(), vec![f.types[1].id]);
    }

    #[tokio::test]
    async fn test_update_with_unknown_category_is_not_found() {
        let f = fixture(vec![]);
        let issue = f
            .service
            .create_issue(create_dto(f.category.id, vec![]))
            .await
            .unwrap();

        let dto = UpdateIssueOpenDto {
            problem_category_id: Some(Uuid::now_v7()),
            ..Default::default()
        };
        let result = f.service.update_issue_open(dto, issue.id).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(f.repo.save_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_list_is_ok() {
        let f = fixture(vec![]);
        assert!(f.service.find_issues_open().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let f = fixture(vec![]);
        let result = f.service.delete_issue_open(Uuid::now_v7()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_resolver_finds_issue() {
        let f = fixture(vec![]);
        let issue = f
            .service
            .create_issue(create_dto(f.category.id, vec![]))
            .await
            .unwrap();

        let resolver: &dyn IssueResolver = &f.service;
        assert_eq!(resolver.find_issue_open(issue.id).await.unwrap(), issue);
        assert!(matches!(
            resolver.find_issue_open(Uuid::now_v7()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_with_date_time_opens_follow_up_schedule() {
        let f = fixture(vec![]);
        let date_time = Utc::now() + chrono::Duration::days(1);
        let alert = date_time - chrono::Duration::hours(1);
        let dto = CreateIssueOpenDto {
            description: Some("Printer offline".to_string()),
            alerts: vec![alert],
            date_time: Some(date_time),
            ..create_dto(f.category.id, vec![])
        };

        let issue = f.service.create_issue(dto).await.unwrap();

        let follow_ups = f.repo.follow_ups();
        assert_eq!(follow_ups.len(), 1);
        assert_eq!(follow_ups[0].issue_id, issue.id);
        assert_eq!(follow_ups[0].status_e, ScheduleStatus::Progress);
        assert_eq!(follow_ups[0].date_time, date_time);
        assert_eq!(follow_ups[0].alerts, vec![alert]);
        assert_eq!(follow_ups[0].description, "Printer offline");
    }

    #[tokio::test]
    async fn test_create_without_date_time_opens_no_schedule() {
        let f = fixture(vec![]);
        let dto = CreateIssueOpenDto {
            alerts: vec![Utc::now()],
            ..create_dto(f.category.id, vec![])
        };

        f.service.create_issue(dto).await.unwrap();

        assert!(f.repo.follow_ups().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_opens_no_schedule() {
        let f = fixture(vec![]);
        f.repo.fail_saves();
        let dto = CreateIssueOpenDto {
            date_time: Some(Utc::now()),
            ..create_dto(f.category.id, vec![])
        };

        let result = f.service.create_issue(dto).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
        assert!(f.repo.follow_ups().is_empty());
    }

    #[tokio::test]
    async fn test_saved_issue_lists_itself_on_its_problem_types() {
        let f = fixture(vec![]);

        let created = f
            .service
            .create_issue(create_dto(f.category.id, vec![f.types[0].id]))
            .await
            .unwrap();
        assert_eq!(created.problem_types[0].issues_ids, vec![created.id]);

        let dto = UpdateIssueOpenDto {
            problem_types_ids: Some(vec![f.types[1].id]),
            ..Default::default()
        };
        let updated = f.service.update_issue_open(dto, created.id).await.unwrap();
        assert_eq!(updated.problem_types[0].id, f.types[1].id);
        assert_eq!(updated.problem_types[0].issues_ids, vec![created.id]);
    }
}
