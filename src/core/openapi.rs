use utoipa::{Modify, OpenApi};

use crate::features::issues_open::{
    dtos as issues_dtos, handlers as issues_handlers, models as issues_models,
};
use crate::features::problem_categories::{
    dtos as categories_dtos, handlers as categories_handlers,
};
use crate::features::problem_types::{dtos as types_dtos, handlers as types_handlers};
use crate::features::schedules_open::{
    dtos as schedules_dtos, handlers as schedules_handlers, models as schedules_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Problem categories
        categories_handlers::create_problem_category,
        categories_handlers::list_problem_categories,
        categories_handlers::get_problem_category,
        categories_handlers::update_problem_category,
        categories_handlers::delete_problem_category,
        // Problem types
        types_handlers::create_problem_type,
        types_handlers::list_problem_types,
        types_handlers::get_problem_type,
        types_handlers::update_problem_type,
        types_handlers::delete_problem_type,
        // Issues
        issues_handlers::create_issue_open,
        issues_handlers::list_issues_open,
        issues_handlers::get_issue_open,
        issues_handlers::update_issue_open,
        issues_handlers::delete_issue_open,
        // Schedules
        schedules_handlers::create_schedule_open,
        schedules_handlers::list_schedules_open,
        schedules_handlers::get_schedule_open,
        schedules_handlers::update_schedule_open,
        schedules_handlers::delete_schedule_open,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Problem categories
            categories_dtos::CreateProblemCategoryDto,
            categories_dtos::UpdateProblemCategoryDto,
            categories_dtos::ProblemCategoryResponseDto,
            ApiResponse<categories_dtos::ProblemCategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::ProblemCategoryResponseDto>>,
            // Problem types
            types_dtos::CreateProblemTypeDto,
            types_dtos::UpdateProblemTypeDto,
            types_dtos::ProblemTypeResponseDto,
            ApiResponse<types_dtos::ProblemTypeResponseDto>,
            ApiResponse<Vec<types_dtos::ProblemTypeResponseDto>>,
            // Issues
            issues_models::IssueStatus,
            issues_dtos::CreateIssueOpenDto,
            issues_dtos::UpdateIssueOpenDto,
            issues_dtos::IssueOpenResponseDto,
            ApiResponse<issues_dtos::IssueOpenResponseDto>,
            ApiResponse<Vec<issues_dtos::IssueOpenResponseDto>>,
            // Schedules
            schedules_models::ScheduleStatus,
            schedules_dtos::CreateScheduleOpenDto,
            schedules_dtos::UpdateScheduleOpenDto,
            schedules_dtos::ScheduleOpenResponseDto,
            ApiResponse<schedules_dtos::ScheduleOpenResponseDto>,
            ApiResponse<Vec<schedules_dtos::ScheduleOpenResponseDto>>,
        )
    ),
    tags(
        (name = "problem-categories", description = "Problem categories and their problem types"),
        (name = "problem-types", description = "Problem types"),
        (name = "issues-open", description = "Helpdesk issue tickets"),
        (name = "schedules-open", description = "Scheduled follow-ups for issues"),
    ),
    info(
        title = "Helpdesk API",
        version = "0.1.0",
        description = "API documentation for the helpdesk service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
