use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::problem_categories::handlers;
use crate::features::problem_categories::services::ProblemCategoryService;

/// Create routes for the problem categories feature
pub fn routes(service: Arc<ProblemCategoryService>) -> Router {
    Router::new()
        .route(
            "/api/problem-categories",
            get(handlers::list_problem_categories).post(handlers::create_problem_category),
        )
        .route(
            "/api/problem-categories/{id}",
            get(handlers::get_problem_category)
                .put(handlers::update_problem_category)
                .delete(handlers::delete_problem_category),
        )
        .with_state(service)
}
