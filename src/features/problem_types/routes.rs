use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::problem_types::handlers;
use crate::features::problem_types::services::ProblemTypesService;

/// Create routes for the problem types feature
pub fn routes(service: Arc<ProblemTypesService>) -> Router {
    Router::new()
        .route(
            "/api/problem-types",
            get(handlers::list_problem_types).post(handlers::create_problem_type),
        )
        .route(
            "/api/problem-types/{id}",
            get(handlers::get_problem_type)
                .put(handlers::update_problem_type)
                .delete(handlers::delete_problem_type),
        )
        .with_state(service)
}
