use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::issues_open::handlers;
use crate::features::issues_open::services::IssuesOpenService;

/// Create routes for the issues feature
pub fn routes(service: Arc<IssuesOpenService>) -> Router {
    Router::new()
        .route(
            "/api/issues-open",
            get(handlers::list_issues_open).post(handlers::create_issue_open),
        )
        .route(
            "/api/issues-open/{id}",
            get(handlers::get_issue_open)
                .put(handlers::update_issue_open)
                .delete(handlers::delete_issue_open),
        )
        .with_state(service)
}
