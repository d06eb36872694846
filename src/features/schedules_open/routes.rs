use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::schedules_open::handlers;
use crate::features::schedules_open::services::SchedulesOpenService;

/// Create routes for the schedules feature
pub fn routes(service: Arc<SchedulesOpenService>) -> Router {
    Router::new()
        .route(
            "/api/schedules-open",
            get(handlers::list_schedules_open).post(handlers::create_schedule_open),
        )
        .route(
            "/api/schedules-open/{id}",
            get(handlers::get_schedule_open)
                .put(handlers::update_schedule_open)
                .delete(handlers::delete_schedule_open),
        )
        .with_state(service)
}
