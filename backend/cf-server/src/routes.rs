use crate::{
    AppState, create_project, create_review, delete_project, delete_review, get_project, health,
    list_projects, list_reviews, update_project,
};

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Projects
        .route("/api/v1/projects", get(list_projects).post(create_project))
        .route(
            "/api/v1/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        // Reviews, nested under their project
        .route(
            "/api/v1/projects/{project_id}/reviews",
            get(list_reviews).post(create_review),
        )
        .route(
            "/api/v1/projects/{project_id}/reviews/{review_id}",
            delete(delete_review),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
