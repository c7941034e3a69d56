pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::acting_user::ActingUser,
    notices,
    projects::{
        delete_project_response::DeleteProjectResponse,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
        update_project_request::UpdateProjectRequest,
    },
    reviews::{
        delete_review_response::DeleteReviewResponse,
        review_dto::ReviewDto,
        review_list_response::ReviewListResponse,
        review_response::ReviewResponse,
        reviews::{create_review, delete_review, list_reviews},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
