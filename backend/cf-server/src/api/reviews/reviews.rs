//! Review REST API handlers
//!
//! Reviews live under a project. Every handler resolves the parent project
//! before touching reviews.

use crate::{
    ActingUser, ApiError, ApiResult, AppState, DeleteReviewResponse, ReviewDto,
    ReviewListResponse, ReviewResponse, api::projects::projects::load_project, notices,
};

use cf_core::{Review, ReviewAttributes};
use cf_db::ReviewRepository;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

/// GET /api/v1/projects/{project_id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ReviewListResponse>> {
    let project = load_project(&state, &project_id).await?;

    let repo = ReviewRepository::new(state.pool.clone());
    let reviews = repo.find_by_project(project.id).await?;

    Ok(Json(ReviewListResponse {
        reviews: reviews.into_iter().map(ReviewDto::from).collect(),
    }))
}

/// POST /api/v1/projects/{project_id}/reviews
///
/// Requires a signed-in user, checked before the body is read. Only `name`,
/// `remark` and `stars` are taken from the body.
pub async fn create_review(
    State(state): State<AppState>,
    acting_user: ActingUser,
    Path(project_id): Path<String>,
    body: Result<Json<ReviewAttributes>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ReviewResponse>)> {
    let user_id = acting_user.require()?;

    let project = load_project(&state, &project_id).await?;
    let Json(attributes) = body?;

    let review = Review::create(project.id, attributes.clone(), user_id)
        .map_err(|e| ApiError::invalid_record("review", e.into_errors(), &attributes))?;

    let repo = ReviewRepository::new(state.pool.clone());
    repo.create(&review).await?;

    log::info!(
        "Created review {} on project {} by user {} via REST API",
        review.id,
        project.id,
        user_id
    );

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse {
            review: review.into(),
            notice: notices::REVIEW_CREATED.into(),
        }),
    ))
}

/// DELETE /api/v1/projects/{project_id}/reviews/{review_id}
///
/// Any signed-in user may delete any review of the project.
pub async fn delete_review(
    State(state): State<AppState>,
    acting_user: ActingUser,
    Path((project_id, review_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteReviewResponse>> {
    let user_id = acting_user.require()?;

    let project = load_project(&state, &project_id).await?;
    let review_uuid = Uuid::parse_str(&review_id)?;

    let repo = ReviewRepository::new(state.pool.clone());
    let review = repo
        .find_in_project(project.id, review_uuid)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "Review {} not found in project {}",
                review_id, project.id
            ))
        })?;

    if !repo.delete(review.id).await? {
        return Err(ApiError::not_found(format!("Review {} not found", review_id)));
    }

    log::info!(
        "Deleted review {} from project {} by user {} via REST API",
        review.id,
        project.id,
        user_id
    );

    Ok(Json(DeleteReviewResponse {
        deleted_id: review.id.to_string(),
        notice: notices::REVIEW_DELETED.into(),
    }))
}
