//! Project REST API handlers
//!
//! Full CRUD over projects. Every mutation validates the candidate record
//! first and persists nothing when validation fails.

use crate::{
    ApiError, ApiResult, AppState, DeleteProjectResponse, ProjectDto, ProjectListResponse,
    ProjectResponse, UpdateProjectRequest, notices,
};

use cf_core::{Project, ProjectAttributes};
use cf_db::ProjectRepository;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

const ENTITY: &str = "project";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/projects
///
/// List all projects, ordered by name
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_all().await?;

    Ok(Json(ProjectListResponse {
        count: projects.len(),
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = load_project(&state, &id).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
        notice: None,
    }))
}

/// POST /api/v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    body: Result<Json<ProjectAttributes>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let Json(attributes) = body?;

    let project = Project::create(attributes.clone())
        .map_err(|e| ApiError::invalid_record(ENTITY, e.into_errors(), &attributes))?;

    let repo = ProjectRepository::new(state.pool.clone());
    repo.create(&project).await?;

    log::info!("Created project {} ({}) via REST API", project.id, project.name);

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            project: project.into(),
            notice: Some(notices::PROJECT_CREATED.into()),
        }),
    ))
}

/// PUT /api/v1/projects/{id}
///
/// The stored record is only written when the merged attributes are valid.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectResponse>> {
    let mut project = load_project(&state, &id).await?;
    let Json(req) = body?;

    let attributes = req.apply_to(ProjectAttributes::from(&project));
    project
        .apply(attributes.clone())
        .map_err(|e| ApiError::invalid_record(ENTITY, e.into_errors(), &attributes))?;

    let repo = ProjectRepository::new(state.pool.clone());
    if !repo.update(&project).await? {
        // Deleted between the load and the write
        return Err(ApiError::not_found(format!("Project {} not found", id)));
    }

    log::info!("Updated project {} via REST API", project.id);

    Ok(Json(ProjectResponse {
        project: project.into(),
        notice: Some(notices::PROJECT_UPDATED.into()),
    }))
}

/// DELETE /api/v1/projects/{id}
///
/// Removes the project and all of its reviews in one transaction.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let reviews_deleted = repo
        .delete_with_reviews(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))?;

    log::info!(
        "Deleted project {} and {} review(s) via REST API",
        project_id,
        reviews_deleted
    );

    Ok(Json(DeleteProjectResponse {
        deleted_id: project_id.to_string(),
        reviews_deleted,
        notice: notices::PROJECT_DELETED.into(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Parse `id` and load the project, or `NotFound`.
pub(crate) async fn load_project(state: &AppState, id: &str) -> ApiResult<Project> {
    let project_id = Uuid::parse_str(id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    repo.find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))
}
