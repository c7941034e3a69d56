use crate::ProjectDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectDto>,
    pub count: usize,
}
