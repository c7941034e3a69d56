use crate::ProjectDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: ProjectDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
