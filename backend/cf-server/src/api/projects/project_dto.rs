use cf_core::Project;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub looking_for: String,
    pub target_amount: f64,
    /// Currency-formatted target, e.g. "$700,000.00"
    pub target_amount_display: String,
    pub teams: String,
    pub github_link: String,
    pub web_url: String,
    pub image_file: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            target_amount_display: p.target_amount_display(),
            name: p.name,
            description: p.description,
            looking_for: p.looking_for,
            target_amount: p.target_amount,
            teams: p.teams,
            github_link: p.github_link,
            web_url: p.web_url,
            image_file: p.image_file,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
